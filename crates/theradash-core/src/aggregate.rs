//! Category aggregation: totals and derived shares.

use crate::color::AccentColor;
use crate::currency::format_currency;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Maximum divergence, in percentage points, tolerated between a
/// caller-supplied percentage and the share derived from revenue / total.
pub const SHARE_TOLERANCE: f64 = 0.5;

/// One revenue category as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueCategory {
    /// Display name
    pub name: String,
    /// Raw revenue amount
    pub revenue: f64,
    /// Bar color token
    pub color: AccentColor,
    /// Optional unit count (therapists, sessions, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Caller-computed share of total. Deprecated: the engine derives the
    /// share itself; when this field is present it is only checked for
    /// agreement with the derived value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl RevenueCategory {
    /// Create a new revenue category.
    #[must_use]
    pub fn new(name: impl Into<String>, revenue: f64) -> Self {
        Self {
            name: name.into(),
            revenue,
            color: AccentColor::default(),
            count: None,
            percentage: None,
        }
    }

    /// Set the bar color.
    #[must_use]
    pub const fn color(mut self, color: AccentColor) -> Self {
        self.color = color;
        self
    }

    /// Set the unit count.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the deprecated caller-computed percentage.
    #[must_use]
    pub const fn percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

/// Derived share for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Display name
    pub name: String,
    /// Raw revenue amount
    pub revenue: f64,
    /// Percent of the signed total (0 when the total is 0)
    pub share: f64,
    /// Bar color token
    pub color: AccentColor,
    /// Optional unit count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Aggregated revenue across a category sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    total: f64,
    shares: Vec<CategoryShare>,
}

impl RevenueBreakdown {
    /// Get the signed total across all categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Get the per-category shares in input order.
    #[must_use]
    pub fn shares(&self) -> &[CategoryShare] {
        &self.shares
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Whether the breakdown has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Get the total as an abbreviated currency string.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_currency(self.total)
    }
}

/// Aggregate a category sequence into a total and derived shares.
///
/// The total is the signed sum of all revenues; negative revenue is not
/// validated and flows through arithmetically. Each share is derived as
/// `revenue / total * 100`, with every share defined as 0 when the total
/// is 0. A non-finite revenue, or a caller-supplied percentage that
/// disagrees with the derived share by more than [`SHARE_TOLERANCE`],
/// fails fast before any output is produced.
pub fn aggregate(categories: &[RevenueCategory]) -> Result<RevenueBreakdown, ValidationError> {
    for category in categories {
        if !category.revenue.is_finite() {
            return Err(ValidationError::NonFiniteRevenue {
                name: category.name.clone(),
            });
        }
    }

    let total: f64 = categories.iter().map(|c| c.revenue).sum();

    let mut shares = Vec::with_capacity(categories.len());
    for category in categories {
        let share = if total == 0.0 {
            0.0
        } else {
            category.revenue / total * 100.0
        };
        if let Some(supplied) = category.percentage {
            if !supplied.is_finite() || (supplied - share).abs() > SHARE_TOLERANCE {
                return Err(ValidationError::ShareMismatch {
                    name: category.name.clone(),
                    supplied,
                    derived: share,
                });
            }
        }
        shares.push(CategoryShare {
            name: category.name.clone(),
            revenue: category.revenue,
            share,
            color: category.color,
            count: category.count,
        });
    }

    Ok(RevenueBreakdown { total, shares })
}
