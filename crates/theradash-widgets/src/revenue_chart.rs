//! `RevenueChart` widget: per-category revenue bars.

use serde::{Deserialize, Serialize};
use theradash_core::{
    aggregate, format_currency, format_currency_with_code, AccentColor, RevenueCategory,
    ValidationError,
};

/// One rendered revenue bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBar {
    /// Category name
    pub name: String,
    /// Raw revenue amount
    pub revenue: f64,
    /// Abbreviated amount label
    pub amount_label: String,
    /// Derived share of total (percent)
    pub share: f64,
    /// Share formatted for display
    pub share_label: String,
    /// Bar width as a percent of the track (share clamped to 0..=100)
    pub width_pct: f64,
    /// Bar color token
    pub color: AccentColor,
    /// Optional unit count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Rendered revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueChartView {
    /// Chart title
    pub title: String,
    /// Signed total across all categories
    pub total: f64,
    /// Abbreviated total label
    pub total_label: String,
    /// Bars in input order
    pub bars: Vec<RevenueBar>,
}

/// `RevenueChart` widget builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueChart {
    /// Chart title
    title: String,
    /// Categories in display order
    categories: Vec<RevenueCategory>,
    /// Include unit counts in the bars
    show_counts: bool,
    /// Prefix amount labels with the currency code
    currency_code: bool,
}

impl RevenueChart {
    /// Create an empty revenue chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a category.
    #[must_use]
    pub fn category(mut self, category: RevenueCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// Replace all categories.
    #[must_use]
    pub fn categories(mut self, categories: Vec<RevenueCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Include unit counts in the rendered bars.
    #[must_use]
    pub const fn with_counts(mut self) -> Self {
        self.show_counts = true;
        self
    }

    /// Prefix amount labels with the currency code.
    #[must_use]
    pub const fn with_currency_code(mut self) -> Self {
        self.currency_code = true;
        self
    }

    /// Get the chart title.
    #[must_use]
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Number of categories added.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Build the rendered view.
    ///
    /// Aggregates the categories and derives one bar per category with its
    /// amount label, share, and clamped bar width. Fails fast on malformed
    /// category input.
    pub fn build(&self) -> Result<RevenueChartView, ValidationError> {
        let breakdown = aggregate(&self.categories)?;
        let format = if self.currency_code {
            format_currency_with_code
        } else {
            format_currency
        };

        let bars = breakdown
            .shares()
            .iter()
            .map(|share| RevenueBar {
                name: share.name.clone(),
                revenue: share.revenue,
                amount_label: format(share.revenue),
                share: share.share,
                share_label: format!("{:.1}%", share.share),
                width_pct: share.share.clamp(0.0, 100.0),
                color: share.color,
                count: if self.show_counts { share.count } else { None },
            })
            .collect();

        Ok(RevenueChartView {
            title: self.title.clone(),
            total: breakdown.total(),
            total_label: format(breakdown.total()),
            bars,
        })
    }
}
