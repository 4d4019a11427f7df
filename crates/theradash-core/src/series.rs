//! Stacked-series normalization: bucket totals and proportional heights.

use crate::error::ValidationError;
use crate::schema::CategorySchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One time bucket of raw category values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Display label (e.g. a month)
    label: String,
    /// Category key -> raw value
    values: HashMap<String, f64>,
}

impl TimeBucket {
    /// Create an empty bucket with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: HashMap::new(),
        }
    }

    /// Set a category value.
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, amount: f64) -> Self {
        self.values.insert(key.into(), amount);
        self
    }

    /// Set a category value in place.
    pub fn set_value(&mut self, key: impl Into<String>, amount: f64) {
        self.values.insert(key.into(), amount);
    }

    /// Get the bucket label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a category value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Number of category values set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bucket has no values set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One segment of a normalized bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    /// Category key
    pub key: String,
    /// Raw value
    pub value: f64,
    /// Height as a percent of the visual track
    pub height_pct: f64,
}

/// One normalized bucket, segments in stacking order (bottom first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBucket {
    /// Display label
    pub label: String,
    /// Combined value across all schema categories
    pub total: f64,
    /// Segments in schema order
    pub segments: Vec<StackSegment>,
}

impl NormalizedBucket {
    /// Sum of segment heights, as a percent of the track.
    #[must_use]
    pub fn height_sum(&self) -> f64 {
        self.segments.iter().map(|s| s.height_pct).sum()
    }
}

/// A normalized series sharing a single global maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    global_max: f64,
    buckets: Vec<NormalizedBucket>,
}

impl NormalizedSeries {
    /// Get the largest combined bucket value in the series.
    #[must_use]
    pub fn global_max(&self) -> f64 {
        self.global_max
    }

    /// Get the normalized buckets in input order.
    #[must_use]
    pub fn buckets(&self) -> &[NormalizedBucket] {
        &self.buckets
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the series has no buckets (never true for a normalized series).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Normalize a series of buckets against a category schema.
///
/// Every bucket must carry a finite value for every schema key and no keys
/// outside the schema; any violation fails before output is produced. Bucket
/// totals share a single global maximum, so the tallest combined bucket
/// fills the track and every other bar is proportionally shorter. Segment
/// heights are `value / global_max * 100`, defined as 0 for every segment
/// when the global maximum is 0. Segments come out in schema order (bottom
/// of the stack first) regardless of how the bucket map iterates.
pub fn normalize_series(
    series: &[TimeBucket],
    schema: &CategorySchema,
) -> Result<NormalizedSeries, ValidationError> {
    if series.is_empty() {
        return Err(ValidationError::EmptySeries);
    }
    for bucket in series {
        validate_bucket(bucket, schema)?;
    }

    let totals: Vec<f64> = series
        .iter()
        .map(|bucket| schema.keys().map(|key| bucket.get(key).unwrap_or(0.0)).sum())
        .collect();
    let global_max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let buckets = series
        .iter()
        .zip(totals)
        .map(|(bucket, total)| {
            let segments = schema
                .categories()
                .iter()
                .map(|descriptor| {
                    let value = bucket.get(&descriptor.key).unwrap_or(0.0);
                    let height_pct = if global_max == 0.0 {
                        0.0
                    } else {
                        value / global_max * 100.0
                    };
                    StackSegment {
                        key: descriptor.key.clone(),
                        value,
                        height_pct,
                    }
                })
                .collect();
            NormalizedBucket {
                label: bucket.label.clone(),
                total,
                segments,
            }
        })
        .collect();

    Ok(NormalizedSeries {
        global_max,
        buckets,
    })
}

fn validate_bucket(bucket: &TimeBucket, schema: &CategorySchema) -> Result<(), ValidationError> {
    for descriptor in schema.categories() {
        match bucket.get(&descriptor.key) {
            None => {
                return Err(ValidationError::MissingCategory {
                    bucket: bucket.label.clone(),
                    key: descriptor.key.clone(),
                })
            }
            Some(value) if !value.is_finite() => {
                return Err(ValidationError::NonFiniteValue {
                    bucket: bucket.label.clone(),
                    key: descriptor.key.clone(),
                })
            }
            Some(_) => {}
        }
    }
    for key in bucket.values.keys() {
        if !schema.contains(key) {
            return Err(ValidationError::UnknownCategory {
                bucket: bucket.label.clone(),
                key: key.clone(),
            });
        }
    }
    Ok(())
}
