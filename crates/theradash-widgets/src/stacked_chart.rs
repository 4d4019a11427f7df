//! `StackedRevenueChart` widget: monthly revenue columns with stacked segments.

use serde::{Deserialize, Serialize};
use theradash_core::{
    format_currency, format_currency_with_code, normalize_series, AccentColor, CategorySchema,
    TimeBucket, ValidationError,
};

/// Position of a segment within its stack.
///
/// Consumers rely on this positionally (rounded corners at the bottom and
/// top of the stack), so it is fixed by schema order, never by the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentPosition {
    /// First segment of a multi-segment stack
    Bottom,
    /// Interior segment
    Middle,
    /// Last segment of a multi-segment stack
    Top,
    /// Sole segment of a single-category stack
    Only,
}

impl SegmentPosition {
    /// Position for the segment at `index` in a stack of `len` segments.
    #[must_use]
    pub const fn from_stack(index: usize, len: usize) -> Self {
        if len == 1 {
            Self::Only
        } else if index == 0 {
            Self::Bottom
        } else if index + 1 == len {
            Self::Top
        } else {
            Self::Middle
        }
    }

    /// Whether this segment sits at the bottom of the stack.
    #[must_use]
    pub const fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom | Self::Only)
    }

    /// Whether this segment sits at the top of the stack.
    #[must_use]
    pub const fn is_top(&self) -> bool {
        matches!(self, Self::Top | Self::Only)
    }
}

/// One rendered stack segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentView {
    /// Category key
    pub key: String,
    /// Category display label
    pub label: String,
    /// Segment color token
    pub color: AccentColor,
    /// Raw value
    pub value: f64,
    /// Height as a percent of the track
    pub height_pct: f64,
    /// Position within the stack
    pub position: SegmentPosition,
}

/// One rendered column (time bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedColumn {
    /// Bucket label
    pub label: String,
    /// Combined value across all categories
    pub total: f64,
    /// Abbreviated total label
    pub total_label: String,
    /// Segments bottom to top
    pub segments: Vec<SegmentView>,
}

/// One legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Category key
    pub key: String,
    /// Category display label
    pub label: String,
    /// Category color token
    pub color: AccentColor,
}

/// Rendered stacked revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedChartView {
    /// Chart title
    pub title: String,
    /// Largest combined bucket value in the series
    pub global_max: f64,
    /// Abbreviated label for the global maximum
    pub peak_label: String,
    /// Legend entries in stacking order
    pub legend: Vec<LegendEntry>,
    /// Columns in input order
    pub columns: Vec<StackedColumn>,
}

/// `StackedRevenueChart` widget builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedRevenueChart {
    /// Chart title
    title: String,
    /// Category configuration
    schema: CategorySchema,
    /// Buckets in chronological order
    series: Vec<TimeBucket>,
    /// Prefix labels with the currency code
    currency_code: bool,
}

impl StackedRevenueChart {
    /// Create an empty chart with the platform revenue schema.
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

    /// Set the category schema.
    #[must_use]
    pub fn schema(mut self, schema: CategorySchema) -> Self {
        self.schema = schema;
        self
    }

    /// Add a bucket to the series.
    #[must_use]
    pub fn bucket(mut self, bucket: TimeBucket) -> Self {
        self.series.push(bucket);
        self
    }

    /// Replace the whole series.
    #[must_use]
    pub fn series(mut self, series: Vec<TimeBucket>) -> Self {
        self.series = series;
        self
    }

    /// Prefix labels with the currency code.
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

    /// Get the category schema.
    #[must_use]
    pub const fn get_schema(&self) -> &CategorySchema {
        &self.schema
    }

    /// Number of buckets added.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.series.len()
    }

    /// Build the rendered view.
    ///
    /// Normalizes the series against the schema and attaches display labels,
    /// colors, and stack positions to every segment. Fails fast on an empty
    /// series or a bucket that violates the schema.
    pub fn build(&self) -> Result<StackedChartView, ValidationError> {
        let normalized = normalize_series(&self.series, &self.schema)?;
        let format = if self.currency_code {
            format_currency_with_code
        } else {
            format_currency
        };

        let legend: Vec<LegendEntry> = self
            .schema
            .categories()
            .iter()
            .map(|descriptor| LegendEntry {
                key: descriptor.key.clone(),
                label: descriptor.label.clone(),
                color: descriptor.color,
            })
            .collect();

        let stack_len = self.schema.len();
        let columns = normalized
            .buckets()
            .iter()
            .map(|bucket| {
                let segments = bucket
                    .segments
                    .iter()
                    .zip(self.schema.categories())
                    .enumerate()
                    .map(|(index, (segment, descriptor))| SegmentView {
                        key: segment.key.clone(),
                        label: descriptor.label.clone(),
                        color: descriptor.color,
                        value: segment.value,
                        height_pct: segment.height_pct,
                        position: SegmentPosition::from_stack(index, stack_len),
                    })
                    .collect();
                StackedColumn {
                    label: bucket.label.clone(),
                    total: bucket.total,
                    total_label: format(bucket.total),
                    segments,
                }
            })
            .collect();

        Ok(StackedChartView {
            title: self.title.clone(),
            global_max: normalized.global_max(),
            peak_label: format(normalized.global_max()),
            legend,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theradash_core::CategoryDescriptor;

    fn platform_bucket(label: &str, t: f64, s: f64, g: f64, e: f64) -> TimeBucket {
        TimeBucket::new(label)
            .value("therapists", t)
            .value("sessions", s)
            .value("gaming", g)
            .value("enterprise", e)
    }

    fn quarter_chart() -> StackedRevenueChart {
        StackedRevenueChart::new()
            .title("Monthly Revenue")
            .bucket(platform_bucket("Jan", 180_000.0, 95_000.0, 22_000.0, 48_000.0))
            .bucket(platform_bucket("Feb", 195_000.0, 99_000.0, 25_000.0, 51_000.0))
            .bucket(platform_bucket("Mar", 210_000.0, 108_000.0, 27_000.0, 55_000.0))
    }

    // ===== SegmentPosition Tests =====

    #[test]
    fn test_segment_position_from_stack() {
        assert_eq!(SegmentPosition::from_stack(0, 4), SegmentPosition::Bottom);
        assert_eq!(SegmentPosition::from_stack(1, 4), SegmentPosition::Middle);
        assert_eq!(SegmentPosition::from_stack(2, 4), SegmentPosition::Middle);
        assert_eq!(SegmentPosition::from_stack(3, 4), SegmentPosition::Top);
        assert_eq!(SegmentPosition::from_stack(0, 1), SegmentPosition::Only);
    }

    #[test]
    fn test_segment_position_predicates() {
        assert!(SegmentPosition::Bottom.is_bottom());
        assert!(!SegmentPosition::Bottom.is_top());
        assert!(SegmentPosition::Top.is_top());
        assert!(SegmentPosition::Only.is_bottom());
        assert!(SegmentPosition::Only.is_top());
        assert!(!SegmentPosition::Middle.is_bottom());
        assert!(!SegmentPosition::Middle.is_top());
    }

    // ===== Builder Tests =====

    #[test]
    fn test_stacked_chart_new() {
        let chart = StackedRevenueChart::new();
        assert_eq!(chart.get_title(), "");
        assert_eq!(chart.bucket_count(), 0);
        assert_eq!(chart.get_schema(), &CategorySchema::default());
    }

    #[test]
    fn test_stacked_chart_builder_accumulates() {
        let chart = quarter_chart();
        assert_eq!(chart.bucket_count(), 3);
        assert_eq!(chart.get_title(), "Monthly Revenue");
    }

    // ===== Build Tests =====

    #[test]
    fn test_build_peak_and_columns() {
        let view = quarter_chart().build().unwrap();
        assert_eq!(view.global_max, 400_000.0);
        assert_eq!(view.peak_label, "400K");
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.columns[0].label, "Jan");
        assert_eq!(view.columns[2].total, 400_000.0);
        assert_eq!(view.columns[2].total_label, "400K");
    }

    #[test]
    fn test_build_segment_labels_and_colors() {
        let view = quarter_chart().build().unwrap();
        let jan = &view.columns[0];
        assert_eq!(jan.segments[0].key, "therapists");
        assert_eq!(jan.segments[0].label, "Therapists");
        assert_eq!(jan.segments[0].color, AccentColor::Blue);
        assert_eq!(jan.segments[3].key, "enterprise");
        assert_eq!(jan.segments[3].color, AccentColor::Orange);
    }

    #[test]
    fn test_build_segment_positions() {
        let view = quarter_chart().build().unwrap();
        for column in &view.columns {
            let positions: Vec<SegmentPosition> =
                column.segments.iter().map(|s| s.position).collect();
            assert_eq!(
                positions,
                vec![
                    SegmentPosition::Bottom,
                    SegmentPosition::Middle,
                    SegmentPosition::Middle,
                    SegmentPosition::Top,
                ]
            );
        }
    }

    #[test]
    fn test_build_single_category_positions() {
        let schema = CategorySchema::new(vec![CategoryDescriptor::new(
            "sessions",
            "Sessions",
            AccentColor::Green,
        )])
        .unwrap();
        let chart = StackedRevenueChart::new()
            .schema(schema)
            .bucket(TimeBucket::new("Jan").value("sessions", 10.0));
        let view = chart.build().unwrap();
        assert_eq!(view.columns[0].segments[0].position, SegmentPosition::Only);
    }

    #[test]
    fn test_build_heights_share_global_max() {
        let chart = StackedRevenueChart::new()
            .bucket(platform_bucket("Jan", 25.0, 25.0, 25.0, 25.0))
            .bucket(platform_bucket("Feb", 20.0, 10.0, 10.0, 10.0));
        let view = chart.build().unwrap();
        assert_eq!(view.global_max, 100.0);
        let feb_sum: f64 = view.columns[1].segments.iter().map(|s| s.height_pct).sum();
        assert!((feb_sum - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_legend_follows_schema_order() {
        let view = quarter_chart().build().unwrap();
        let keys: Vec<&str> = view.legend.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["therapists", "sessions", "gaming", "enterprise"]);
        assert_eq!(view.legend[0].label, "Therapists");
        assert_eq!(view.legend[0].color, AccentColor::Blue);
    }

    #[test]
    fn test_build_with_currency_code() {
        let view = quarter_chart().with_currency_code().build().unwrap();
        assert_eq!(view.peak_label, "USD 400K");
        assert_eq!(view.columns[0].total_label, "USD 345K");
    }

    #[test]
    fn test_build_zero_series() {
        let chart = StackedRevenueChart::new()
            .bucket(platform_bucket("Jan", 0.0, 0.0, 0.0, 0.0));
        let view = chart.build().unwrap();
        assert_eq!(view.global_max, 0.0);
        assert_eq!(view.peak_label, "0K");
        for segment in &view.columns[0].segments {
            assert_eq!(segment.height_pct, 0.0);
        }
    }

    #[test]
    fn test_build_empty_series_fails() {
        let err = StackedRevenueChart::new().build().unwrap_err();
        assert_eq!(err, ValidationError::EmptySeries);
    }

    #[test]
    fn test_build_propagates_bucket_validation() {
        let chart = StackedRevenueChart::new()
            .bucket(TimeBucket::new("Jan").value("therapists", 1.0));
        assert!(matches!(
            chart.build(),
            Err(ValidationError::MissingCategory { .. })
        ));
    }

    #[test]
    fn test_build_custom_schema_order() {
        let reversed = CategorySchema::new(vec![
            CategoryDescriptor::new("enterprise", "Enterprise", AccentColor::Orange),
            CategoryDescriptor::new("therapists", "Therapists", AccentColor::Blue),
        ])
        .unwrap();
        let chart = StackedRevenueChart::new().schema(reversed).bucket(
            TimeBucket::new("Jan")
                .value("enterprise", 10.0)
                .value("therapists", 30.0),
        );
        let view = chart.build().unwrap();
        let keys: Vec<&str> = view.columns[0]
            .segments
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(keys, vec!["enterprise", "therapists"]);
        assert_eq!(
            view.columns[0].segments[0].position,
            SegmentPosition::Bottom
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let chart = quarter_chart();
        assert_eq!(chart.build().unwrap(), chart.build().unwrap());
    }

    // ===== Serialization Tests =====

    #[test]
    fn test_view_serde_round_trip() {
        let view = quarter_chart().build().unwrap();
        let json = serde_json::to_string(&view).unwrap();
        let back: StackedChartView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn test_chart_builder_serde_round_trip() {
        let chart = quarter_chart();
        let json = serde_json::to_string(&chart).unwrap();
        let back: StackedRevenueChart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chart);
    }
}
