//! Dashboard widgets for the Theradash revenue views.

pub mod badge;
pub mod progress_card;
pub mod revenue_chart;
pub mod stacked_chart;

pub use badge::{BadgeDescriptor, VerificationBadge, VerificationStatus};
pub use progress_card::ProgressCard;
pub use revenue_chart::{RevenueBar, RevenueChart, RevenueChartView};
pub use stacked_chart::{
    LegendEntry, SegmentPosition, SegmentView, StackedChartView, StackedColumn,
    StackedRevenueChart,
};
