//! Rendering engine for the Theradash admin revenue dashboard.
//!
//! This crate turns caller-supplied financial category data into renderable
//! proportions, aggregates, and display strings:
//! - Category aggregation: [`aggregate`] derives a total and per-category
//!   shares from a sequence of [`RevenueCategory`]
//! - Stacked-series normalization: [`normalize_series`] computes a shared
//!   global maximum and per-segment heights for a series of [`TimeBucket`]
//! - Currency formatting: [`format_currency`] abbreviates raw amounts with
//!   K/M suffixes
//! - Category configuration: [`CategorySchema`] defines stacking order,
//!   labels, and [`AccentColor`] tokens
//!
//! All operations are pure: input is validated eagerly, output is derived
//! without retained state, and malformed input fails fast with a
//! [`ValidationError`].

mod aggregate;
mod color;
pub mod currency;
mod error;
mod schema;
mod series;

pub use aggregate::{aggregate, CategoryShare, RevenueBreakdown, RevenueCategory, SHARE_TOLERANCE};
pub use color::AccentColor;
pub use currency::{format_currency, format_currency_with_code, CURRENCY_CODE};
pub use error::ValidationError;
pub use schema::{CategoryDescriptor, CategorySchema};
pub use series::{normalize_series, NormalizedBucket, NormalizedSeries, StackSegment, TimeBucket};
