//! Error types for input validation.

use std::fmt;

/// Error type for malformed engine input.
///
/// The engine validates eagerly and fails before producing any output.
/// Degenerate numeric input (an all-zero series, a zero total) is not an
/// error; those cases have defined zero-valued results.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A bucket is missing a category key required by the schema.
    MissingCategory {
        /// Bucket label
        bucket: String,
        /// Missing category key
        key: String,
    },
    /// A bucket carries a category key the schema does not define.
    UnknownCategory {
        /// Bucket label
        bucket: String,
        /// Unknown category key
        key: String,
    },
    /// A bucket value is NaN or infinite.
    NonFiniteValue {
        /// Bucket label
        bucket: String,
        /// Category key
        key: String,
    },
    /// A category revenue is NaN or infinite.
    NonFiniteRevenue {
        /// Category name
        name: String,
    },
    /// A caller-supplied percentage diverges from the derived share.
    ShareMismatch {
        /// Category name
        name: String,
        /// Caller-supplied percentage
        supplied: f64,
        /// Share derived from revenue / total
        derived: f64,
    },
    /// The series has no buckets.
    EmptySeries,
    /// The schema has no categories.
    EmptySchema,
    /// The schema defines the same key twice.
    DuplicateCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory { bucket, key } => {
                write!(f, "bucket '{bucket}' is missing category '{key}'")
            }
            Self::UnknownCategory { bucket, key } => {
                write!(f, "bucket '{bucket}' has unknown category '{key}'")
            }
            Self::NonFiniteValue { bucket, key } => {
                write!(f, "bucket '{bucket}' has a non-finite value for '{key}'")
            }
            Self::NonFiniteRevenue { name } => {
                write!(f, "category '{name}' has a non-finite revenue")
            }
            Self::ShareMismatch {
                name,
                supplied,
                derived,
            } => {
                write!(
                    f,
                    "category '{name}' supplied percentage {supplied} disagrees with derived share {derived:.1}"
                )
            }
            Self::EmptySeries => write!(f, "series must contain at least one bucket"),
            Self::EmptySchema => write!(f, "schema must define at least one category"),
            Self::DuplicateCategory(key) => {
                write!(f, "schema defines category '{key}' more than once")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
