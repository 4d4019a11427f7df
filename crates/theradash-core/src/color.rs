//! Accent color palette for chart segments and badges.

use serde::{Deserialize, Serialize};

/// Accent color token used by categories, segments, and badges.
///
/// The palette is closed. Every consumer resolves a color through an
/// exhaustive match, so a new variant does not compile until every
/// match site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Primary accent
    #[default]
    Blue,
    /// Positive / growth accent
    Green,
    /// Secondary accent
    Purple,
    /// Warm accent
    Orange,
    /// Alert accent
    Red,
    /// Cool accent
    Indigo,
}

impl AccentColor {
    /// All palette colors in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Red,
        Self::Indigo,
    ];

    /// Get the hex token for this color.
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Green => "#22c55e",
            Self::Purple => "#a855f7",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
            Self::Indigo => "#6366f1",
        }
    }

    /// Get the lowercase token name for this color.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Indigo => "indigo",
        }
    }
}
