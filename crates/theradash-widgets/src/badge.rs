//! `VerificationBadge` widget for therapist credential states.

use serde::{Deserialize, Serialize};
use theradash_core::AccentColor;

/// Verification state of a therapist profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Credentials confirmed
    Verified,
    /// Review in progress
    #[default]
    Pending,
    /// Credentials rejected
    Rejected,
    /// No credentials submitted
    Unverified,
}

/// Display descriptor for a verification state.
///
/// Resolved from [`VerificationStatus`] by exhaustive matching; an unknown
/// state is unrepresentable, so there is no fallback arm anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDescriptor {
    /// Icon token
    pub icon: &'static str,
    /// Display label
    pub label: &'static str,
    /// Badge color token
    pub color: AccentColor,
}

impl VerificationStatus {
    /// Get the display descriptor for this status.
    #[must_use]
    pub const fn descriptor(&self) -> BadgeDescriptor {
        match self {
            Self::Verified => BadgeDescriptor {
                icon: "shield-check",
                label: "Verified",
                color: AccentColor::Green,
            },
            Self::Pending => BadgeDescriptor {
                icon: "clock",
                label: "Pending Review",
                color: AccentColor::Orange,
            },
            Self::Rejected => BadgeDescriptor {
                icon: "shield-x",
                label: "Rejected",
                color: AccentColor::Red,
            },
            Self::Unverified => BadgeDescriptor {
                icon: "shield",
                label: "Unverified",
                color: AccentColor::Indigo,
            },
        }
    }

    /// Get the icon token for this status.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.descriptor().icon
    }

    /// Get the display label for this status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.descriptor().label
    }

    /// Get the badge color for this status.
    #[must_use]
    pub const fn color(&self) -> AccentColor {
        self.descriptor().color
    }
}

/// `VerificationBadge` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationBadge {
    /// Verification state
    status: VerificationStatus,
    /// Label override
    label_override: Option<String>,
    /// Show the status icon
    show_icon: bool,
}

impl Default for VerificationBadge {
    fn default() -> Self {
        Self {
            status: VerificationStatus::default(),
            label_override: None,
            show_icon: true,
        }
    }
}

impl VerificationBadge {
    /// Create a badge for the given status.
    #[must_use]
    pub fn new(status: VerificationStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Override the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label_override = Some(label.into());
        self
    }

    /// Hide the status icon.
    #[must_use]
    pub const fn without_icon(mut self) -> Self {
        self.show_icon = false;
        self
    }

    /// Get the verification status.
    #[must_use]
    pub const fn get_status(&self) -> VerificationStatus {
        self.status
    }

    /// Get the display descriptor for the badge's status.
    #[must_use]
    pub const fn descriptor(&self) -> BadgeDescriptor {
        self.status.descriptor()
    }

    /// Get the label to display (override or status label).
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label_override
            .as_deref()
            .unwrap_or_else(|| self.status.label())
    }

    /// Get the icon token, if the icon is shown.
    #[must_use]
    pub const fn display_icon(&self) -> Option<&'static str> {
        if self.show_icon {
            Some(self.status.icon())
        } else {
            None
        }
    }

    /// Get the badge color.
    #[must_use]
    pub const fn color(&self) -> AccentColor {
        self.status.color()
    }
}
