//! `ProgressCard` widget for patient treatment progress.

use serde::{Deserialize, Serialize};
use theradash_core::AccentColor;

/// `ProgressCard` widget: one patient's progress through a treatment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressCard {
    /// Patient display name
    patient: String,
    /// Treatment program label
    program: Option<String>,
    /// Progress percentage (0.0 to 100.0)
    progress: f64,
    /// Sessions completed so far
    sessions_completed: u32,
    /// Sessions planned in total
    sessions_planned: u32,
    /// Fill color for the progress track
    accent: AccentColor,
}

impl Default for ProgressCard {
    fn default() -> Self {
        Self {
            patient: String::new(),
            program: None,
            progress: 0.0,
            sessions_completed: 0,
            sessions_planned: 0,
            accent: AccentColor::Green,
        }
    }
}

impl ProgressCard {
    /// Create a card for the given patient.
    #[must_use]
    pub fn new(patient: impl Into<String>) -> Self {
        Self {
            patient: patient.into(),
            ..Self::default()
        }
    }

    /// Set the treatment program label.
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Set the progress percentage (clamped to 0.0..=100.0).
    #[must_use]
    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 100.0);
        self
    }

    /// Set completed and planned session counts.
    #[must_use]
    pub const fn sessions(mut self, completed: u32, planned: u32) -> Self {
        self.sessions_completed = completed;
        self.sessions_planned = planned;
        self
    }

    /// Set the accent color.
    #[must_use]
    pub const fn accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    /// Get the patient name.
    #[must_use]
    pub fn get_patient(&self) -> &str {
        &self.patient
    }

    /// Get the treatment program label.
    #[must_use]
    pub fn get_program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Get the progress percentage.
    #[must_use]
    pub const fn get_progress(&self) -> f64 {
        self.progress
    }

    /// Get the accent color.
    #[must_use]
    pub const fn get_accent(&self) -> AccentColor {
        self.accent
    }

    /// Get the completed session count.
    #[must_use]
    pub const fn get_sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Get the planned session count.
    #[must_use]
    pub const fn get_sessions_planned(&self) -> u32 {
        self.sessions_planned
    }

    /// Track fill fraction (0.0 to 1.0).
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        self.progress / 100.0
    }

    /// Progress rounded to a whole percent.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.progress.round() as u8
    }

    /// Progress formatted for display.
    #[must_use]
    pub fn formatted_progress(&self) -> String {
        format!("{}%", self.percentage())
    }

    /// Session counts formatted for display.
    #[must_use]
    pub fn sessions_label(&self) -> String {
        format!(
            "{} of {} sessions",
            self.sessions_completed, self.sessions_planned
        )
    }

    /// Sessions remaining in the plan (never negative).
    #[must_use]
    pub const fn remaining_sessions(&self) -> u32 {
        self.sessions_planned.saturating_sub(self.sessions_completed)
    }

    /// Check if the plan is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}
