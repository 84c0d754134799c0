//! Controller state
//!
//! The controller is either idle (nothing calculated yet) or displaying the
//! outcome of the most recent calculate trigger.

use serde::Serialize;

/// Message shown when calculate is triggered on invalid input
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please correct your input and try again.";

/// Prefix in front of a rendered resolution
pub const RESULT_PREFIX: &str = "The resolution is: ";

/// Outcome of one calculate trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// Input was valid and the solver ran
    Resolved {
        /// Raw solver output
        resolution: String,
        /// What was written into the result area
        markup: String,
    },
    /// Input was invalid, the solver was not called
    Rejected {
        /// What was written into the result area
        markup: String,
    },
}

impl Outcome {
    /// The content written into the result area
    #[must_use]
    pub fn markup(&self) -> &str {
        match self {
            Self::Resolved { markup, .. } | Self::Rejected { markup } => markup,
        }
    }

    /// True when the solver ran
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Two-state display machine
///
/// Input changes never move between states; only calculate triggers do.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ControllerState {
    /// No calculation triggered yet
    #[default]
    Idle,
    /// Showing the last outcome until the next trigger
    Displaying(Outcome),
}

impl ControllerState {
    /// The outcome on display, if any
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        match self {
            Self::Idle => None,
            Self::Displaying(outcome) => Some(outcome),
        }
    }
}
