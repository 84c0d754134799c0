//! Validity verdict
//!
//! The validator's answer for a piece of input, rendered as a status token:
//! a check mark for valid input, a cross followed by the reason otherwise.

use serde::Serialize;

/// Token shown for valid input
pub const SUCCESS_TOKEN: &str = "✅";

/// Token prefix shown for invalid input
pub const FAILURE_TOKEN: &str = "❌";

/// Verdict of the validator on the current input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Validity {
    /// Input can be handed to the solver
    Valid,
    /// Input was rejected
    Invalid {
        /// Why the input was rejected
        reason: String,
    },
}

impl Validity {
    /// Create an invalid verdict
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// The status token, e.g. `✅` or `❌ No formula given.`
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Valid => SUCCESS_TOKEN.to_string(),
            Self::Invalid { reason } => format!("{FAILURE_TOKEN} {reason}"),
        }
    }

    /// True when the token is the success token
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.token() == SUCCESS_TOKEN
    }

    /// Rejection reason, if any
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token())
    }
}
