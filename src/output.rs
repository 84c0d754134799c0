//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Outcome, Validity};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating a formula
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the formula is valid
    pub valid: bool,
    /// Status token as shown by the indicator
    pub status: String,
    /// Rejection reason, if invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a calculate trigger
#[derive(Debug, Serialize)]
pub struct ResolutionReport {
    /// Whether the formula was valid at trigger time
    pub valid: bool,
    /// Status token as shown by the indicator
    pub status: String,
    /// What the result area shows
    pub result: String,
    /// Raw solver output, if the solver ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// Input box height after a resize
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResizeReport {
    /// Always `"resize"`
    pub event: &'static str,
    /// Box height in rows
    pub height: u32,
}

impl ResizeReport {
    /// Report a box of `height` rows
    #[must_use]
    pub const fn new(height: u32) -> Self {
        Self {
            event: "resize",
            height,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("input height: {} row(s)", self.height),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl From<&Validity> for ValidationReport {
    fn from(validity: &Validity) -> Self {
        Self {
            valid: validity.is_valid(),
            status: validity.token(),
            reason: validity.reason().map(String::from),
        }
    }
}

impl ResolutionReport {
    /// Build a report from the indicator verdict and the trigger outcome
    #[must_use]
    pub fn new(validity: &Validity, outcome: &Outcome) -> Self {
        let resolution = match outcome {
            Outcome::Resolved { resolution, .. } => Some(resolution.clone()),
            Outcome::Rejected { .. } => None,
        };
        Self {
            valid: outcome.is_resolved(),
            status: validity.token(),
            result: outcome.markup().to_string(),
            resolution,
        }
    }
}

impl ValidationReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{}", self.status.green());
        } else {
            println!("{}", self.status.red());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ResolutionReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.result),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
