//! Literal model
//!
//! A propositional variable, optionally negated.

use serde::{Deserialize, Serialize};

/// Symbols accepted in front of a variable name to negate it
pub const NEGATION_SYMBOLS: [&str; 5] = ["!", "~", "¬", "not", "\\neg"];

/// Symbol used when displaying a negated literal
pub const DISPLAY_NEGATION: char = '¬';

/// A variable or its negation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Variable name
    pub name: String,
    /// Whether the variable is negated
    pub negated: bool,
}

impl Literal {
    /// Create a literal
    #[must_use]
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Self {
            name: name.into(),
            negated,
        }
    }

    /// Create a positive literal
    #[must_use]
    pub fn positive(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Create a negated literal
    #[must_use]
    pub fn negative(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Same variable, opposite sign
    #[must_use]
    pub fn is_opposite(&self, other: &Self) -> bool {
        self.name == other.name && self.negated != other.negated
    }

    /// The complementary literal
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::new(self.name.clone(), !self.negated)
    }
}

/// Check whether a string is one of the accepted negation symbols
#[must_use]
pub fn is_negation_symbol(symbol: &str) -> bool {
    NEGATION_SYMBOLS.contains(&symbol)
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "{DISPLAY_NEGATION}{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
