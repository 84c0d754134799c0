//! Business logic services
//!
//! Pure logic that operates on domain models and port traits.
//! None of these services touch the page or the filesystem directly.
//!
//! - [`parser`] - Parse formulas into clauses
//! - [`resolution`] - Saturate clause sets and explain the result
//! - [`markup`] - Turn solver text into host markup
//! - [`controller`] - Drive the page elements from solver verdicts

pub mod controller;
pub mod markup;
pub mod parser;
pub mod resolution;

pub use controller::{ControllerEvent, InputResolutionController};
pub use markup::{RenderOptions, escape_html, translate_line_breaks};
pub use parser::{LiteralError, ParseError, parse_clause, parse_formula, parse_literal};
pub use resolution::{ClauseGraph, ClauseId, Derivation, Solution, Step, StepRef, Verdict};
