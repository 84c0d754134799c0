//! Domain models for the resolution solver
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Literal`] - A variable or its negation
//! - [`Clause`] - A set of literals
//! - [`Validity`] - The validator's status token
//! - [`ControllerState`] - What the result area currently shows

mod clause;
mod literal;
mod state;
mod validity;

pub use clause::{Clause, Resolvent, display_clauses};
pub use literal::{DISPLAY_NEGATION, Literal, NEGATION_SYMBOLS, is_negation_symbol};
pub use state::{ControllerState, INVALID_INPUT_MESSAGE, Outcome, RESULT_PREFIX};
pub use validity::{FAILURE_TOKEN, SUCCESS_TOKEN, Validity};
