//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the controller and the
//! outside world: the solver module and the page elements it renders into.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The controller depends only on these traits, never on concrete
//! implementations. Tests swap in doubles that return fixed verdicts and
//! record what was rendered.

mod page;
mod solver;

pub use page::{BoxHeight, InputField, PageError, ResultArea, ValidationIndicator};
pub use solver::SolverModule;
