//! Solver port
//!
//! Defines the two entry points the controller needs from the solver.

use std::rc::Rc;

use super::super::models::Validity;

/// The computational module behind the page
///
/// Both entry points are synchronous and infallible from the caller's side.
/// `compute_resolution` is only meaningful for input that `validate` accepts.
pub trait SolverModule {
    /// Judge the input
    fn validate(&self, input: &str) -> Validity;

    /// Produce the resolution text for valid input
    ///
    /// The text may contain `\n` line breaks.
    fn compute_resolution(&self, input: &str) -> String;
}

impl<T: SolverModule + ?Sized> SolverModule for &T {
    fn validate(&self, input: &str) -> Validity {
        (**self).validate(input)
    }

    fn compute_resolution(&self, input: &str) -> String {
        (**self).compute_resolution(input)
    }
}

impl<T: SolverModule + ?Sized> SolverModule for Rc<T> {
    fn validate(&self, input: &str) -> Validity {
        (**self).validate(input)
    }

    fn compute_resolution(&self, input: &str) -> String {
        (**self).compute_resolution(input)
    }
}

impl<T: SolverModule + ?Sized> SolverModule for Box<T> {
    fn validate(&self, input: &str) -> Validity {
        (**self).validate(input)
    }

    fn compute_resolution(&self, input: &str) -> String {
        (**self).compute_resolution(input)
    }
}
