//! Resolution solver adapter
//!
//! Implements [`SolverModule`] on top of the parser and the clause graph.

use crate::core::models::Validity;
use crate::core::ports::SolverModule;
use crate::core::services::{ClauseGraph, parse_formula};

/// Propositional resolution over clause sets
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionSolver;

impl ResolutionSolver {
    /// Create the solver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SolverModule for ResolutionSolver {
    fn validate(&self, input: &str) -> Validity {
        match parse_formula(input) {
            Ok(_) => Validity::Valid,
            Err(err) => Validity::invalid(err.to_string()),
        }
    }

    fn compute_resolution(&self, input: &str) -> String {
        match ClauseGraph::new(input) {
            Ok(graph) => {
                log::debug!(
                    "saturated after {} generation(s), {} clause(s)",
                    graph.generations().len(),
                    graph.clause_count()
                );
                graph.solution().to_string()
            },
            Err(err) => err.to_string(),
        }
    }
}
