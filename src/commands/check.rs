//! Check command - print the status token for a formula

use resolution_solver::adapters::ResolutionSolver;
use resolution_solver::core::ports::SolverModule;
use resolution_solver::output::{OutputMode, ValidationReport};

/// Validate a formula; exits with status 1 when it is invalid
pub fn check(formula: &str, mode: OutputMode) -> anyhow::Result<()> {
    let validity = ResolutionSolver::new().validate(formula);
    log::debug!("validated {} byte(s): {}", formula.len(), validity.is_valid());

    ValidationReport::from(&validity).render(mode);

    if !validity.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
