//! Tests for the resolution solver behind the solver port

use std::rc::Rc;

use resolution_solver::adapters::ResolutionSolver;
use resolution_solver::core::models::{SUCCESS_TOKEN, Validity};
use resolution_solver::core::ports::SolverModule;

fn validate_through<S: SolverModule>(solver: S, input: &str) -> Validity {
    solver.validate(input)
}

#[test]
fn test_valid_formula_gets_success_token() {
    assert_eq!(ResolutionSolver.validate("{p, q}, {!p}").token(), SUCCESS_TOKEN);
}

#[test]
fn test_invalid_formula_token_carries_parser_message() {
    assert_eq!(
        ResolutionSolver.validate("{p").token(),
        "❌ Curly braces do not match"
    );
}

#[test]
fn test_forwarding_wrappers() {
    let solver = ResolutionSolver::new();
    assert!(validate_through(&solver, "{p}").is_valid());
    assert!(validate_through(Rc::new(solver), "{p}").is_valid());
    assert!(!validate_through(Box::new(solver), "").is_valid());
}

#[test]
fn test_resolution_uses_line_breaks() {
    let text = ResolutionSolver.compute_resolution("{p}, {¬p}");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "The formula is unsatisfiable! The quickest way to get the empty set is to do these 1 steps:",
            "Resolve {p} and {¬p} on literal 'p' to obtain {}",
        ]
    );
}

#[test]
fn test_reason_matches_token() {
    let validity = ResolutionSolver.validate("p");
    let reason = validity.reason().unwrap();
    assert_eq!(validity.token(), format!("❌ {reason}"));
}
