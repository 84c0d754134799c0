//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use resolution_solver::adapters::ResolutionSolver;
use resolution_solver::core::models::{Literal, is_negation_symbol};
use resolution_solver::core::ports::SolverModule;
use resolution_solver::core::services::{ParseError, parse_formula, parse_literal};
use test_case::test_case;

// =============================================================================
// Literal Tests
// =============================================================================

#[test_case("p", Literal::positive("p") ; "bare name")]
#[test_case("!p", Literal::negative("p") ; "bang")]
#[test_case("~p", Literal::negative("p") ; "tilde")]
#[test_case("¬p", Literal::negative("p") ; "logical not sign")]
#[test_case("not p", Literal::negative("p") ; "not keyword")]
#[test_case("\\neg p", Literal::negative("p") ; "latex neg")]
#[test_case("  ~  q1 ", Literal::negative("q1") ; "padded")]
fn test_literal_forms(raw: &str, expected: Literal) {
    assert_eq!(parse_literal(raw).unwrap(), expected);
}

#[test_case("!", true ; "bang is negation")]
#[test_case("not", true ; "not is negation")]
#[test_case("\\neg", true ; "neg is negation")]
#[test_case("-", false ; "minus is not negation")]
#[test_case("NOT", false ; "negation is case sensitive")]
fn test_negation_symbols(symbol: &str, expected: bool) {
    assert_eq!(is_negation_symbol(symbol), expected);
}

// =============================================================================
// Formula Tests
// =============================================================================

#[test_case("", ParseError::Empty ; "empty")]
#[test_case("{p}{", ParseError::UnbalancedBraces ; "unclosed")]
#[test_case("}p{", ParseError::UnbalancedBraces ; "closed before opened")]
#[test_case("p", ParseError::MissingBraces ; "no braces")]
#[test_case("{{{p}}}", ParseError::TooManyBraces ; "three levels")]
#[test_case("{p}; {q}", ParseError::BadSeparator ; "semicolon separator")]
#[test_case("{p} {q} x", ParseError::BadSeparator ; "trailing text")]
fn test_formula_errors(input: &str, expected: ParseError) {
    assert_eq!(parse_formula(input).unwrap_err(), expected);
}

#[test_case("{p}", 1 ; "single clause")]
#[test_case("{p}, {q}", 2 ; "comma separated")]
#[test_case("{p}{q}{r}", 3 ; "adjacent")]
#[test_case("{{p}, {q}}", 2 ; "wrapped")]
#[test_case("\n{p, q}\n{r}\n", 2 ; "one clause per line")]
fn test_formula_clause_counts(input: &str, count: usize) {
    assert_eq!(parse_formula(input).unwrap().len(), count);
}

// =============================================================================
// Verdict Tests
// =============================================================================

#[test_case("{p}, {!p}", false ; "direct contradiction")]
#[test_case("{p, q}, {!p}, {!q}", false ; "two step contradiction")]
#[test_case("{p, q}, {!p, r}", true ; "chain")]
#[test_case("{p, !p}", true ; "tautology")]
#[test_case("{a}, {b}, {c}", true ; "independent units")]
fn test_satisfiability(input: &str, satisfiable: bool) {
    let text = ResolutionSolver.compute_resolution(input);
    let expected = if satisfiable {
        "The formula is satisfiable!"
    } else {
        "The formula is unsatisfiable!"
    };
    assert!(text.starts_with(expected), "{input}: {text}");
}
