//! Tests for resolution saturation and its explanation

use resolution_solver::core::services::{ClauseGraph, ParseError, Verdict};

#[test]
fn test_classic_unsatisfiable_set() {
    let graph = ClauseGraph::new("{p, q}, {!p, q}, {p, !q}, {!p, !q}").unwrap();
    assert!(!graph.is_satisfiable());
    assert_eq!(graph.refutation_generation(), Some(2));
    assert!(graph.solution().to_string().starts_with("The formula is unsatisfiable! "));
}

#[test]
fn test_given_clauses_form_generation_zero() {
    let graph = ClauseGraph::new("{p}, {q, r}").unwrap();
    assert_eq!(graph.generations()[0], vec![0, 1]);
    assert!(graph.steps()[0].is_empty());
}

#[test]
fn test_unrelated_clauses_saturate_immediately() {
    let graph = ClauseGraph::new("{p}, {q}").unwrap();
    assert!(graph.is_satisfiable());
    assert_eq!(graph.clause_count(), 2);
    assert_eq!(graph.listing(), "Given: {p}, {q}\n");
}

#[test]
fn test_subsumed_resolvents_are_dropped() {
    // {p} already covers the resolvent {p} of {p, q} and {p, !q}
    let graph = ClauseGraph::new("{p}, {p, q}, {p, !q}").unwrap();
    assert!(graph.is_satisfiable());
    assert_eq!(graph.clause_count(), 3);
}

#[test]
fn test_resolvent_is_listed_per_iteration() {
    let graph = ClauseGraph::new("{p, q}, {!p, q}").unwrap();
    assert!(graph.is_satisfiable());
    assert_eq!(graph.listing(), "Given: {p, q}, {¬p, q}\nIteration 1: {q}\n");
    let text = graph.solution().to_string();
    assert!(text.starts_with(
        "The formula is satisfiable! Take these steps to get all possible clauses:\n"
    ));
    assert!(text.contains("At the end you should get these 3 clauses:"));
}

#[test]
fn test_step_description() {
    let graph = ClauseGraph::new("{p, q}, {!p, r}").unwrap();
    let step = &graph.steps()[1][0];
    assert_eq!(step.variable, "p");
    assert_eq!(
        graph.describe(step),
        "Resolve {p, q} and {¬p, r} on literal 'p' to obtain {q, r}"
    );
}

#[test]
fn test_single_derivation_of_contradiction() {
    let graph = ClauseGraph::new("{rain}, {not rain}").unwrap();
    let Verdict::Unsatisfiable { derivations } = graph.verdict() else {
        panic!("expected unsatisfiable");
    };
    assert_eq!(derivations.len(), 1);
    assert_eq!(derivations[0].steps(), &[(1, 0)]);
    let step = graph.step((1, 0));
    assert!(graph.clause(step.resolvent).is_empty());
}

#[test]
fn test_derivation_of_given_clause_is_empty() {
    let graph = ClauseGraph::new("{p}").unwrap();
    assert!(graph.derivation(0).is_empty());
}

#[test]
fn test_derivations_start_from_given_clauses() {
    let graph = ClauseGraph::new("{p, q}, {!p}, {!q}").unwrap();
    let Verdict::Unsatisfiable { derivations } = graph.verdict() else {
        panic!("expected unsatisfiable");
    };
    for derivation in &derivations {
        let first = graph.step(derivation.steps()[0]);
        assert!(first.parents.0 < 3 && first.parents.1 < 3);
    }
}

#[test]
fn test_invalid_formula_is_not_saturated() {
    assert_eq!(ClauseGraph::new("{p").unwrap_err(), ParseError::UnbalancedBraces);
}
