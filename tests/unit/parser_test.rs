//! Tests for the formula parser

use resolution_solver::core::models::{Clause, Literal};
use resolution_solver::core::services::{LiteralError, ParseError, parse_clause, parse_formula, parse_literal};

fn shown(input: &str) -> Vec<String> {
    parse_formula(input)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// Accepted formulas
// =============================================================================

#[test]
fn test_flat_and_wrapped_lists_agree() {
    let flat = parse_formula("{p, q}, {!p, r}").unwrap();
    let wrapped = parse_formula("{{p, q}, {!p, r}}").unwrap();
    assert_eq!(flat, wrapped);
}

#[test]
fn test_separators_may_be_commas_or_whitespace() {
    assert_eq!(shown("{p} , {q}\t{r}\n\n{s}{t}"), vec!["{p}", "{q}", "{r}", "{s}", "{t}"]);
}

#[test]
fn test_every_negation_symbol_is_accepted() {
    let clauses = parse_formula("{!a, ~b, ¬c, not d, \\neg e, ! f}").unwrap();
    let clause = &clauses[0];
    assert!(clause.literals().iter().all(|literal| literal.negated));
    assert_eq!(clause.to_string(), "{¬a, ¬b, ¬c, ¬d, ¬e, ¬f}");
}

#[test]
fn test_duplicate_literals_collapse() {
    assert_eq!(shown("{p, p, q}"), vec!["{p, q}"]);
}

#[test]
fn test_complementary_literals_are_kept() {
    let clause = parse_clause("p, !p").unwrap();
    assert_eq!(clause.len(), 2);
}

#[test]
fn test_multi_character_names() {
    let literal = parse_literal("  ! rain ").unwrap();
    assert_eq!(literal, Literal::negative("rain"));
    assert_eq!(parse_literal("x_1").unwrap(), Literal::positive("x_1"));
}

#[test]
fn test_clause_order_is_preserved() {
    let clauses = parse_formula("{r}, {q}, {p}").unwrap();
    assert_eq!(
        clauses,
        vec![
            Clause::from_iter([Literal::positive("r")]),
            Clause::from_iter([Literal::positive("q")]),
            Clause::from_iter([Literal::positive("p")]),
        ]
    );
}

// =============================================================================
// Rejected formulas
// =============================================================================

#[test]
fn test_empty_formula() {
    let err = parse_formula("").unwrap_err();
    assert_eq!(err, ParseError::Empty);
    assert_eq!(err.to_string(), "No formula given.");
}

#[test]
fn test_unbalanced_braces() {
    assert_eq!(parse_formula("{p").unwrap_err(), ParseError::UnbalancedBraces);
    assert_eq!(parse_formula("p}{").unwrap_err(), ParseError::UnbalancedBraces);
    assert_eq!(parse_formula("{p}}").unwrap_err(), ParseError::UnbalancedBraces);
}

#[test]
fn test_missing_braces_message() {
    let err = parse_formula("p, q").unwrap_err();
    assert_eq!(err, ParseError::MissingBraces);
    assert_eq!(
        err.to_string(),
        "There are no curly braces. Each clause must use exactly one set of curly braces, e.g. {p, q}."
    );
}

#[test]
fn test_too_many_braces() {
    assert_eq!(parse_formula("{{{p}}}").unwrap_err(), ParseError::TooManyBraces);
    assert_eq!(parse_formula("{{p}, {{q}}}").unwrap_err(), ParseError::TooManyBraces);
    assert_eq!(parse_formula("x{{p}}").unwrap_err(), ParseError::TooManyBraces);
}

#[test]
fn test_text_between_clauses_is_rejected() {
    let err = parse_formula("{p} and {q}").unwrap_err();
    assert_eq!(err, ParseError::BadSeparator);
    assert!(err.to_string().starts_with("Clauses may only be separated by comma and/or whitespace."));
}

#[test]
fn test_empty_clause_is_rejected() {
    assert!(matches!(
        parse_formula("{p}, {}").unwrap_err(),
        ParseError::Clause(LiteralError::Empty { .. })
    ));
}

#[test]
fn test_empty_literal_mentions_clause() {
    let err = parse_formula("{p,,q}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse clause. Failed to parse variable, literal was empty. For reference, the clause substring parsed was {p,,q}"
    );
}

#[test]
fn test_invalid_negation_symbol() {
    let err = parse_literal("no p").unwrap_err();
    assert_eq!(
        err,
        LiteralError::InvalidNegation {
            symbol: "no".to_string(),
            literal: "no p".to_string(),
        }
    );
}

#[test]
fn test_whitespace_in_name() {
    let err = parse_literal("not big rain").unwrap_err();
    assert_eq!(
        err,
        LiteralError::WhitespaceInName {
            name: "big rain".to_string(),
            literal: "not big rain".to_string(),
        }
    );
}

#[test]
fn test_lone_negation_symbol() {
    assert_eq!(
        parse_literal("~").unwrap_err(),
        LiteralError::MissingName {
            literal: "~".to_string(),
        }
    );
}

#[test]
fn test_multibyte_input_does_not_panic() {
    assert!(parse_formula("{ü, ¬ö}, {€}").is_ok());
    assert!(parse_formula("ü{").is_err());
    assert!(parse_formula("{¬}").is_err());
}
