//! Formula parser
//!
//! Turns text such as `{p, q}, {!p, r}` or `{{p, q}, {!p, r}}` into clauses.
//! Every rejection carries the message the user sees next to the input box.

use thiserror::Error;

use crate::core::models::{Clause, Literal, is_negation_symbol};

/// Why a formula was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was the empty string
    #[error("No formula given.")]
    Empty,

    /// Braces close before they open or never close
    #[error("Curly braces do not match")]
    UnbalancedBraces,

    /// No clause braces at all
    #[error(
        "There are no curly braces. Each clause must use exactly one set of curly braces, e.g. {{p, q}}."
    )]
    MissingBraces,

    /// Nesting deeper than an optional outer pair
    #[error(
        "There are too many curly braces. Each clause must use exactly one set of curly braces, e.g. {{p, q}}. All the clauses may be enclosed in one set of curly braces (or not). E.g. {{{{p, q}}, {{r, s}}}} or {{p, q}}, {{r, s}}"
    )]
    TooManyBraces,

    /// Something other than commas or whitespace between clauses
    #[error(
        "Clauses may only be separated by comma and/or whitespace. E.g. {{p, q}} , {{r, s}} is valid, as is {{p, q}}{{r, s}}"
    )]
    BadSeparator,

    /// A literal inside a clause was malformed
    #[error("Failed to parse clause. {0}")]
    Clause(#[from] LiteralError),
}

/// Why a single literal was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Nothing between the separators
    #[error("Failed to parse variable, literal was empty. For reference, the clause substring parsed was {{{clause}}}")]
    Empty {
        /// The clause body the empty literal came from
        clause: String,
    },

    /// Two words, but the first is not a negation symbol
    #[error(
        "Invalid negation symbol: {symbol}. For reference, the variable substring parsed was {literal}"
    )]
    InvalidNegation {
        /// The word in negation position
        symbol: String,
        /// The whole literal text
        literal: String,
    },

    /// The name after the negation contains whitespace
    #[error(
        "Variable name contains whitespaces. For reference, the variable name was extracted as {name} and the variable substring parsed was {literal}"
    )]
    WhitespaceInName {
        /// The extracted name
        name: String,
        /// The whole literal text
        literal: String,
    },

    /// A negation symbol with nothing after it
    #[error(
        "Failed to parse variable, literal consisted of only a negation symbol, missing a variable. For reference, the variable substring parsed was {literal}"
    )]
    MissingName {
        /// The whole literal text
        literal: String,
    },
}

/// Parse a formula into its clauses
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse_formula(input: &str) -> Result<Vec<Clause>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut depth: i32 = 0;
    let mut max_depth: i32 = 0;
    for c in input.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {},
        }
        max_depth = max_depth.max(depth);
        if depth < 0 {
            return Err(ParseError::UnbalancedBraces);
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedBraces);
    }
    match max_depth {
        0 => return Err(ParseError::MissingBraces),
        1 | 2 => {},
        _ => return Err(ParseError::TooManyBraces),
    }

    let mut body = input.trim();
    if max_depth == 2 {
        body = body
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseError::TooManyBraces)?
            .trim();
    }

    let mut clauses = Vec::new();
    let mut start = None;
    for (index, c) in body.char_indices() {
        match (c, start) {
            ('{', None) => start = Some(index + c.len_utf8()),
            ('{', Some(_)) => return Err(ParseError::TooManyBraces),
            ('}', Some(from)) => {
                clauses.push(parse_clause(&body[from..index])?);
                start = None;
            },
            ('}', None) => return Err(ParseError::UnbalancedBraces),
            (_, None) if c != ',' && !c.is_whitespace() => return Err(ParseError::BadSeparator),
            _ => {},
        }
    }
    if start.is_some() {
        return Err(ParseError::UnbalancedBraces);
    }

    log::trace!("parsed {} clause(s)", clauses.len());
    Ok(clauses)
}

/// Parse the body of one clause (without braces)
///
/// # Errors
///
/// Returns a [`LiteralError`] for the first malformed literal.
pub fn parse_clause(body: &str) -> Result<Clause, LiteralError> {
    let mut clause = Clause::empty();
    for raw in body.split(',') {
        if raw.trim().is_empty() {
            return Err(LiteralError::Empty {
                clause: body.to_string(),
            });
        }
        clause.insert(parse_literal(raw)?);
    }
    Ok(clause)
}

/// Parse a single literal such as `p`, `!p`, `not p` or `\neg p`
///
/// # Errors
///
/// Returns a [`LiteralError`] when the literal is malformed.
pub fn parse_literal(raw: &str) -> Result<Literal, LiteralError> {
    let literal = raw.trim();
    if literal.is_empty() {
        return Err(LiteralError::Empty {
            clause: raw.to_string(),
        });
    }

    if let Some((symbol, rest)) = literal.split_once(char::is_whitespace) {
        if !is_negation_symbol(symbol) {
            return Err(LiteralError::InvalidNegation {
                symbol: symbol.to_string(),
                literal: literal.to_string(),
            });
        }
        let name = rest.trim();
        if name.contains(char::is_whitespace) {
            return Err(LiteralError::WhitespaceInName {
                name: name.to_string(),
                literal: literal.to_string(),
            });
        }
        return Ok(Literal::negative(name));
    }

    let mut chars = literal.chars();
    match chars.next() {
        Some(first) if is_negation_symbol(first.encode_utf8(&mut [0; 4])) => {
            let name = chars.as_str();
            if name.is_empty() {
                return Err(LiteralError::MissingName {
                    literal: literal.to_string(),
                });
            }
            Ok(Literal::negative(name))
        },
        _ => Ok(Literal::positive(literal)),
    }
}
