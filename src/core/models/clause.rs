//! Clause model
//!
//! A clause is a disjunction of literals. Literal order is kept for display,
//! but equality is set equality.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Literal;

/// A set of literals, printed as `{p, ¬q}`
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

/// A resolvent together with the name of the variable it was resolved on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolvent {
    /// The resulting clause
    pub clause: Clause,
    /// Name of the clashing variable
    pub variable: String,
}

impl Clause {
    /// Create a clause, dropping duplicate literals
    #[must_use]
    pub fn new(literals: Vec<Literal>) -> Self {
        Self {
            literals: literals.into_iter().unique().collect_vec(),
        }
    }

    /// The empty clause
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            literals: Vec::new(),
        }
    }

    /// Add a literal unless already present
    pub fn insert(&mut self, literal: Literal) {
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
    }

    /// Literals in insertion order
    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of distinct literals
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True for the empty clause
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check whether the clause contains a literal
    #[must_use]
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// True when every literal of `self` also occurs in `other`
    #[must_use]
    pub fn subsumes(&self, other: &Self) -> bool {
        self.literals.iter().all(|literal| other.contains(literal))
    }

    /// All resolvents of `self` with `other`
    ///
    /// One resolvent per literal of `self` whose complement occurs in `other`.
    /// The clashing pair is removed and the remaining literals are merged,
    /// `self` first.
    #[must_use]
    pub fn resolve_with(&self, other: &Self) -> Vec<Resolvent> {
        self.literals
            .iter()
            .filter(|literal| other.literals.iter().any(|o| literal.is_opposite(o)))
            .map(|literal| {
                let complement = literal.complement();
                let merged = self
                    .literals
                    .iter()
                    .filter(|l| *l != literal)
                    .chain(other.literals.iter().filter(|l| **l != complement))
                    .cloned()
                    .collect();
                Resolvent {
                    clause: Self::new(merged),
                    variable: literal.name.clone(),
                }
            })
            .collect()
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.subsumes(other)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.literals.iter().join(", "))
    }
}

/// Join clauses as `{p}, {q, r}`
#[must_use]
pub fn display_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> String {
    clauses.into_iter().join(", ")
}
