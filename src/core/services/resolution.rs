//! Resolution service - saturates a clause set and explains the result
//!
//! The graph grows in generations. Generation 0 holds the given clauses; each
//! round resolves every known clause against the latest generation and keeps
//! the resolvents no known clause subsumes. Every kept clause remembers the
//! step that produced it, so derivations of the empty clause can be traced
//! back to the given clauses.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::models::{Clause, display_clauses};

use super::parser::{ParseError, parse_formula};

/// Index of a clause in the graph
pub type ClauseId = usize;

/// Position of a step: `(generation, index within generation)`
pub type StepRef = (usize, usize);

/// One resolution step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The two clauses that were resolved
    pub parents: (ClauseId, ClauseId),
    /// The clause obtained
    pub resolvent: ClauseId,
    /// Name of the variable resolved on
    pub variable: String,
}

/// Saturated resolution graph
#[derive(Debug, Clone)]
pub struct ClauseGraph {
    clauses: Vec<Clause>,
    generations: Vec<Vec<ClauseId>>,
    steps: Vec<Vec<Step>>,
    producers: Vec<Option<StepRef>>,
}

/// A chain of steps ending in the empty clause, earliest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    steps: Vec<StepRef>,
}

impl Derivation {
    /// Step positions, earliest first
    #[must_use]
    pub fn steps(&self) -> &[StepRef] {
        &self.steps
    }

    /// Number of steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if there are no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Whether the empty clause was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The empty clause is derivable; only the shortest derivations are kept
    Unsatisfiable {
        /// Shortest derivations, all of equal length
        derivations: Vec<Derivation>,
    },
    /// Saturation finished without the empty clause
    Satisfiable,
}

/// Human readable explanation of a saturated graph
#[derive(Debug, Clone)]
pub struct Solution<'g> {
    graph: &'g ClauseGraph,
    verdict: Verdict,
}

impl ClauseGraph {
    /// Parse a formula and saturate it
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] if the formula is malformed.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        parse_formula(input).map(Self::from_clauses)
    }

    /// Saturate a set of given clauses
    #[must_use]
    pub fn from_clauses(given: Vec<Clause>) -> Self {
        let count = given.len();
        let mut graph = Self {
            clauses: given,
            generations: vec![(0..count).collect()],
            steps: vec![Vec::new()],
            producers: vec![None; count],
        };
        graph.saturate();
        graph
    }

    fn is_known(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|known| known.subsumes(clause))
    }

    fn saturate(&mut self) {
        loop {
            let latest = self.generations.last().cloned().unwrap_or_default();
            let mut kept: Vec<(Clause, Step)> = Vec::new();

            for id in 0..self.clauses.len() {
                for &other in &latest {
                    for resolvent in self.clauses[id].resolve_with(&self.clauses[other]) {
                        let clause = resolvent.clause;
                        let subsumed = self.is_known(&clause)
                            || kept.iter().any(|(k, _)| k.subsumes(&clause));
                        let new_refutation = clause.is_empty()
                            && !kept.iter().any(|(_, step)| step.variable == resolvent.variable);
                        if !subsumed || new_refutation {
                            let step = Step {
                                parents: (id, other),
                                resolvent: 0,
                                variable: resolvent.variable,
                            };
                            kept.push((clause, step));
                        }
                    }
                }
            }

            if kept.is_empty() {
                break;
            }

            let generation = self.generations.len();
            let mut ids = Vec::with_capacity(kept.len());
            let mut steps = Vec::with_capacity(kept.len());
            for (index, (clause, mut step)) in kept.into_iter().enumerate() {
                let id = self.clauses.len();
                self.clauses.push(clause);
                self.producers.push(Some((generation, index)));
                step.resolvent = id;
                ids.push(id);
                steps.push(step);
            }
            log::debug!("generation {generation}: {} new clause(s)", ids.len());
            self.generations.push(ids);
            self.steps.push(steps);
        }
    }

    /// Clause by id
    #[must_use]
    pub fn clause(&self, id: ClauseId) -> &Clause {
        &self.clauses[id]
    }

    /// Total number of clauses, given and derived
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Clause ids per generation, generation 0 being the given clauses
    #[must_use]
    pub fn generations(&self) -> &[Vec<ClauseId>] {
        &self.generations
    }

    /// Steps per generation; generation 0 has none
    #[must_use]
    pub fn steps(&self) -> &[Vec<Step>] {
        &self.steps
    }

    /// Step at a position
    #[must_use]
    pub fn step(&self, at: StepRef) -> &Step {
        &self.steps[at.0][at.1]
    }

    /// First generation holding the empty clause
    #[must_use]
    pub fn refutation_generation(&self) -> Option<usize> {
        self.generations
            .iter()
            .position(|ids| ids.iter().any(|&id| self.clauses[id].is_empty()))
    }

    /// True if the empty clause was never derived
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.refutation_generation().is_none()
    }

    /// All steps needed to derive a clause, earliest first
    #[must_use]
    pub fn derivation(&self, id: ClauseId) -> Derivation {
        let mut pending: Vec<ClauseId> = vec![id];
        let mut seen: BTreeSet<StepRef> = BTreeSet::new();
        while let Some(current) = pending.pop() {
            if let Some(at) = self.producers[current]
                && seen.insert(at)
            {
                let (a, b) = self.step(at).parents;
                pending.push(a);
                if a != b {
                    pending.push(b);
                }
            }
        }
        Derivation {
            steps: seen.into_iter().collect(),
        }
    }

    /// Decide satisfiability and collect the shortest refutations
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        let Some(generation) = self.refutation_generation() else {
            return Verdict::Satisfiable;
        };
        let mut derivations: Vec<Derivation> = self.generations[generation]
            .iter()
            .filter(|&&id| self.clauses[id].is_empty())
            .map(|&id| self.derivation(id))
            .collect();
        derivations.sort_by_key(Derivation::len);
        let shortest = derivations.first().map_or(0, Derivation::len);
        derivations.retain(|d| d.len() == shortest);
        Verdict::Unsatisfiable { derivations }
    }

    /// Explanation of the saturated graph
    #[must_use]
    pub fn solution(&self) -> Solution<'_> {
        Solution {
            graph: self,
            verdict: self.verdict(),
        }
    }

    /// Describe a step as `Resolve {a} and {b} on literal 'x' to obtain {c}`
    #[must_use]
    pub fn describe(&self, step: &Step) -> String {
        format!(
            "Resolve {} and {} on literal '{}' to obtain {}",
            self.clauses[step.parents.0],
            self.clauses[step.parents.1],
            step.variable,
            self.clauses[step.resolvent]
        )
    }

    /// The clauses of every generation, one line per generation
    #[must_use]
    pub fn listing(&self) -> String {
        self.generations
            .iter()
            .enumerate()
            .map(|(generation, ids)| {
                let clauses = display_clauses(ids.iter().map(|&id| &self.clauses[id]));
                if generation == 0 {
                    format!("Given: {clauses}\n")
                } else {
                    format!("Iteration {generation}: {clauses}\n")
                }
            })
            .collect()
    }
}

impl Solution<'_> {
    /// The verdict behind this explanation
    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    fn write_derivation(&self, f: &mut fmt::Formatter<'_>, derivation: &Derivation) -> fmt::Result {
        for &at in derivation.steps() {
            writeln!(f, "{}", self.graph.describe(self.graph.step(at)))?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Unsatisfiable { derivations } => {
                write!(f, "The formula is unsatisfiable! ")?;
                let steps = derivations.first().map_or(0, Derivation::len);
                if let [only] = derivations.as_slice() {
                    writeln!(
                        f,
                        "The quickest way to get the empty set is to do these {steps} steps:"
                    )?;
                    self.write_derivation(f, only)?;
                } else {
                    writeln!(
                        f,
                        "There are {} ways to get the empty set, all taking {steps} steps:",
                        derivations.len()
                    )?;
                    for (option, derivation) in derivations.iter().enumerate() {
                        write!(f, "\nOption {}:\n", option + 1)?;
                        self.write_derivation(f, derivation)?;
                    }
                }
            },
            Verdict::Satisfiable => {
                writeln!(f, "The formula is satisfiable! Take these steps to get all possible clauses:")?;
                for (iteration, steps) in self.graph.steps.iter().enumerate().skip(1) {
                    write!(f, "\nIteration {iteration}:\n")?;
                    for step in steps {
                        writeln!(f, "{}", self.graph.describe(step))?;
                    }
                }
                write!(
                    f,
                    "\nAt the end you should get these {} clauses:\n\n",
                    self.graph.clause_count()
                )?;
                f.write_str(&self.graph.listing())?;
            },
        }
        Ok(())
    }
}
