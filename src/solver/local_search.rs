//! Min-conflicts local search.
//!
//! Starts from a complete random assignment and repeatedly repairs a
//! conflicted variable by moving it to the value with the fewest conflicts
//! against its neighbors' current values. Typically far faster than
//! systematic search on loosely constrained large problems (N-Queens at
//! scale), but incomplete: a failure report says nothing about
//! satisfiability.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so runs
//! are reproducible with a seeded generator such as
//! `rand_chacha::ChaCha8Rng`.

use rand::{seq::IteratorRandom, Rng};
use tracing::{debug, trace};

use crate::solver::{
    instance::{Csp, VariableId},
    solution::{violated_pairs, Assignment, RepairOutcome},
    stats::RepairStats,
    value::ValueEquality,
};

/// The min-conflicts repair loop, bounded by a step budget.
pub struct MinConflicts {
    max_steps: u64,
}

impl MinConflicts {
    pub fn new(max_steps: u64) -> Self {
        Self { max_steps }
    }

    /// Runs a single repair pass from a fresh random assignment.
    pub fn solve<V: ValueEquality, R: Rng + ?Sized>(
        &self,
        csp: &Csp<V>,
        rng: &mut R,
    ) -> (RepairOutcome<V>, RepairStats) {
        let mut stats = RepairStats::default();
        let outcome = self.repair(csp, rng, &mut stats);
        (outcome, stats)
    }

    /// Runs up to `attempts` repair passes, each from a fresh random
    /// assignment, returning the first success or the best failure.
    pub fn solve_with_restarts<V: ValueEquality, R: Rng + ?Sized>(
        &self,
        csp: &Csp<V>,
        rng: &mut R,
        attempts: u32,
    ) -> (RepairOutcome<V>, RepairStats) {
        let mut stats = RepairStats::default();
        let mut outcome = self.repair(csp, rng, &mut stats);
        for _ in 1..attempts {
            if outcome.is_solved() {
                break;
            }
            stats.restarts += 1;
            let retry = self.repair(csp, rng, &mut stats);
            outcome = match (outcome, retry) {
                (
                    RepairOutcome::StepBudgetExceeded { best, conflicts },
                    RepairOutcome::StepBudgetExceeded {
                        best: retry_best,
                        conflicts: retry_conflicts,
                    },
                ) => {
                    if retry_conflicts < conflicts {
                        RepairOutcome::StepBudgetExceeded {
                            best: retry_best,
                            conflicts: retry_conflicts,
                        }
                    } else {
                        RepairOutcome::StepBudgetExceeded { best, conflicts }
                    }
                }
                (_, solved) => solved,
            };
        }
        (outcome, stats)
    }

    fn repair<V: ValueEquality, R: Rng + ?Sized>(
        &self,
        csp: &Csp<V>,
        rng: &mut R,
        stats: &mut RepairStats,
    ) -> RepairOutcome<V> {
        // Complete random initialization; domains are non-empty by the
        // builder's contract.
        let mut assignment: Assignment<V> = Assignment::new();
        for &var in csp.variables() {
            let domain = csp.domains().get(&var).unwrap();
            let value = domain.iter().choose(rng).cloned().unwrap();
            assignment.insert(var, value);
        }

        let mut best = assignment.clone();
        let mut best_conflicts = violated_pairs(csp, &assignment);

        for _ in 0..self.max_steps {
            let conflicted: Vec<VariableId> = csp
                .variables()
                .iter()
                .copied()
                .filter(|&var| conflict_count(csp, &assignment, var, assignment.get(&var).unwrap()) > 0)
                .collect();
            if conflicted.is_empty() {
                debug!(steps = stats.steps, "repair converged");
                return RepairOutcome::Solved(assignment);
            }
            stats.steps += 1;

            let var = *conflicted.iter().choose(rng).unwrap();
            let domain = csp.domains().get(&var).unwrap();

            // Minimizing values, ties kept for a uniform random pick. The
            // random tie-break is what lets the walk leave plateaus.
            let mut minimum = usize::MAX;
            let mut candidates: Vec<V> = Vec::new();
            for value in domain.iter() {
                let conflicts = conflict_count(csp, &assignment, var, value);
                if conflicts < minimum {
                    minimum = conflicts;
                    candidates.clear();
                }
                if conflicts == minimum {
                    candidates.push(value.clone());
                }
            }
            let value = candidates.into_iter().choose(rng).unwrap();
            trace!(variable = var, conflicts = minimum, "reassigning");
            assignment.insert(var, value);

            let total = violated_pairs(csp, &assignment);
            if total < best_conflicts {
                best_conflicts = total;
                best = assignment.clone();
            }
        }

        RepairOutcome::StepBudgetExceeded {
            best,
            conflicts: best_conflicts,
        }
    }
}

/// Number of `var`'s neighbors whose currently assigned value violates the
/// constraint against the candidate `value`.
pub fn conflict_count<V: ValueEquality>(
    csp: &Csp<V>,
    assignment: &Assignment<V>,
    var: VariableId,
    value: &V,
) -> usize {
    csp.neighbors(var)
        .iter()
        .filter(|&&peer| match assignment.get(&peer) {
            Some(held) => !csp.check(var, value, peer, held),
            None => false,
        })
        .count()
}
