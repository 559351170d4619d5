//! Systematic backtracking search over partial assignments.

use tracing::{debug, trace};

use crate::solver::{
    heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
    instance::{Csp, DomainSet, Domains, VariableId},
    propagation,
    solution::{Assignment, SearchOutcome},
    stats::SearchStats,
    value::ValueEquality,
    work_list::WorkList,
};

/// The degree of consistency enforced after each tentative assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// 1-consistency: check the new assignment only against its
    /// already-assigned neighbors. No forward pruning.
    Direct,
    /// 2-consistency: additionally run AC-3 seeded from the assigned
    /// variable, pruning future domains and detecting dead ends early.
    Arc,
}

/// Depth-first backtracking search.
///
/// Assigns one variable per level, restoring the pre-assignment domain
/// snapshot whenever a candidate value leads to a dead end. Domains are
/// persistent maps, so a snapshot is just the previous map and a restore is
/// all-or-nothing by construction. Recursion depth is bounded by the number
/// of variables.
///
/// The contract of [`BacktrackingSearch::solve`]: it returns either a
/// complete consistent assignment, [`SearchOutcome::Exhausted`] when the
/// whole space has been ruled out, or [`SearchOutcome::BudgetExceeded`]
/// when an optional node budget ran out first. It never returns a partial
/// or inconsistent assignment.
pub struct BacktrackingSearch<V: ValueEquality> {
    consistency: Consistency,
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    node_budget: Option<u64>,
}

impl<V: ValueEquality> BacktrackingSearch<V> {
    pub fn new(
        consistency: Consistency,
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            consistency,
            variable_heuristic,
            value_heuristic,
            node_budget: None,
        }
    }

    /// Bounds the number of search nodes visited. When the budget runs out
    /// the search reports [`SearchOutcome::BudgetExceeded`] instead of a
    /// verdict.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    pub fn solve(&self, csp: &Csp<V>) -> (SearchOutcome<V>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut domains = csp.domains().clone();

        if self.consistency == Consistency::Arc {
            // Whole-graph filter before any branching.
            let mut worklist = WorkList::new();
            for &xi in csp.variables() {
                for &xj in csp.neighbors(xi) {
                    worklist.push_back(xi, xj);
                }
            }
            let (consistent, pruned) =
                propagation::enforce(csp, domains, worklist, &mut stats.propagation);
            if !consistent {
                debug!("instance is inconsistent before search");
                return (SearchOutcome::Exhausted, stats);
            }
            domains = pruned;
        }

        let outcome = self.search(csp, Assignment::new(), domains, &mut stats);
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = outcome.is_solved(),
            "search finished"
        );
        (outcome, stats)
    }

    fn search(
        &self,
        csp: &Csp<V>,
        assignment: Assignment<V>,
        domains: Domains<V>,
        stats: &mut SearchStats,
    ) -> SearchOutcome<V> {
        if let Some(budget) = self.node_budget {
            if stats.nodes_visited >= budget {
                return SearchOutcome::BudgetExceeded;
            }
        }
        stats.nodes_visited += 1;

        let Some(var) = self
            .variable_heuristic
            .select_variable(csp, &assignment, &domains)
        else {
            // Every variable assigned; each assignment was checked against
            // its neighbors on the way down.
            return SearchOutcome::Solved(assignment);
        };

        for value in self
            .value_heuristic
            .order_values(csp, var, &assignment, &domains)
        {
            if !consistent_with_assigned(csp, &assignment, var, &value) {
                stats.backtracks += 1;
                continue;
            }
            trace!(variable = var, depth = assignment.len(), "assigning");
            let extended = assignment.update(var, value.clone());

            let descend = match self.consistency {
                Consistency::Direct => Some(domains.clone()),
                Consistency::Arc => {
                    let narrowed = domains.update(var, DomainSet::unit(value));
                    let (consistent, pruned) = propagation::enforce(
                        csp,
                        narrowed,
                        propagation::seeded_from(csp, var),
                        &mut stats.propagation,
                    );
                    consistent.then_some(pruned)
                }
            };

            if let Some(next_domains) = descend {
                match self.search(csp, extended, next_domains, stats) {
                    SearchOutcome::Exhausted => {}
                    concluded => return concluded,
                }
            }
            stats.backtracks += 1;
        }

        SearchOutcome::Exhausted
    }
}

fn consistent_with_assigned<V: ValueEquality>(
    csp: &Csp<V>,
    assignment: &Assignment<V>,
    var: VariableId,
    value: &V,
) -> bool {
    csp.neighbors(var).iter().all(|&peer| match assignment.get(&peer) {
        Some(held) => csp.check(var, value, peer, held),
        None => true,
    })
}
