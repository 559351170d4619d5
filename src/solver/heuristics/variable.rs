//! Standard heuristics for selecting which variable to branch on next
//! during the search process.

use crate::solver::{
    instance::{Csp, Domains, VariableId},
    solution::Assignment,
    value::ValueEquality,
};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned variable
/// the solver should branch on next. A good heuristic can dramatically
/// improve solver performance.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Selects the next variable to be assigned, or `None` when every
    /// variable is already assigned.
    fn select_variable(
        &self,
        csp: &Csp<V>,
        assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Option<VariableId>;
}

/// Selects the unassigned variable with the lowest [`VariableId`].
///
/// A basic, deterministic selection order.
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        csp: &Csp<V>,
        assignment: &Assignment<V>,
        _domains: &Domains<V>,
    ) -> Option<VariableId> {
        csp.variables()
            .iter()
            .copied()
            .filter(|var| !assignment.contains_key(var))
            .min()
    }
}

/// Selects the unassigned variable with the Minimum Remaining Values (MRV)
/// in its domain.
///
/// A "fail-first" strategy that prioritizes the most constrained variable,
/// so contradictions surface near the top of the search tree. Ties go to
/// the lower [`VariableId`] for determinism.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        csp: &Csp<V>,
        assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Option<VariableId> {
        csp.variables()
            .iter()
            .copied()
            .filter(|var| !assignment.contains_key(var))
            .min_by_key(|&var| (domains.get(&var).map_or(0, |d| d.len()), var))
    }
}

/// Selects the unassigned variable with the most neighbors.
///
/// The classic degree heuristic: branching on highly connected variables
/// first maximizes the reach of each propagation step. Ties go to the lower
/// [`VariableId`].
pub struct MaxDegreeHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MaxDegreeHeuristic {
    fn select_variable(
        &self,
        csp: &Csp<V>,
        assignment: &Assignment<V>,
        _domains: &Domains<V>,
    ) -> Option<VariableId> {
        csp.variables()
            .iter()
            .copied()
            .filter(|var| !assignment.contains_key(var))
            .max_by_key(|&var| (csp.neighbors(var).len(), std::cmp::Reverse(var)))
    }
}
