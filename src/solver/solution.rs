use crate::solver::{
    instance::{Csp, VariableId},
    value::ValueEquality,
};

/// A mapping from variable to a single chosen value.
///
/// Partial during backtracking search; complete (but possibly inconsistent)
/// during min-conflicts repair. Persistent, so branching on a candidate
/// value is a cheap structural update.
pub type Assignment<V> = im::HashMap<VariableId, V>;

/// Whether every variable of the instance is assigned.
pub fn is_complete<V: ValueEquality>(csp: &Csp<V>, assignment: &Assignment<V>) -> bool {
    csp.variables().iter().all(|v| assignment.contains_key(v))
}

/// Whether the assignment is complete and satisfies every constraint.
pub fn is_consistent<V: ValueEquality>(csp: &Csp<V>, assignment: &Assignment<V>) -> bool {
    is_complete(csp, assignment) && violated_pairs(csp, assignment) == 0
}

/// The number of constrained pairs whose assigned values violate their
/// constraint. Pairs with an unassigned endpoint are not counted.
pub fn violated_pairs<V: ValueEquality>(csp: &Csp<V>, assignment: &Assignment<V>) -> usize {
    csp.constraint_pairs()
        .filter(|&(a, b)| match (assignment.get(&a), assignment.get(&b)) {
            (Some(va), Some(vb)) => !csp.check(a, va, b, vb),
            _ => false,
        })
        .count()
}

/// The result of a backtracking search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<V: ValueEquality> {
    /// A complete, consistent assignment.
    Solved(Assignment<V>),
    /// The search space was exhausted: the instance is unsatisfiable.
    Exhausted,
    /// The node budget ran out before the search could conclude either way.
    BudgetExceeded,
}

impl<V: ValueEquality> SearchOutcome<V> {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn solution(self) -> Option<Assignment<V>> {
        match self {
            SearchOutcome::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}

/// The result of a min-conflicts repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome<V: ValueEquality> {
    /// A complete, consistent assignment.
    Solved(Assignment<V>),
    /// The step budget ran out. Carries the best complete assignment
    /// observed and its violated-constraint count. This is a best-effort
    /// report, not a proof of unsatisfiability.
    StepBudgetExceeded {
        best: Assignment<V>,
        conflicts: usize,
    },
}

impl<V: ValueEquality> RepairOutcome<V> {
    pub fn is_solved(&self) -> bool {
        matches!(self, RepairOutcome::Solved(_))
    }

    pub fn solution(self) -> Option<Assignment<V>> {
        match self {
            RepairOutcome::Solved(assignment) => Some(assignment),
            RepairOutcome::StepBudgetExceeded { .. } => None,
        }
    }
}
