/// The base trait for any value that can appear in a variable's domain.
///
/// This establishes the minimum requirements for a value: it must be
/// cloneable, debuggable, equatable, and hashable. This is a marker trait,
/// so any type that satisfies these bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// A capability trait for values that have a defined ordering.
///
/// Heuristics that promise a deterministic value order (e.g.
/// [`AscendingValueHeuristic`]) rely on this.
///
/// [`AscendingValueHeuristic`]: crate::solver::heuristics::value::AscendingValueHeuristic
pub trait ValueOrdering: ValueEquality + Ord {}
impl<T> ValueOrdering for T where T: ValueEquality + Ord {}
