//! Strategies that determine the order in which a variable's candidate
//! values are tried.

use crate::solver::{
    instance::{Csp, Domains, VariableId},
    solution::Assignment,
    value::{ValueEquality, ValueOrdering},
};

/// A trait for value-ordering heuristics.
pub trait ValueOrderingHeuristic<V: ValueEquality> {
    /// Returns the values of `var`'s current domain in the order they
    /// should be tried.
    fn order_values(
        &self,
        csp: &Csp<V>,
        var: VariableId,
        assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Vec<V>;
}

/// Yields values in their natural domain iteration order.
pub struct IdentityValueHeuristic;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for IdentityValueHeuristic {
    fn order_values(
        &self,
        _csp: &Csp<V>,
        var: VariableId,
        _assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Vec<V> {
        domains.get(&var).map_or_else(Vec::new, |d| d.iter().cloned().collect())
    }
}

/// Yields values in ascending order. Requires ordered values; use this when
/// a run must be reproducible.
pub struct AscendingValueHeuristic;

impl<V: ValueOrdering> ValueOrderingHeuristic<V> for AscendingValueHeuristic {
    fn order_values(
        &self,
        _csp: &Csp<V>,
        var: VariableId,
        _assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Vec<V> {
        let mut values: Vec<V> =
            domains.get(&var).map_or_else(Vec::new, |d| d.iter().cloned().collect());
        values.sort();
        values
    }
}

/// Yields the least constraining value first: the value that rules out the
/// fewest candidates in the domains of `var`'s unassigned neighbors.
///
/// Ties keep their domain iteration order.
pub struct LeastConstrainingValueHeuristic;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        csp: &Csp<V>,
        var: VariableId,
        assignment: &Assignment<V>,
        domains: &Domains<V>,
    ) -> Vec<V> {
        let Some(domain) = domains.get(&var) else {
            return Vec::new();
        };
        let mut scored: Vec<(usize, V)> = domain
            .iter()
            .map(|value| {
                let ruled_out: usize = csp
                    .neighbors(var)
                    .iter()
                    .filter(|peer| !assignment.contains_key(*peer))
                    .map(|&peer| {
                        domains
                            .get(&peer)
                            .map_or(0, |peer_domain| {
                                peer_domain
                                    .iter()
                                    .filter(|peer_value| !csp.check(var, value, peer, peer_value))
                                    .count()
                            })
                    })
                    .sum();
                (ruled_out, value.clone())
            })
            .collect();
        scored.sort_by_key(|(ruled_out, _)| *ruled_out);
        scored.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraints::not_equal::NotEqualConstraint;

    #[test]
    fn ascending_order_is_sorted() {
        let csp = Csp::builder().variable(0, [3i64, 1, 2]).build().unwrap();
        let values = AscendingValueHeuristic.order_values(
            &csp,
            0,
            &Assignment::new(),
            csp.domains(),
        );
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn identity_yields_the_whole_domain() {
        let csp = Csp::builder().variable(0, [3i64, 1, 2]).build().unwrap();
        let mut values = IdentityValueHeuristic.order_values(
            &csp,
            0,
            &Assignment::new(),
            csp.domains(),
        );
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn least_constraining_value_comes_first() {
        // ?0 may be 1 or 2; its peer ?1 can only be 1. Choosing 1 for ?0
        // would wipe the peer's domain, so 2 must be preferred.
        let csp = Csp::builder()
            .variable(0, [1i64, 2])
            .variable(1, [1i64])
            .constraint(0, 1, NotEqualConstraint::new())
            .build()
            .unwrap();
        let values = LeastConstrainingValueHeuristic.order_values(
            &csp,
            0,
            &Assignment::new(),
            csp.domains(),
        );
        assert_eq!(values, vec![2, 1]);
    }
}
