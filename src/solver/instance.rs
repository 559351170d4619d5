use std::{collections::HashMap as DependencyMap, sync::Arc};

use tracing::debug;

use crate::{
    error::{InstanceError, Result},
    solver::{
        constraint::{BinaryConstraint, ConstraintDescriptor},
        value::ValueEquality,
    },
};

pub type VariableId = u32;

/// The candidate values of a single variable.
pub type DomainSet<V> = im::HashSet<V>;

/// A map from each variable to its current domain.
///
/// Persistent maps make snapshots free: holding on to the previous map *is*
/// the snapshot, and restoring after a failed branch is dropping the new
/// one. No partially-restored state is ever observable.
pub type Domains<V> = im::HashMap<VariableId, DomainSet<V>>;

/// An immutable binary CSP instance: variables, initial domains, the
/// neighbor relation, and one constraint predicate per neighboring pair.
///
/// Instances are produced by [`CspBuilder`], which validates the adapter
/// contract up front: the neighbor relation is irreflexive and symmetric by
/// construction, and every variable carries a non-empty initial domain.
/// After construction the structure never changes; solvers only derive new
/// domain maps and assignments from it.
#[derive(Debug)]
pub struct Csp<V: ValueEquality> {
    variables: Vec<VariableId>,
    domains: Domains<V>,
    neighbors: DependencyMap<VariableId, Vec<VariableId>>,
    arcs: DependencyMap<(VariableId, VariableId), Arc<dyn BinaryConstraint<V>>>,
    pairs: Vec<(VariableId, VariableId)>,
}

impl<V: ValueEquality> Csp<V> {
    pub fn builder() -> CspBuilder<V> {
        CspBuilder::new()
    }

    /// The variables of the instance, in declaration order.
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// The initial domains, as declared by the adapter.
    pub fn domains(&self) -> &Domains<V> {
        &self.domains
    }

    /// The neighbors of `var`: every variable sharing a constraint with it.
    pub fn neighbors(&self, var: VariableId) -> &[VariableId] {
        self.neighbors.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks the constraint on the directed pair `(xi, xj)` for the values
    /// `vi` and `vj`.
    ///
    /// Must only be queried for pairs where `xj` is a neighbor of `xi`; a
    /// pair without a constraint is treated as unconstrained.
    pub fn check(&self, xi: VariableId, vi: &V, xj: VariableId, vj: &V) -> bool {
        match self.arcs.get(&(xi, xj)) {
            Some(constraint) => constraint.check(vi, vj),
            None => true,
        }
    }

    /// Every constrained pair, once per undirected edge.
    pub fn constraint_pairs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.pairs.iter().copied()
    }

    /// The descriptor of the constraint on `(xi, xj)`, if the pair is
    /// constrained.
    pub fn descriptor(&self, xi: VariableId, xj: VariableId) -> Option<ConstraintDescriptor> {
        self.arcs.get(&(xi, xj)).map(|c| c.descriptor())
    }
}

/// The reversed directed view of a constraint. Stored for the `(b, a)` arc
/// of every constraint declared on `(a, b)`, so that arc consistency can
/// treat all arcs uniformly.
#[derive(Debug, Clone)]
struct Flipped<V: ValueEquality>(Arc<dyn BinaryConstraint<V>>);

impl<V: ValueEquality> BinaryConstraint<V> for Flipped<V> {
    fn check(&self, a: &V, b: &V) -> bool {
        self.0.check(b, a)
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let inner = self.0.descriptor();
        ConstraintDescriptor {
            name: inner.name,
            description: format!("reversed {}", inner.description),
        }
    }
}

/// Builder for [`Csp`] instances.
///
/// Declare every variable with its initial domain, then add one constraint
/// per constrained pair. [`CspBuilder::build`] performs all
/// malformed-instance validation and is the only place an adapter can be
/// told its contract is violated.
pub struct CspBuilder<V: ValueEquality> {
    variables: Vec<(VariableId, DomainSet<V>)>,
    constraints: Vec<(VariableId, VariableId, Arc<dyn BinaryConstraint<V>>)>,
}

impl<V: ValueEquality> CspBuilder<V> {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Declares a variable with its initial domain.
    pub fn variable(mut self, id: VariableId, values: impl IntoIterator<Item = V>) -> Self {
        self.variables.push((id, values.into_iter().collect()));
        self
    }

    /// Adds a binary constraint between `a` and `b`, making them neighbors.
    ///
    /// The constraint's `check(va, vb)` is evaluated with `va` from `a` and
    /// `vb` from `b`; the reversed arc is derived automatically.
    pub fn constraint(
        mut self,
        a: VariableId,
        b: VariableId,
        constraint: impl BinaryConstraint<V> + 'static,
    ) -> Self {
        self.constraints.push((a, b, Arc::new(constraint)));
        self
    }

    /// Validates and assembles the instance.
    pub fn build(self) -> Result<Csp<V>> {
        let mut variables = Vec::with_capacity(self.variables.len());
        let mut domains = Domains::new();
        for (id, domain) in self.variables {
            if domains.contains_key(&id) {
                return Err(InstanceError::DuplicateVariable(id));
            }
            if domain.is_empty() {
                return Err(InstanceError::EmptyDomain(id));
            }
            variables.push(id);
            domains.insert(id, domain);
        }

        let mut neighbors: DependencyMap<VariableId, Vec<VariableId>> =
            variables.iter().map(|&id| (id, Vec::new())).collect();
        let mut arcs = DependencyMap::new();
        let mut pairs = Vec::with_capacity(self.constraints.len());
        for (a, b, constraint) in self.constraints {
            if a == b {
                return Err(InstanceError::SelfConstraint(a));
            }
            for id in [a, b] {
                if !domains.contains_key(&id) {
                    return Err(InstanceError::UnknownVariable(id));
                }
            }
            if arcs.contains_key(&(a, b)) {
                return Err(InstanceError::DuplicateConstraint(a, b));
            }
            arcs.insert((a, b), constraint.clone());
            arcs.insert(
                (b, a),
                Arc::new(Flipped(constraint)) as Arc<dyn BinaryConstraint<V>>,
            );
            neighbors.get_mut(&a).unwrap().push(b);
            neighbors.get_mut(&b).unwrap().push(a);
            pairs.push((a, b));
        }

        debug!(
            variables = variables.len(),
            constraints = pairs.len(),
            "constructed CSP instance"
        );

        Ok(Csp {
            variables,
            domains,
            neighbors,
            arcs,
            pairs,
        })
    }
}

impl<V: ValueEquality> Default for CspBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraint::FnConstraint;

    fn not_equal() -> FnConstraint<i64> {
        FnConstraint::new("?a != ?b", |a: &i64, b: &i64| a != b)
    }

    #[test]
    fn builder_assembles_a_symmetric_irreflexive_neighbor_relation() {
        let csp = Csp::builder()
            .variable(0, [1i64, 2])
            .variable(1, [1i64, 2])
            .variable(2, [1i64, 2])
            .constraint(0, 1, not_equal())
            .constraint(1, 2, not_equal())
            .build()
            .unwrap();

        assert_eq!(csp.variables(), &[0, 1, 2]);
        assert_eq!(csp.neighbors(0), &[1]);
        assert_eq!(csp.neighbors(1), &[0, 2]);
        assert_eq!(csp.neighbors(2), &[1]);
        for &var in csp.variables() {
            assert!(!csp.neighbors(var).contains(&var));
            for &peer in csp.neighbors(var) {
                assert!(csp.neighbors(peer).contains(&var));
            }
        }
        assert_eq!(csp.constraint_pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn check_evaluates_both_directed_views_of_an_asymmetric_constraint() {
        let csp = Csp::builder()
            .variable(0, [1i64, 2])
            .variable(1, [1i64, 2])
            .constraint(0, 1, FnConstraint::new("?a < ?b", |a: &i64, b: &i64| a < b))
            .build()
            .unwrap();

        assert!(csp.check(0, &1, 1, &2));
        assert!(!csp.check(0, &2, 1, &1));
        // The reversed arc tests the same underlying relation.
        assert!(csp.check(1, &2, 0, &1));
        assert!(!csp.check(1, &1, 0, &2));
    }

    #[test]
    fn duplicate_variable_is_rejected() {
        let err = Csp::builder()
            .variable(0, [1i64])
            .variable(0, [2i64])
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceError::DuplicateVariable(0));
    }

    #[test]
    fn empty_domain_is_rejected() {
        let err = Csp::<i64>::builder().variable(0, []).build().unwrap_err();
        assert_eq!(err, InstanceError::EmptyDomain(0));
    }

    #[test]
    fn constraint_on_undeclared_variable_is_rejected() {
        let err = Csp::builder()
            .variable(0, [1i64])
            .constraint(0, 7, not_equal())
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceError::UnknownVariable(7));
    }

    #[test]
    fn self_constraint_is_rejected() {
        let err = Csp::builder()
            .variable(0, [1i64])
            .constraint(0, 0, not_equal())
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceError::SelfConstraint(0));
    }

    #[test]
    fn second_constraint_on_a_pair_is_rejected_in_either_direction() {
        let err = Csp::builder()
            .variable(0, [1i64])
            .variable(1, [1i64])
            .constraint(0, 1, not_equal())
            .constraint(1, 0, not_equal())
            .build()
            .unwrap_err();
        assert_eq!(err, InstanceError::DuplicateConstraint(1, 0));
    }

    #[test]
    fn unconstrained_pairs_are_unconstrained() {
        let csp = Csp::builder()
            .variable(0, [1i64])
            .variable(1, [1i64])
            .build()
            .unwrap();
        assert!(csp.neighbors(0).is_empty());
        assert!(csp.check(0, &1, 1, &1));
    }
}
