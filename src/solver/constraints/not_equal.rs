use std::marker::PhantomData;

use crate::solver::{
    constraint::{BinaryConstraint, ConstraintDescriptor},
    value::ValueEquality,
};

/// The standard `?a != ?b` constraint.
///
/// The workhorse of "all different" problem structures expressed pairwise:
/// Sudoku peers, N-Queens columns, magic-square cells.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V> {
    _phantom: PhantomData<V>,
}

impl<V: ValueEquality> NotEqualConstraint<V> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<V: ValueEquality> Default for NotEqualConstraint<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueEquality> BinaryConstraint<V> for NotEqualConstraint<V> {
    fn check(&self, a: &V, b: &V) -> bool {
        a != b
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: "?a != ?b".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_equal_values_only() {
        let constraint = NotEqualConstraint::<i64>::new();
        assert!(constraint.check(&1, &2));
        assert!(constraint.check(&2, &1));
        assert!(!constraint.check(&1, &1));
    }
}
