use crate::solver::value::ValueEquality;

/// A human-readable summary of a constraint, used in stats output and
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A binary constraint between two neighboring variables.
///
/// A constraint is a pure predicate over the pair of values held by the two
/// variables it connects: `check(a, b)` returns whether the pair is allowed,
/// where `a` belongs to the first variable and `b` to the second variable of
/// the pair as stated when the constraint was added to the builder. The
/// engine derives the reversed directed view itself, so implementations do
/// not need to be symmetric.
///
/// Implementations must be side-effect free; the solvers call `check`
/// arbitrarily often and in no particular order.
pub trait BinaryConstraint<V: ValueEquality>: std::fmt::Debug {
    fn check(&self, a: &V, b: &V) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;
}

/// Wraps a plain closure as a [`BinaryConstraint`].
///
/// Useful for one-off constraints in adapters and tests where defining a
/// dedicated constraint type would be noise.
pub struct FnConstraint<V> {
    name: String,
    predicate: Box<dyn Fn(&V, &V) -> bool>,
}

impl<V: ValueEquality> FnConstraint<V> {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&V, &V) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<V> std::fmt::Debug for FnConstraint<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConstraint").field("name", &self.name).finish()
    }
}

impl<V: ValueEquality> BinaryConstraint<V> for FnConstraint<V> {
    fn check(&self, a: &V, b: &V) -> bool {
        (self.predicate)(a, b)
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "FnConstraint".to_string(),
            description: self.name.clone(),
        }
    }
}
