//! Helpers shared by the solver test modules: a brute-force solution
//! enumerator and randomly generated table-constraint instances for
//! property tests.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::solver::{
    constraint::{BinaryConstraint, ConstraintDescriptor},
    instance::{Csp, Domains, VariableId},
    value::ValueOrdering,
};

/// A constraint defined by an explicit table of allowed value pairs.
#[derive(Debug, Clone)]
pub(crate) struct TableConstraint {
    allowed: HashSet<(i64, i64)>,
}

impl TableConstraint {
    pub(crate) fn new(allowed: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl BinaryConstraint<i64> for TableConstraint {
    fn check(&self, a: &i64, b: &i64) -> bool {
        self.allowed.contains(&(*a, *b))
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "TableConstraint".to_string(),
            description: format!("{} allowed pairs", self.allowed.len()),
        }
    }
}

/// Enumerates every complete consistent assignment by exhaustive search,
/// in a canonical order. Only suitable for tiny instances.
pub(crate) fn all_solutions<V: ValueOrdering>(
    csp: &Csp<V>,
    domains: &Domains<V>,
) -> Vec<Vec<(VariableId, V)>> {
    let mut order: Vec<VariableId> = csp.variables().to_vec();
    order.sort_unstable();
    let mut partial = Vec::with_capacity(order.len());
    let mut out = Vec::new();
    extend(csp, &order, domains, &mut partial, &mut out);
    out.sort();
    out
}

fn extend<V: ValueOrdering>(
    csp: &Csp<V>,
    order: &[VariableId],
    domains: &Domains<V>,
    partial: &mut Vec<(VariableId, V)>,
    out: &mut Vec<Vec<(VariableId, V)>>,
) {
    if partial.len() == order.len() {
        out.push(partial.clone());
        return;
    }
    let var = order[partial.len()];
    let mut values: Vec<V> = domains.get(&var).unwrap().iter().cloned().collect();
    values.sort();
    for value in values {
        let compatible = partial
            .iter()
            .all(|(assigned, held)| csp.check(var, &value, *assigned, held));
        if compatible {
            partial.push((var, value));
            extend(csp, order, domains, partial, out);
            partial.pop();
        }
    }
}

/// Blueprint for a small random table-constraint CSP: per-variable domain
/// sizes plus an optional allowed-pair table for every variable pair.
#[derive(Debug, Clone)]
pub(crate) struct TableCspSeed {
    domain_sizes: Vec<usize>,
    tables: Vec<Option<HashSet<(u8, u8)>>>,
}

impl Arbitrary for TableCspSeed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        (2usize..=4)
            .prop_flat_map(|n| {
                let pair_count = n * (n - 1) / 2;
                (
                    proptest::collection::vec(1usize..=3, n),
                    proptest::collection::vec(
                        proptest::option::of(proptest::collection::hash_set(
                            (0u8..3, 0u8..3),
                            0..=9,
                        )),
                        pair_count,
                    ),
                )
            })
            .prop_map(|(domain_sizes, tables)| TableCspSeed {
                domain_sizes,
                tables,
            })
            .boxed()
    }
}

pub(crate) fn random_table_csp(seed: &TableCspSeed) -> Csp<i64> {
    let n = seed.domain_sizes.len();
    let mut builder = Csp::builder();
    for (var, &size) in seed.domain_sizes.iter().enumerate() {
        builder = builder.variable(var as VariableId, 0..size as i64);
    }
    let mut pair = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(table) = &seed.tables[pair] {
                let allowed = table.iter().map(|&(a, b)| (a as i64, b as i64));
                builder = builder.constraint(
                    i as VariableId,
                    j as VariableId,
                    TableConstraint::new(allowed),
                );
            }
            pair += 1;
        }
    }
    builder.build().expect("generated instance is well-formed")
}
