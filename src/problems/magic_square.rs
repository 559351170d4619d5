//! The 4x4 magic square: place the values 1..=16, each used once, so that
//! every row, every column, and both main diagonals sum to 34.
//!
//! Sum constraints are not binary, so the adapter uses a dual encoding that
//! is: alongside the 16 cell variables it introduces one *line* variable
//! per row, column, and diagonal, whose domain is the set of 4-value
//! combinations summing to 34. A cell must be a member of each of its
//! lines' combinations, cells are pairwise distinct, and row (and column)
//! combinations are pairwise disjoint. Four distinct cells each drawn from
//! the same 4-value combination necessarily exhaust it, so the line sums
//! follow.

use crate::{
    error::Result,
    solver::{
        constraint::{BinaryConstraint, ConstraintDescriptor},
        constraints::not_equal::NotEqualConstraint,
        instance::{Csp, VariableId},
    },
};

pub const SIDE: usize = 4;
pub const MAGIC_SUM: i64 = 34;

/// A value of the dual encoding: either a cell's number or a line's
/// 4-value combination (stored in ascending order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SquareValue {
    Num(i64),
    Line([i64; 4]),
}

/// Requires a cell's number to appear in a line's combination.
#[derive(Debug, Clone)]
pub struct LineContainsCellConstraint;

impl BinaryConstraint<SquareValue> for LineContainsCellConstraint {
    fn check(&self, a: &SquareValue, b: &SquareValue) -> bool {
        match (a, b) {
            (SquareValue::Num(n), SquareValue::Line(combo)) => combo.contains(n),
            _ => false,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "LineContainsCellConstraint".to_string(),
            description: "?cell in ?line".to_string(),
        }
    }
}

/// Requires two line combinations to share no value.
#[derive(Debug, Clone)]
pub struct DisjointLinesConstraint;

impl BinaryConstraint<SquareValue> for DisjointLinesConstraint {
    fn check(&self, a: &SquareValue, b: &SquareValue) -> bool {
        match (a, b) {
            (SquareValue::Line(p), SquareValue::Line(q)) => p.iter().all(|x| !q.contains(x)),
            _ => false,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "DisjointLinesConstraint".to_string(),
            description: "?line_a disjoint from ?line_b".to_string(),
        }
    }
}

pub fn cell_var(row: usize, col: usize) -> VariableId {
    (row * SIDE + col) as VariableId
}

pub fn row_var(row: usize) -> VariableId {
    (SIDE * SIDE + row) as VariableId
}

pub fn col_var(col: usize) -> VariableId {
    (SIDE * SIDE + SIDE + col) as VariableId
}

pub const MAIN_DIAGONAL: VariableId = (SIDE * SIDE + 2 * SIDE) as VariableId;
pub const ANTI_DIAGONAL: VariableId = MAIN_DIAGONAL + 1;

/// Every ascending 4-value combination of `1..=16` summing to [`MAGIC_SUM`].
fn line_combinations() -> Vec<[i64; 4]> {
    let mut combos = Vec::new();
    for a in 1..=16i64 {
        for b in (a + 1)..=16 {
            for c in (b + 1)..=16 {
                let d = MAGIC_SUM - a - b - c;
                if d > c && d <= 16 {
                    combos.push([a, b, c, d]);
                }
            }
        }
    }
    combos
}

/// Builds the 4x4 magic-square instance.
pub fn magic_square_4() -> Result<Csp<SquareValue>> {
    let combos: Vec<SquareValue> = line_combinations()
        .into_iter()
        .map(SquareValue::Line)
        .collect();

    let mut builder = Csp::builder();
    for row in 0..SIDE {
        for col in 0..SIDE {
            builder = builder.variable(cell_var(row, col), (1..=16).map(SquareValue::Num));
        }
    }
    for line in 0..SIDE {
        builder = builder.variable(row_var(line), combos.iter().cloned());
        builder = builder.variable(col_var(line), combos.iter().cloned());
    }
    builder = builder.variable(MAIN_DIAGONAL, combos.iter().cloned());
    builder = builder.variable(ANTI_DIAGONAL, combos.iter().cloned());

    // All 16 cells hold distinct values.
    for i in 0..SIDE * SIDE {
        for j in (i + 1)..SIDE * SIDE {
            builder = builder.constraint(i as VariableId, j as VariableId, NotEqualConstraint::new());
        }
    }

    // Each cell belongs to its row's and column's combination.
    for row in 0..SIDE {
        for col in 0..SIDE {
            builder = builder.constraint(cell_var(row, col), row_var(row), LineContainsCellConstraint);
            builder = builder.constraint(cell_var(row, col), col_var(col), LineContainsCellConstraint);
        }
    }
    // Diagonal cells additionally belong to their diagonal's combination.
    for k in 0..SIDE {
        builder = builder.constraint(cell_var(k, k), MAIN_DIAGONAL, LineContainsCellConstraint);
        builder = builder.constraint(
            cell_var(k, SIDE - 1 - k),
            ANTI_DIAGONAL,
            LineContainsCellConstraint,
        );
    }

    // Rows partition the 16 values, as do columns.
    for i in 0..SIDE {
        for j in (i + 1)..SIDE {
            builder = builder.constraint(row_var(i), row_var(j), DisjointLinesConstraint);
            builder = builder.constraint(col_var(i), col_var(j), DisjointLinesConstraint);
        }
    }

    builder.build()
}
