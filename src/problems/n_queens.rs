//! The N-Queens problem: place `n` queens on an `n` x `n` board so that no
//! two share a row, column, or diagonal.
//!
//! One variable per row (the queen's column), so the row constraint is
//! structural; columns and diagonals are one binary constraint per row
//! pair.

use crate::{
    error::Result,
    solver::{
        constraint::{BinaryConstraint, ConstraintDescriptor},
        instance::{Csp, VariableId},
    },
};

/// The binary constraint between two queens `row_gap` rows apart: distinct
/// columns, and a column difference that does not match the row difference.
#[derive(Debug, Clone)]
pub struct QueensApartConstraint {
    row_gap: i64,
}

impl QueensApartConstraint {
    pub fn new(row_gap: i64) -> Self {
        Self { row_gap }
    }
}

impl BinaryConstraint<i64> for QueensApartConstraint {
    fn check(&self, a: &i64, b: &i64) -> bool {
        a != b && (a - b).abs() != self.row_gap
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "QueensApartConstraint".to_string(),
            description: format!("?a != ?b and |?a - ?b| != {}", self.row_gap),
        }
    }
}

/// Builds the N-Queens instance for an `n` x `n` board.
pub fn n_queens(n: u32) -> Result<Csp<i64>> {
    let mut builder = Csp::builder();
    for row in 0..n {
        builder = builder.variable(row, 0..n as i64);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            builder = builder.constraint(i, j, QueensApartConstraint::new((j - i) as i64));
        }
    }
    builder.build()
}

/// Whether a complete column assignment is a valid placement: all pairs of
/// queens on distinct columns and distinct diagonals.
pub fn is_valid_placement(columns: &[i64]) -> bool {
    let n = columns.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if columns[i] == columns[j] {
                return false;
            }
            if (columns[i] - columns[j]).abs() == (j - i) as i64 {
                return false;
            }
        }
    }
    true
}
