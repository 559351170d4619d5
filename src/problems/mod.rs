//! Ready-made problem adapters. Each builds a [`Csp`] instance from its
//! puzzle parameters; the solving machinery stays untouched.
//!
//! [`Csp`]: crate::solver::instance::Csp

pub mod magic_square;
pub mod n_queens;
pub mod sudoku;
