//! A small standard library of reusable binary constraints.

pub mod not_equal;
