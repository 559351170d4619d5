//! Pluggable policies for the backtracking search: which variable to branch
//! on next, and in which order to try its values.

pub mod value;
pub mod variable;
