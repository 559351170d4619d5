//! The generic solving machinery: problem representation, AC-3 propagation,
//! backtracking search, and min-conflicts local search.

pub mod constraint;
pub mod constraints;
pub mod heuristics;
pub mod instance;
pub mod local_search;
pub mod propagation;
pub mod search;
pub mod solution;
pub mod stats;
pub mod value;

pub(crate) mod work_list;

#[cfg(test)]
pub(crate) mod test_support;
