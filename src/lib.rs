//! Arco is a generic engine for finite-domain **binary** constraint
//! satisfaction problems (CSPs).
//!
//! A problem is a set of variables, each with a finite domain of candidate
//! values, connected by binary constraints that restrict which pairs of
//! values two neighboring variables may hold at the same time. The engine
//! offers two solving strategies over the same problem representation:
//!
//! - **Backtracking search** ([`BacktrackingSearch`]), which assigns
//!   variables one at a time and either checks each tentative assignment
//!   against its already-assigned neighbors (1-consistency) or additionally
//!   prunes future domains with AC-3 propagation (2-consistency).
//! - **Min-conflicts local search** ([`MinConflicts`]), which starts from a
//!   complete random assignment and stochastically repairs the most
//!   conflicted variables. It is fast on loosely constrained problems but
//!   offers no completeness guarantee.
//!
//! AC-3 is also available on its own as a whole-graph consistency filter via
//! [`arc_consistency`].
//!
//! Concrete problems are plugged in through [`CspBuilder`]: declare the
//! variables with their domains, add one [`BinaryConstraint`] per
//! constrained pair, and `build()`. The builder validates the instance up
//! front, so the solvers never see a malformed neighbor relation.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?A != ?B` where `?A` can be `1` or `2` and `?B` can only be `1`;
//! the solver must deduce that `?A` is `2`.
//!
//! ```
//! use arco::solver::{
//!     constraints::not_equal::NotEqualConstraint,
//!     heuristics::{value::AscendingValueHeuristic, variable::SelectFirstHeuristic},
//!     instance::Csp,
//!     search::{BacktrackingSearch, Consistency},
//!     solution::SearchOutcome,
//! };
//!
//! let csp = Csp::builder()
//!     .variable(0, [1i64, 2])
//!     .variable(1, [1i64])
//!     .constraint(0, 1, NotEqualConstraint::new())
//!     .build()
//!     .unwrap();
//!
//! let solver = BacktrackingSearch::new(
//!     Consistency::Arc,
//!     Box::new(SelectFirstHeuristic),
//!     Box::new(AscendingValueHeuristic),
//! );
//! let (outcome, _stats) = solver.solve(&csp);
//!
//! let SearchOutcome::Solved(assignment) = outcome else {
//!     panic!("expected a solution");
//! };
//! assert_eq!(assignment.get(&0), Some(&2));
//! assert_eq!(assignment.get(&1), Some(&1));
//! ```
//!
//! [`BacktrackingSearch`]: solver::search::BacktrackingSearch
//! [`MinConflicts`]: solver::local_search::MinConflicts
//! [`arc_consistency`]: solver::propagation::arc_consistency
//! [`CspBuilder`]: solver::instance::CspBuilder
//! [`BinaryConstraint`]: solver::constraint::BinaryConstraint
pub mod error;
pub mod problems;
pub mod solver;
