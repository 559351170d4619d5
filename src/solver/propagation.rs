//! Arc consistency (AC-3).
//!
//! A directed arc `(xi, xj)` is consistent when every value in `xi`'s domain
//! has at least one supporting value in `xj`'s domain. AC-3 drives all arcs
//! to consistency by revising them off a worklist, requeueing the incoming
//! arcs of any variable whose domain shrinks. The fixed point is confluent:
//! processing order affects only the amount of work, never the result.
//!
//! The procedure is exposed two ways: [`arc_consistency`] filters the whole
//! graph (a standalone 2-consistency test), while [`propagate_assignment`]
//! restricts the initial worklist to arcs into a just-narrowed variable and
//! is the pruning step used inside backtracking search.

use tracing::trace;

use crate::solver::{
    instance::{Csp, DomainSet, Domains, VariableId},
    stats::PropagationStats,
    value::ValueEquality,
    work_list::WorkList,
};

/// The result of an AC-3 run.
///
/// When `consistent` is `false` some domain was emptied and the instance is
/// unsatisfiable under the given domains; `domains` then holds the state at
/// the point of the wipe-out. When `true`, `domains` is the arc-consistent
/// fixed point, which loses no solution of the original domains.
#[derive(Debug, Clone)]
pub struct Propagation<V: ValueEquality> {
    pub consistent: bool,
    pub domains: Domains<V>,
    pub stats: PropagationStats,
}

/// Enforces arc consistency over the whole constraint graph.
pub fn arc_consistency<V: ValueEquality>(csp: &Csp<V>, domains: &Domains<V>) -> Propagation<V> {
    let mut worklist = WorkList::new();
    for &xi in csp.variables() {
        for &xj in csp.neighbors(xi) {
            worklist.push_back(xi, xj);
        }
    }
    let mut stats = PropagationStats::default();
    let (consistent, domains) = enforce(csp, domains.clone(), worklist, &mut stats);
    Propagation {
        consistent,
        domains,
        stats,
    }
}

/// Enforces arc consistency starting from a just-narrowed variable.
///
/// Only arcs into `var`'s neighbors are seeded; further arcs join the
/// worklist as domains shrink. Used by the search after each tentative
/// assignment, where the rest of the graph is already consistent.
pub fn propagate_assignment<V: ValueEquality>(
    csp: &Csp<V>,
    domains: &Domains<V>,
    var: VariableId,
) -> Propagation<V> {
    let mut stats = PropagationStats::default();
    let (consistent, domains) = enforce(csp, domains.clone(), seeded_from(csp, var), &mut stats);
    Propagation {
        consistent,
        domains,
        stats,
    }
}

pub(crate) fn seeded_from<V: ValueEquality>(csp: &Csp<V>, var: VariableId) -> WorkList {
    let mut worklist = WorkList::new();
    for &xk in csp.neighbors(var) {
        worklist.push_back(xk, var);
    }
    worklist
}

/// The AC-3 main loop. Returns the (possibly pruned) domains together with
/// whether a fixed point was reached without emptying any domain.
pub(crate) fn enforce<V: ValueEquality>(
    csp: &Csp<V>,
    mut domains: Domains<V>,
    mut worklist: WorkList,
    stats: &mut PropagationStats,
) -> (bool, Domains<V>) {
    while let Some((xi, xj)) = worklist.pop_front() {
        stats.revisions += 1;
        let Some(revised) = revise(csp, &domains, xi, xj) else {
            continue;
        };
        stats.prunings += (domains.get(&xi).unwrap().len() - revised.len()) as u64;
        let emptied = revised.is_empty();
        domains.insert(xi, revised);
        if emptied {
            trace!(variable = xi, against = xj, "domain emptied during propagation");
            return (false, domains);
        }
        for &xk in csp.neighbors(xi) {
            if xk != xj {
                worklist.push_back(xk, xi);
            }
        }
    }
    (true, domains)
}

/// Removes from `xi`'s domain every value with no support in `xj`'s domain.
/// Returns the reduced domain only if something was removed.
fn revise<V: ValueEquality>(
    csp: &Csp<V>,
    domains: &Domains<V>,
    xi: VariableId,
    xj: VariableId,
) -> Option<DomainSet<V>> {
    let di = domains.get(&xi).unwrap();
    let dj = domains.get(&xj).unwrap();
    let kept: DomainSet<V> = di
        .iter()
        .filter(|a| dj.iter().any(|b| csp.check(xi, a, xj, b)))
        .cloned()
        .collect();
    if kept.len() < di.len() {
        Some(kept)
    } else {
        None
    }
}
