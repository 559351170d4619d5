use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters for AC-3 propagation work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PropagationStats {
    /// Number of directed arcs revised.
    pub revisions: u64,
    /// Number of individual values pruned from domains.
    pub prunings: u64,
}

/// Counters for a backtracking search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of search nodes visited (one per variable-branching step).
    pub nodes_visited: u64,
    /// Number of candidate values that led to a dead end.
    pub backtracks: u64,
    /// Propagation work performed across the whole run.
    pub propagation: PropagationStats,
}

/// Counters for a min-conflicts repair run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairStats {
    /// Number of repair steps (variable reassignments) performed.
    pub steps: u64,
    /// Number of restarts taken by [`solve_with_restarts`].
    ///
    /// [`solve_with_restarts`]: crate::solver::local_search::MinConflicts::solve_with_restarts
    pub restarts: u32,
}

pub fn render_search_stats(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(metric_row("Nodes visited", stats.nodes_visited));
    table.add_row(metric_row("Backtracks", stats.backtracks));
    table.add_row(metric_row("Arc revisions", stats.propagation.revisions));
    table.add_row(metric_row("Values pruned", stats.propagation.prunings));
    table.to_string()
}

pub fn render_repair_stats(stats: &RepairStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(metric_row("Repair steps", stats.steps));
    table.add_row(metric_row("Restarts", stats.restarts as u64));
    table.to_string()
}

fn metric_row(name: &str, count: u64) -> Row {
    Row::new(vec![Cell::new(name), Cell::new(&count.to_string())])
}
