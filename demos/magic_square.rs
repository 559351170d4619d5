use arco::{
    problems::magic_square::{cell_var, magic_square_4, SquareValue, MAGIC_SUM, SIDE},
    solver::{
        heuristics::{value::AscendingValueHeuristic, variable::MinimumRemainingValuesHeuristic},
        search::{BacktrackingSearch, Consistency},
        solution::SearchOutcome,
        stats::render_search_stats,
    },
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let csp = magic_square_4().expect("square construction cannot fail");
    let solver = BacktrackingSearch::new(
        Consistency::Arc,
        Box::new(MinimumRemainingValuesHeuristic),
        Box::new(AscendingValueHeuristic),
    );
    let (outcome, stats) = solver.solve(&csp);

    match outcome {
        SearchOutcome::Solved(assignment) => {
            println!("every row, column, and diagonal sums to {MAGIC_SUM}:");
            for row in 0..SIDE {
                let line: String = (0..SIDE)
                    .map(|col| match assignment.get(&cell_var(row, col)) {
                        Some(SquareValue::Num(n)) => format!("{n:>3}"),
                        _ => unreachable!("cells hold numbers"),
                    })
                    .collect();
                println!("{line}");
            }
        }
        SearchOutcome::Exhausted => println!("no 4x4 magic square found"),
        SearchOutcome::BudgetExceeded => println!("node budget exceeded"),
    }
    println!("{}", render_search_stats(&stats));
}
