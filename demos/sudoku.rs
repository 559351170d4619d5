use arco::{
    problems::sudoku::{sudoku, CELLS, SIDE},
    solver::{
        heuristics::{value::AscendingValueHeuristic, variable::MinimumRemainingValuesHeuristic},
        instance::VariableId,
        search::{BacktrackingSearch, Consistency},
        solution::{Assignment, SearchOutcome},
        stats::render_search_stats,
    },
};
use clap::Parser;

/// A 17-clue grid, solved here when no puzzle is supplied.
const DEFAULT_CLUES: &str = "\
    000000010400000000020000000000050407\
    008000300001090000300400200050100000\
    000806000";

/// Solve a Sudoku puzzle given as an 81-cell clue string.
#[derive(Parser)]
struct Args {
    /// Digits 1-9 are clues, 0 or . are blanks, whitespace is ignored.
    clues: Option<String>,
}

fn print_grid(assignment: &Assignment<i64>) {
    for row in 0..SIDE {
        if row % 3 == 0 && row > 0 {
            println!("------+-------+------");
        }
        let mut line = String::new();
        for col in 0..SIDE {
            if col % 3 == 0 && col > 0 {
                line.push_str("| ");
            }
            let var = (row * SIDE + col) as VariableId;
            line.push_str(&format!("{} ", assignment.get(&var).unwrap()));
        }
        println!("{line}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let clues = args.clues.as_deref().unwrap_or(DEFAULT_CLUES);

    let csp = match sudoku(clues) {
        Ok(csp) => csp,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    assert_eq!(csp.variables().len(), CELLS);

    let solver = BacktrackingSearch::new(
        Consistency::Arc,
        Box::new(MinimumRemainingValuesHeuristic),
        Box::new(AscendingValueHeuristic),
    );
    let (outcome, stats) = solver.solve(&csp);
    match outcome {
        SearchOutcome::Solved(assignment) => print_grid(&assignment),
        SearchOutcome::Exhausted => println!("puzzle has no solution"),
        SearchOutcome::BudgetExceeded => println!("node budget exceeded"),
    }
    println!("{}", render_search_stats(&stats));
}
