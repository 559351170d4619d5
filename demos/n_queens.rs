use arco::{
    problems::n_queens::n_queens,
    solver::{
        heuristics::{value::AscendingValueHeuristic, variable::MinimumRemainingValuesHeuristic},
        instance::VariableId,
        local_search::MinConflicts,
        search::{BacktrackingSearch, Consistency},
        solution::{Assignment, RepairOutcome, SearchOutcome},
        stats::{render_repair_stats, render_search_stats},
    },
};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Solve N-Queens with backtracking search or min-conflicts repair.
#[derive(Parser)]
struct Args {
    /// Board size.
    n: u32,

    /// Repair a random assignment with min-conflicts instead of searching.
    #[arg(long)]
    min_conflicts: bool,

    /// Check assignments only against already assigned neighbors instead
    /// of propagating with AC-3.
    #[arg(long)]
    direct: bool,

    /// RNG seed for min-conflicts.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Step budget for min-conflicts.
    #[arg(long, default_value_t = 10_000)]
    max_steps: u64,
}

fn print_board(assignment: &Assignment<i64>, n: u32) {
    for row in 0..n {
        let queen = *assignment.get(&(row as VariableId)).unwrap();
        let line: String = (0..n as i64)
            .map(|col| if col == queen { " Q" } else { " ." })
            .collect();
        println!("{line}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let csp = n_queens(args.n).expect("board construction cannot fail");

    if args.min_conflicts {
        let solver = MinConflicts::new(args.max_steps);
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let (outcome, stats) = solver.solve_with_restarts(&csp, &mut rng, 5);
        match outcome {
            RepairOutcome::Solved(assignment) => print_board(&assignment, args.n),
            RepairOutcome::StepBudgetExceeded { best, conflicts } => {
                println!("step budget exceeded; best assignment has {conflicts} conflicts");
                print_board(&best, args.n);
            }
        }
        println!("{}", render_repair_stats(&stats));
    } else {
        let consistency = if args.direct {
            Consistency::Direct
        } else {
            Consistency::Arc
        };
        let solver = BacktrackingSearch::new(
            consistency,
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        let (outcome, stats) = solver.solve(&csp);
        match outcome {
            SearchOutcome::Solved(assignment) => print_board(&assignment, args.n),
            SearchOutcome::Exhausted => println!("no solution for n = {}", args.n),
            SearchOutcome::BudgetExceeded => println!("node budget exceeded"),
        }
        println!("{}", render_search_stats(&stats));
    }
}
