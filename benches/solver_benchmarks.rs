use arco::{
    problems::n_queens::n_queens,
    solver::{
        heuristics::{
            value::AscendingValueHeuristic,
            variable::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
        },
        local_search::MinConflicts,
        search::{BacktrackingSearch, Consistency},
    },
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens_backtracking");
    for n in [6u32, 8] {
        let csp = n_queens(n).unwrap();
        group.bench_with_input(BenchmarkId::new("direct", n), &csp, |b, csp| {
            b.iter(|| {
                let solver = BacktrackingSearch::new(
                    Consistency::Direct,
                    Box::new(SelectFirstHeuristic),
                    Box::new(AscendingValueHeuristic),
                );
                black_box(solver.solve(csp))
            })
        });
        group.bench_with_input(BenchmarkId::new("arc", n), &csp, |b, csp| {
            b.iter(|| {
                let solver = BacktrackingSearch::new(
                    Consistency::Arc,
                    Box::new(MinimumRemainingValuesHeuristic),
                    Box::new(AscendingValueHeuristic),
                );
                black_box(solver.solve(csp))
            })
        });
    }
    group.finish();
}

fn bench_min_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens_min_conflicts");
    for n in [20u32, 50] {
        let csp = n_queens(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &csp, |b, csp| {
            b.iter(|| {
                let solver = MinConflicts::new(10_000);
                let mut rng = ChaCha8Rng::seed_from_u64(0);
                black_box(solver.solve_with_restarts(csp, &mut rng, 5))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backtracking, bench_min_conflicts);
criterion_main!(benches);
