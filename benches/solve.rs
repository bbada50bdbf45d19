use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use eqsolver::{
    PayoffGame,
    equilibrium::{GaussianElimination, LinearSystem, LuSolver, solve_equilibrium_with},
};
use rand::{SeedableRng, rngs::StdRng};

fn random_game(n: usize) -> PayoffGame {
    let mut rng = StdRng::seed_from_u64(n as u64);
    PayoffGame::random(n, n, 0., 10., &mut rng).expect("Error generating game.")
}

fn bench_assemble(c: &mut Criterion) {
    let game = random_game(32);
    c.bench_function("assemble_32", |b| b.iter(|| LinearSystem::assemble(&game)));
}

fn bench_solvers(c: &mut Criterion) {
    for n in [4, 16, 64] {
        c.bench_function(&format!("lu_{n}"), |b| {
            b.iter_batched(
                || random_game(n),
                |game| solve_equilibrium_with(&game, &LuSolver::default()),
                BatchSize::SmallInput,
            )
        });
        c.bench_function(&format!("gauss_{n}"), |b| {
            b.iter_batched(
                || random_game(n),
                |game| solve_equilibrium_with(&game, &GaussianElimination::default()),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_assemble, bench_solvers);
criterion_main!(benches);
