use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use sudoku_engine::SudokuGrid;
use sudoku_engine::checker;
use sudoku_engine::generator::{Difficulty, Generator};

// All benchmarks use a seeded RNG so runs are comparable across changes to
// the engine.

fn seeded_generator() -> Generator<ChaCha8Rng> {
    Generator::new(ChaCha8Rng::seed_from_u64(20))
}

fn benchmark_generate_full(c: &mut Criterion) {
    let mut generator = seeded_generator();

    c.bench_function("generate full board", |b| {
        b.iter(|| generator.generate_full())
    });
}

fn benchmark_generate_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate puzzle");

    for &(name, difficulty) in &[
        ("easy", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("hard", Difficulty::Hard)
    ] {
        let mut generator = seeded_generator();

        group.bench_function(name, |b| {
            b.iter(|| generator.generate_puzzle(difficulty))
        });
    }

    group.finish();
}

fn benchmark_check_conflicts(c: &mut Criterion) {
    let mut generator = seeded_generator();
    let generated = generator.generate_puzzle(Difficulty::Hard);
    let board = generated.puzzle;

    c.bench_function("check conflicts of all cells", |b| {
        b.iter(|| {
            let mut conflict_count = 0;

            for row in 0..SudokuGrid::SIZE {
                for column in 0..SudokuGrid::SIZE {
                    let report =
                        checker::check_conflicts(&board, column, row)
                            .unwrap();
                    conflict_count += report.conflicts().len();
                }
            }

            conflict_count
        })
    });
}

fn benchmark_is_board_complete(c: &mut Criterion) {
    let mut generator = seeded_generator();
    let generated = generator.generate_puzzle(Difficulty::Easy);

    c.bench_function("completion check", |b| {
        b.iter(|| checker::is_board_complete(&generated.puzzle,
            &generated.solution))
    });
}

fn benchmark_fill_puzzle(c: &mut Criterion) {
    let mut generator = seeded_generator();
    let generated = generator.generate_puzzle(Difficulty::Hard);

    c.bench_function("fill hard puzzle", |b| {
        b.iter_batched(
            || (seeded_generator(), generated.puzzle.clone()),
            |(mut generator, mut grid)| generator.fill(&mut grid).unwrap(),
            BatchSize::SmallInput)
    });
}

criterion_group!(benches,
    benchmark_generate_full,
    benchmark_generate_puzzle,
    benchmark_check_conflicts,
    benchmark_is_board_complete,
    benchmark_fill_puzzle);
criterion_main!(benches);
