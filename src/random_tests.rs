//! Randomized tests exercising generation and checking together. The
//! deterministic counterparts live in the `fix_tests` module.

use crate::SudokuGrid;
use crate::checker;
use crate::generator::{Difficulty, Generator};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 30;

const ALL_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

fn assert_valid_solution(grid: &SudokuGrid) {
    assert!(grid.is_full());

    for row in 0..SudokuGrid::SIZE {
        for column in 0..SudokuGrid::SIZE {
            let report =
                checker::check_conflicts(grid, column, row).unwrap();
            assert!(!report.has_conflict(),
                "Generated solution has a conflict at ({}, {}).",
                column, row);
        }
    }
}

#[test]
fn generated_solutions_are_valid() {
    let mut generator = Generator::new_default();

    for _ in 0..ITERATIONS_PER_RUN {
        assert_valid_solution(&generator.generate_full());
    }
}

#[test]
fn generated_solutions_vary() {
    let mut generator = Generator::new_default();
    let first = generator.generate_full();

    // 9! orders per cell make a repeated grid astronomically unlikely
    let repeated = (0..ITERATIONS_PER_RUN)
        .map(|_| generator.generate_full())
        .all(|grid| grid == first);
    assert!(!repeated, "All generated grids were identical.");
}

#[test]
fn generated_puzzles_are_consistent() {
    let mut generator = Generator::new_default();

    for &difficulty in &ALL_DIFFICULTIES {
        for _ in 0..ITERATIONS_PER_RUN {
            let generated = generator.generate_puzzle(difficulty);

            assert_valid_solution(&generated.solution);
            assert!(generated.puzzle.is_subset(&generated.solution));
            assert!(generated.puzzle.count_empty() <=
                difficulty.cells_to_remove());
        }
    }
}

#[test]
fn removal_reaches_target() {
    // The removal budget of 3x the target makes falling short possible in
    // principle, but so unlikely that asserting the exact target here is
    // safe (the expected number of picks to reach even the hard target is
    // about 91 of the budgeted 165).

    let mut generator = Generator::new_default();

    for &difficulty in &ALL_DIFFICULTIES {
        let generated = generator.generate_puzzle(difficulty);

        assert_eq!(difficulty.cells_to_remove(),
            generated.puzzle.count_empty());
    }
}

#[test]
fn generated_puzzles_are_solvable() {
    let mut generator = Generator::new_default();

    for _ in 0..ITERATIONS_PER_RUN {
        let generated = generator.generate_puzzle(Difficulty::Hard);
        let mut grid = generated.puzzle;
        generator.fill(&mut grid).unwrap();
        assert_valid_solution(&grid);
    }
}

#[test]
fn same_seed_generates_same_puzzle() {
    let mut generator_a = Generator::new(ChaCha8Rng::seed_from_u64(42));
    let mut generator_b = Generator::new(ChaCha8Rng::seed_from_u64(42));

    let generated_a = generator_a.generate_puzzle(Difficulty::Medium);
    let generated_b = generator_b.generate_puzzle(Difficulty::Medium);

    assert_eq!(generated_a, generated_b);
}

#[test]
fn different_seeds_generate_different_solutions() {
    let mut generator_a = Generator::new(ChaCha8Rng::seed_from_u64(1));
    let mut generator_b = Generator::new(ChaCha8Rng::seed_from_u64(2));

    assert_ne!(generator_a.generate_full(), generator_b.generate_full());
}

#[test]
fn conflicts_are_symmetric_on_random_boards() {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));

    for _ in 0..ITERATIONS_PER_RUN {
        let generated = generator.generate_puzzle(Difficulty::Medium);
        let mut board = generated.puzzle;

        // sabotage the board with a duplicate of the top-left solution
        // digit to guarantee some conflicts exist
        let number = generated.solution.get_cell(0, 0).unwrap().unwrap();
        board.set_cell(0, 0, number).unwrap();
        board.set_cell(5, 0, number).unwrap();

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                let report =
                    checker::check_conflicts(&board, column, row).unwrap();

                for &(other_column, other_row) in report.conflicts() {
                    let other_report = checker::check_conflicts(&board,
                        other_column, other_row).unwrap();

                    assert!(other_report.conflicts()
                            .contains(&(column, row)),
                        "Conflict of ({}, {}) with ({}, {}) is one-sided.",
                        column, row, other_column, other_row);
                }
            }
        }
    }
}
