//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done by first filling an empty grid with a randomized
//! backtracking search ([Generator::generate_full]) and then clearing a
//! number of cells determined by the requested [Difficulty]
//! ([Generator::generate_puzzle]).
//!
//! Note that the generator does *not* verify that the derived puzzle has a
//! unique solution. For the cell-removal counts used here this is rare, and
//! it is accepted in exchange for cheap, predictable generation.

use crate::SudokuGrid;
use crate::checker;
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The difficulty tier of a generated puzzle. Each tier maps to a target
/// count of cells that are cleared from the solved grid, out of 81.
///
/// Serializes as the lowercase tier name (`"easy"`, `"medium"`, `"hard"`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// 35 cells are cleared, leaving 46 givens.
    Easy,

    /// 45 cells are cleared, leaving 36 givens.
    Medium,

    /// 55 cells are cleared, leaving 26 givens.
    Hard
}

impl Difficulty {

    /// The number of cells that shall be cleared from a solved grid to form
    /// a puzzle of this difficulty. Due to the bounded-attempt removal policy
    /// (see [Generator::generate_puzzle]), the actual number of cleared cells
    /// can in rare cases fall short of this target.
    pub fn cells_to_remove(self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55
        }
    }
}

/// The output of [Generator::generate_puzzle]: a playable puzzle and the
/// solved grid it was derived from. The two grids share no storage, and
/// wherever the puzzle has a digit, it equals the solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedPuzzle {

    /// The puzzle presented to the player, with some cells cleared.
    pub puzzle: SudokuGrid,

    /// The fully solved grid the puzzle was derived from.
    pub solution: SudokuGrid
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly fills Sudoku grids and derives playable puzzles from
/// them. It uses a random number generator to decide the content, which
/// allows deterministic generation from a seeded generator in tests. For most
/// cases, sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SudokuGrid::SIZE {
            return true;
        }

        let next_column = (column + 1) % SudokuGrid::SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SudokuGrid::SIZE) {
            if checker::is_number_valid(grid, column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given grid with random digits such that every row, column,
    /// and 3x3 block contains each of 1 to 9 exactly once, keeping all
    /// already present digits. Empty cells are visited in row-major order
    /// and candidate digits are tried in a freshly shuffled order per cell,
    /// so repeated calls produce different grids.
    ///
    /// If no error is returned, the grid is full and valid afterwards.
    /// Otherwise, it remains unchanged, since all speculative assignments are
    /// rolled back during backtracking.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random digits. May already contain
    /// digits, which are kept.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If there is no way to fill the
    /// empty cells without violating the Sudoku rules.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Generates a new, fully solved random grid. Since an empty grid always
    /// has a valid completion, this operation cannot fail.
    pub fn generate_full(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();
        let filled = self.fill_rec(&mut grid, 0, 0);

        // an empty grid is always solvable
        debug_assert!(filled);

        grid
    }

    fn remove_cells(&mut self, grid: &mut SudokuGrid, target: usize) {
        let attempts = target * 3;
        let mut removed = 0;

        for _ in 0..attempts {
            if removed == target {
                break;
            }

            let column = self.rng.gen_range(0..SudokuGrid::SIZE);
            let row = self.rng.gen_range(0..SudokuGrid::SIZE);

            if grid.get_cell(column, row).unwrap().is_some() {
                grid.clear_cell(column, row).unwrap();
                removed += 1;
            }
        }
    }

    /// Generates a new puzzle of the given difficulty together with its
    /// solution.
    ///
    /// A fully solved grid is generated first. Cells are then cleared at
    /// uniformly random coordinates until the difficulty's target count is
    /// reached or a budget of three times that many picks is exhausted,
    /// whichever comes first. The bounded budget means the puzzle can, in
    /// rare cases, have fewer empty cells than the target; the caller
    /// receives whatever was actually cleared.
    ///
    /// The returned puzzle and solution grids are independent copies with no
    /// shared storage.
    pub fn generate_puzzle(&mut self, difficulty: Difficulty)
            -> GeneratedPuzzle {
        let solution = self.generate_full();
        let mut puzzle = solution.clone();
        self.remove_cells(&mut puzzle, difficulty.cells_to_remove());

        GeneratedPuzzle {
            puzzle,
            solution
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn shuffling_uniformly_distributed() {
        // 18000 experiments, 6 options (3!), so if uniformly distributed:
        // p = 1/6, my = 3000, sigma = sqrt(18000 * 1/6 * 5/6) = 50
        // with a probability of the amount being in the range [2600, 3400]
        // is more than 99,9999999999999 %.

        let mut counts = [0; 6];
        let mut rng = rand::thread_rng();

        for _ in 0..18000 {
            let result = shuffle(&mut rng, 1..=3);

            if result == vec![1, 2, 3] {
                counts[0] += 1;
            }
            else if result == vec![1, 3, 2] {
                counts[1] += 1;
            }
            else if result == vec![2, 1, 3] {
                counts[2] += 1;
            }
            else if result == vec![2, 3, 1] {
                counts[3] += 1;
            }
            else if result == vec![3, 1, 2] {
                counts[4] += 1;
            }
            else if result == vec![3, 2, 1] {
                counts[5] += 1;
            }
        }

        for count in counts.iter() {
            assert!(*count >= 2600 && *count <= 3400,
                "Count is not in range [2600, 3400].");
        }
    }

    #[test]
    fn filled_grid_keeps_digits() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(1, 0, 1).unwrap();
        grid.set_cell(3, 0, 3).unwrap();
        grid.set_cell(0, 1, 2).unwrap();
        grid.set_cell(1, 2, 4).unwrap();

        let mut generator = Generator::new_default();
        generator.fill(&mut grid).unwrap();

        assert!(grid.is_full());
        assert_eq!(Some(1), grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(3, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(0, 1).unwrap());
        assert_eq!(Some(4), grid.get_cell(1, 2).unwrap());
    }

    #[test]
    fn unsatisfiable_grid_is_not_changed() {
        // (0, 0) is empty, but its row blocks 1-4, its column blocks 5-8,
        // and its block blocks 9, so no digit fits there.
        let mut grid = SudokuGrid::new();
        grid.set_cell(1, 0, 1).unwrap();
        grid.set_cell(2, 0, 2).unwrap();
        grid.set_cell(3, 0, 3).unwrap();
        grid.set_cell(4, 0, 4).unwrap();
        grid.set_cell(0, 1, 5).unwrap();
        grid.set_cell(0, 2, 6).unwrap();
        grid.set_cell(0, 3, 7).unwrap();
        grid.set_cell(0, 4, 8).unwrap();
        grid.set_cell(1, 1, 9).unwrap();

        let mut generator = Generator::new_default();
        let grid_before = grid.clone();
        let result = generator.fill(&mut grid);

        assert_eq!(Err(SudokuError::UnsatisfiableGrid), result);
        assert_eq!(grid_before, grid);
    }

    fn assert_groups_complete(grid: &SudokuGrid) {
        for row in 0..SudokuGrid::SIZE {
            let mut seen = [false; SudokuGrid::SIZE];

            for column in 0..SudokuGrid::SIZE {
                let number = grid.get_cell(column, row).unwrap().unwrap();
                assert!(!seen[number - 1], "Duplicate {} in row {}.",
                    number, row);
                seen[number - 1] = true;
            }
        }

        for column in 0..SudokuGrid::SIZE {
            let mut seen = [false; SudokuGrid::SIZE];

            for row in 0..SudokuGrid::SIZE {
                let number = grid.get_cell(column, row).unwrap().unwrap();
                assert!(!seen[number - 1], "Duplicate {} in column {}.",
                    number, column);
                seen[number - 1] = true;
            }
        }

        for block in 0..SudokuGrid::SIZE {
            let block_column =
                (block % SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;
            let block_row =
                (block / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;
            let mut seen = [false; SudokuGrid::SIZE];

            for row in block_row..(block_row + SudokuGrid::BLOCK_SIZE) {
                for column in
                        block_column..(block_column + SudokuGrid::BLOCK_SIZE) {
                    let number = grid.get_cell(column, row).unwrap().unwrap();
                    assert!(!seen[number - 1], "Duplicate {} in block {}.",
                        number, block);
                    seen[number - 1] = true;
                }
            }
        }
    }

    #[test]
    fn generated_grid_full_and_valid() {
        let mut generator = Generator::new_default();
        let grid = generator.generate_full();

        assert!(grid.is_full());
        assert_groups_complete(&grid);
    }

    #[test]
    fn generated_puzzle_consistent_with_solution() {
        let mut generator = Generator::new_default();
        let generated = generator.generate_puzzle(Difficulty::Medium);

        assert!(generated.solution.is_full());
        assert_groups_complete(&generated.solution);
        assert!(generated.puzzle.is_subset(&generated.solution));
    }

    #[test]
    fn generated_puzzle_respects_removal_target() {
        let mut generator = Generator::new_default();

        for &difficulty in
                &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let generated = generator.generate_puzzle(difficulty);
            let empty = generated.puzzle.count_empty();

            assert!(empty <= difficulty.cells_to_remove(),
                "Too many cells removed for {:?}.", difficulty);
            assert!(empty > 0, "No cells removed for {:?}.", difficulty);
        }
    }

    #[test]
    fn difficulty_removal_targets() {
        assert_eq!(35, Difficulty::Easy.cells_to_remove());
        assert_eq!(45, Difficulty::Medium.cells_to_remove());
        assert_eq!(55, Difficulty::Hard.cells_to_remove());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!("\"easy\"",
            serde_json::to_string(&Difficulty::Easy).unwrap());
        assert_eq!(Difficulty::Hard,
            serde_json::from_str::<Difficulty>("\"hard\"").unwrap());
    }
}
