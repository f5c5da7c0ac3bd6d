// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

//! This crate implements the engine of a single-player Sudoku game. It
//! supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Generating a fully solved 9x9 grid using randomized backtracking
//! * Deriving a playable puzzle from a solved grid according to a difficulty
//! tier
//! * Detecting rule violations (conflicts) and completion while a player
//! fills in the grid
//! * Modelling a resumable game session, including candidate notes
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     2, , , , , , , , ,\
//!      , ,3, , , , , , ,\
//!      , , , , ,4, , , ,\
//!      , , , , , , , , ,\
//!      ,1, , , , , , , ,\
//!      , , , , , , ,5, ,\
//!      , , , , , , , , ,\
//!      , , ,7, , , , , ,\
//!      , , , , , , , ,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first fills an empty grid with random
//! digits that satisfy the Sudoku rules and then clears a number of cells
//! determined by the requested [Difficulty](generator::Difficulty). The
//! result is a pair of independent puzzle and solution grids.
//!
//! ```
//! use sudoku_engine::generator::{Difficulty, Generator};
//!
//! // new_default yields a generator backed by rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let generated = generator.generate_puzzle(Difficulty::Easy);
//!
//! // Wherever the puzzle has a digit, it agrees with the solution.
//! assert!(generated.puzzle.is_subset(&generated.solution));
//! assert!(generated.solution.is_full());
//! ```
//!
//! # Checking grids during play
//!
//! While the player fills in cells, the [checker] module determines which
//! cells are in conflict with the cell they last changed and whether the
//! board matches the solution.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::checker;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 3).unwrap();
//! grid.set_cell(5, 0, 3).unwrap();
//!
//! let report = checker::check_conflicts(&grid, 5, 0).unwrap();
//! assert!(report.has_conflict());
//! assert_eq!(&[(0, 0)], report.conflicts());
//! ```
//!
//! # Game sessions
//!
//! The [session] module contains the state of one game: the live board, the
//! reference solution, the initial puzzle snapshot that distinguishes fixed
//! givens from player-editable cells, and the player's candidate notes. All
//! of it serializes with [serde](https://serde.rs/), so an embedding
//! application can persist and resume a session.

pub mod checker;
pub mod error;
pub mod generator;
pub mod session;


#[cfg(test)]
mod random_tests;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A Sudoku grid is a square of 9x9 cells, organized into nine non-overlapping
/// 3x3 blocks. Each cell may or may not be occupied by a number from 1 to 9.
///
/// The grid is always exactly 9x9 and is never resized. Cells are addressed
/// by `(column, row)` coordinates, both in the range `[0, 9[`, and stored in
/// row-major order.
///
/// `SudokuGrid` serializes as its flat cell buffer. Deserialization fails if
/// the buffer does not contain exactly 81 cells with values in `[1, 9]`.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(into = "Vec<Option<usize>>", try_from = "Vec<Option<usize>>")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SudokuGrid::SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % SudokuGrid::BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SudokuGrid::SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % SudokuGrid::BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SudokuGrid::SIZE + column
}

impl SudokuGrid {

    /// The number of cells in each row and column of the grid.
    pub const SIZE: usize = 9;

    /// The width and height of each of the nine sub-blocks of the grid.
    pub const BLOCK_SIZE: usize = 3;

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SudokuGrid::SIZE * SudokuGrid::SIZE]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a number from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `5, , , ,1, , , , ,` followed by eight further rows of nine entries
    /// each parses to a grid whose top row contains a 5 in the first and a 1
    /// in the fifth cell.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != SudokuGrid::SIZE * SudokuGrid::SIZE {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SudokuGrid::SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Counts the number of empty cells in this grid. This is always 81 minus
    /// [SudokuGrid::count_clues].
    pub fn count_empty(&self) -> usize {
        self.cells.len() - self.count_clues()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for Vec<Option<usize>> {
    fn from(grid: SudokuGrid) -> Vec<Option<usize>> {
        grid.cells
    }
}

impl TryFrom<Vec<Option<usize>>> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(cells: Vec<Option<usize>>) -> SudokuResult<SudokuGrid> {
        if cells.len() != SudokuGrid::SIZE * SudokuGrid::SIZE {
            return Err(SudokuError::InvalidDimensions);
        }

        for cell in &cells {
            if let Some(number) = cell {
                if *number == 0 || *number > SudokuGrid::SIZE {
                    return Err(SudokuError::InvalidNumber);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }
}
