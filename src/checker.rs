//! This module contains the logic for checking Sudoku grids during play.
//!
//! Two questions are answered here: which other cells a given cell is in
//! conflict with ([check_conflicts]), and whether the board matches the
//! reference solution ([is_board_complete]). Both are pure functions over the
//! grids passed in; nothing is cached between calls.
//!
//! Conflict checking is a *single-cell* operation. To highlight all conflicts
//! on a board, the calling layer invokes it once per occupied cell and unions
//! the results, as [GameState::conflict_cells](crate::session::GameState::conflict_cells)
//! does.

use crate::SudokuGrid;
use crate::error::{SudokuError, SudokuResult};

/// The result of a [check_conflicts] call: the cells that hold the same
/// number as the checked cell and share a row, column, or block with it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConflictReport {
    conflicts: Vec<(usize, usize)>
}

impl ConflictReport {

    /// Indicates whether any conflicting cell was found.
    pub fn has_conflict(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// The coordinates of all conflicting cells in the form `(column, row)`.
    /// Each coordinate appears at most once, even if the cell shares both a
    /// line and a block with the checked cell, and the checked cell itself is
    /// never included.
    pub fn conflicts(&self) -> &[(usize, usize)] {
        &self.conflicts
    }
}

/// Determines all cells that are in conflict with the cell at the given
/// position. A conflict is another cell holding the same number in the same
/// row, the same column, or the same 3x3 block.
///
/// If the checked cell is empty, the report contains no conflicts, no matter
/// what duplicates exist elsewhere on the board.
///
/// # Arguments
///
/// * `grid`: The grid in which to search for conflicts.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn check_conflicts(grid: &SudokuGrid, column: usize, row: usize)
        -> SudokuResult<ConflictReport> {
    let value = match grid.get_cell(column, row)? {
        Some(value) => value,
        None => return Ok(ConflictReport {
            conflicts: Vec::new()
        })
    };

    let mut conflicts = Vec::new();

    for other_column in 0..SudokuGrid::SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, value).unwrap() {
            conflicts.push((other_column, row));
        }
    }

    for other_row in 0..SudokuGrid::SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, value).unwrap() {
            conflicts.push((column, other_row));
        }
    }

    let block_column = (column / SudokuGrid::BLOCK_SIZE) *
        SudokuGrid::BLOCK_SIZE;
    let block_row = (row / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;

    for other_row in block_row..(block_row + SudokuGrid::BLOCK_SIZE) {
        for other_column in
                block_column..(block_column + SudokuGrid::BLOCK_SIZE) {
            // cells sharing the line with the checked cell were already
            // collected by the scans above
            if (other_column != column || other_row != row) &&
                    grid.has_number(other_column, other_row, value).unwrap() &&
                    !conflicts.contains(&(other_column, other_row)) {
                conflicts.push((other_column, other_row));
            }
        }
    }

    Ok(ConflictReport {
        conflicts
    })
}

/// Indicates whether the given `number` could be placed in the cell at the
/// specified position without duplicating a number in the same row, column,
/// or 3x3 block. The content of the checked cell itself is ignored, so a
/// number may be re-validated in its own cell.
///
/// This is the candidate check used by the backtracking fill in the
/// [generator](crate::generator) module. It does *not* decide whether the
/// number appears at that position in any actual solution.
///
/// # Arguments
///
/// * `grid`: The grid into which the number shall be placed.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The number to check. Must be in the range `[1, 9]`.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `column` or `row` are not in the
/// specified range.
/// * `SudokuError::InvalidNumber` If `number` is not in the specified range.
pub fn is_number_valid(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> SudokuResult<bool> {
    if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    if number == 0 || number > SudokuGrid::SIZE {
        return Err(SudokuError::InvalidNumber);
    }

    for other_column in 0..SudokuGrid::SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return Ok(false);
        }
    }

    for other_row in 0..SudokuGrid::SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return Ok(false);
        }
    }

    let block_column = (column / SudokuGrid::BLOCK_SIZE) *
        SudokuGrid::BLOCK_SIZE;
    let block_row = (row / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;

    for other_row in block_row..(block_row + SudokuGrid::BLOCK_SIZE) {
        for other_column in
                block_column..(block_column + SudokuGrid::BLOCK_SIZE) {
            if (other_column != column || other_row != row) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Indicates whether the given board exactly matches the given solution, that
/// is, every one of the 81 cells of `board` holds the same content as the
/// corresponding cell of `solution`. A board that is full but differs from
/// the solution in any cell does *not* count as complete.
pub fn is_board_complete(board: &SudokuGrid, solution: &SudokuGrid) -> bool {
    board.cells().iter()
        .zip(solution.cells().iter())
        .all(|(board_cell, solution_cell)| board_cell == solution_cell)
}
