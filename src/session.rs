//! This module models the state of one game session.
//!
//! A [GameState] holds the live board, the reference solution, an immutable
//! snapshot of the puzzle as it was generated (used to distinguish fixed
//! givens from player-editable cells), and the player's candidate notes. All
//! of it serializes with serde, so an embedding application can persist the
//! session under [STORAGE_KEY] on every change and resume it on launch.
//!
//! The engine does not perform any I/O itself. If the embedder fails to load
//! a saved session, it should simply start without one; if saving fails, the
//! session continues in memory.

use crate::SudokuGrid;
use crate::checker;
use crate::error::{SudokuError, SudokuResult};
use crate::generator::{Difficulty, GeneratedPuzzle};

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::convert::TryFrom;

/// The key under which the embedding application is expected to persist the
/// serialized [GameState].
pub const STORAGE_KEY: &str = "sudoku-game-state";

/// A 9x9 grid of candidate-digit notes. Each cell holds a set of digits from
/// 1 to 9 that the player has marked as possible for that cell. The note
/// layer is a pure annotation: it is neither read nor written by the
/// generator or checker.
///
/// Notes serialize as per-cell arrays of integers in row-major order and are
/// reconstructed into sets when deserialized.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(into = "Vec<BTreeSet<usize>>", try_from = "Vec<BTreeSet<usize>>")]
pub struct NoteGrid {
    cells: Vec<BTreeSet<usize>>
}

impl NoteGrid {

    /// Creates a new note grid in which every cell has an empty note set.
    pub fn new() -> NoteGrid {
        NoteGrid {
            cells: vec![BTreeSet::new();
                SudokuGrid::SIZE * SudokuGrid::SIZE]
        }
    }

    /// Gets the note set of the cell at the specified position.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn notes(&self, column: usize, row: usize)
            -> SudokuResult<&BTreeSet<usize>> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(&self.cells[crate::index(column, row)])
        }
    }

    /// Toggles the given candidate number in the note set of the specified
    /// cell: if it is present, it is removed, otherwise it is added.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, 9]`.
    pub fn toggle(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        let notes = &mut self.cells[crate::index(column, row)];

        if !notes.remove(&number) {
            notes.insert(number);
        }

        Ok(())
    }

    /// Removes all candidate numbers from the note set of the specified
    /// cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, column: usize, row: usize) -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[crate::index(column, row)].clear();
        Ok(())
    }
}

impl Default for NoteGrid {
    fn default() -> NoteGrid {
        NoteGrid::new()
    }
}

impl From<NoteGrid> for Vec<BTreeSet<usize>> {
    fn from(grid: NoteGrid) -> Vec<BTreeSet<usize>> {
        grid.cells
    }
}

impl TryFrom<Vec<BTreeSet<usize>>> for NoteGrid {
    type Error = SudokuError;

    fn try_from(cells: Vec<BTreeSet<usize>>) -> SudokuResult<NoteGrid> {
        if cells.len() != SudokuGrid::SIZE * SudokuGrid::SIZE {
            return Err(SudokuError::InvalidDimensions);
        }

        for notes in &cells {
            for &number in notes {
                if number == 0 || number > SudokuGrid::SIZE {
                    return Err(SudokuError::InvalidNumber);
                }
            }
        }

        Ok(NoteGrid {
            cells
        })
    }
}

/// The complete state of one game session. The solution and the
/// initial-puzzle snapshot are fixed for the life of the session; only the
/// board, the notes, and the player-facing flags change.
///
/// Serializes with camelCase field names (`initialBoard`, `isNoteMode`,
/// ...), keyed by [STORAGE_KEY] in the embedding application's store.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {

    /// The live board the player fills in.
    pub board: SudokuGrid,

    /// The solved grid the puzzle was derived from.
    pub solution: SudokuGrid,

    /// The puzzle as generated. Cells that are non-empty here are fixed
    /// givens and must not be edited by the player.
    pub initial_board: SudokuGrid,

    /// The player's candidate notes.
    pub notes: NoteGrid,

    /// The currently selected cell as `(column, row)`, if any.
    pub selected_cell: Option<(usize, usize)>,

    /// Whether number entry currently toggles notes instead of placing
    /// digits.
    pub is_note_mode: bool,

    /// The difficulty the puzzle was generated with.
    pub difficulty: Difficulty,

    /// The time at which the session was started, in milliseconds since the
    /// Unix epoch. Provided by the embedder, since the engine does not read
    /// clocks.
    pub start_time: u64,

    /// The number of mistakes the embedder has recorded for this session.
    pub mistakes: u32
}

impl GameState {

    /// Creates the state of a fresh session from a generated puzzle. The
    /// board and the initial snapshot both start as copies of the puzzle,
    /// the notes are empty, no cell is selected, and note mode is off.
    ///
    /// # Arguments
    ///
    /// * `difficulty`: The difficulty `generated` was generated with.
    /// * `generated`: The puzzle/solution pair for this session.
    /// * `start_time`: The current time in milliseconds since the Unix
    /// epoch, as observed by the embedder.
    pub fn new(difficulty: Difficulty, generated: GeneratedPuzzle,
            start_time: u64) -> GameState {
        let GeneratedPuzzle { puzzle, solution } = generated;

        GameState {
            board: puzzle.clone(),
            solution,
            initial_board: puzzle,
            notes: NoteGrid::new(),
            selected_cell: None,
            is_note_mode: false,
            difficulty,
            start_time,
            mistakes: 0
        }
    }

    /// Indicates whether the cell at the specified position is a fixed given
    /// of the puzzle, i.e. was non-empty in the initial snapshot. Given
    /// cells reject selection, entry, and clearing.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        Ok(self.initial_board.get_cell(column, row)?.is_some())
    }

    /// Selects the cell at the specified position, if it is not a given.
    /// Returns whether the selection changed.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn select_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if self.is_given(column, row)? {
            return Ok(false);
        }

        self.selected_cell = Some((column, row));
        Ok(true)
    }

    /// Toggles between note entry and digit entry.
    pub fn toggle_note_mode(&mut self) {
        self.is_note_mode = !self.is_note_mode;
    }

    /// Enters the given number at the specified position. In note mode, the
    /// number is toggled in the cell's note set; otherwise it is written to
    /// the board and the cell's notes are cleared. Given cells are left
    /// untouched.
    ///
    /// Returns whether the state changed, i.e. `false` exactly if the cell
    /// is a given.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, 9]`.
    pub fn enter_number(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if number == 0 || number > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        if self.is_given(column, row)? {
            return Ok(false);
        }

        if self.is_note_mode {
            self.notes.toggle(column, row, number)?;
        }
        else {
            self.board.set_cell(column, row, number)?;
            self.notes.clear(column, row)?;
        }

        Ok(true)
    }

    /// Clears the player-entered digit and the notes at the specified
    /// position. Given cells are left untouched.
    ///
    /// Returns whether the state changed, i.e. `false` exactly if the cell
    /// is a given.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_number(&mut self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if self.is_given(column, row)? {
            return Ok(false);
        }

        self.board.clear_cell(column, row)?;
        self.notes.clear(column, row)?;
        Ok(true)
    }

    /// Computes the set of all cells that are currently involved in a
    /// conflict, by checking every occupied cell of the board and unioning
    /// the per-cell results of
    /// [check_conflicts](crate::checker::check_conflicts). Cells are given
    /// as `(column, row)`. This set is recomputed from scratch on every
    /// call; it is intended to be rebuilt after each board mutation.
    pub fn conflict_cells(&self) -> BTreeSet<(usize, usize)> {
        let mut conflict_cells = BTreeSet::new();

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if self.board.get_cell(column, row).unwrap().is_none() {
                    continue;
                }

                let report =
                    checker::check_conflicts(&self.board, column, row)
                        .unwrap();

                if report.has_conflict() {
                    conflict_cells.insert((column, row));

                    for &conflict in report.conflicts() {
                        conflict_cells.insert(conflict);
                    }
                }
            }
        }

        conflict_cells
    }

    /// Indicates whether the board exactly matches the solution, which is
    /// the win condition of the session.
    pub fn is_complete(&self) -> bool {
        checker::is_board_complete(&self.board, &self.solution)
    }
}
