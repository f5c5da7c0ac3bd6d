//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that a cell buffer with a length other than 81 was provided
    /// where a 9x9 grid was expected, for example when deserializing.
    InvalidDimensions,

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid in question. This is the case if they are greater than
    /// or equal to 9.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to fill a grid whose
    /// present digits admit no valid completion.
    UnsatisfiableGrid
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "cell buffer does not describe a 9x9 grid"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range [1, 9]"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            SudokuError::UnsatisfiableGrid =>
                write!(f, "grid has no valid completion")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas) is
    /// not 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
