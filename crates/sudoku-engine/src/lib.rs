//! Core engine for validating and solving 9x9 Sudoku puzzles supplied
//! as 81-character strings.
//!
//! Puzzles are row-major strings of the digits `1`-`9` with `.` (or
//! `0`) for blanks. The engine exposes four operations: parsing a
//! puzzle string into a [`Grid`], serializing a grid back, checking
//! whether a candidate digit may legally occupy a cell, and solving a
//! puzzle completely with exhaustive backtracking. The surrounding
//! request layer owns field extraction and response phrasing; the
//! engine only classifies failures (see [`Error`]).
//!
//! ```
//! use sudoku_engine::{check, solve, Coordinate};
//!
//! let puzzle =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! let solution = solve(puzzle).unwrap();
//! assert_eq!(solution.len(), 81);
//!
//! let report = check(puzzle, Coordinate::new('A', 3).unwrap(), 4).unwrap();
//! assert!(report.valid);
//! ```

mod check;
mod error;
mod grid;
mod solver;

pub use check::{Axis, Coordinate, Placement};
pub use error::{Error, FormatError};
pub use grid::{Grid, Position};
pub use solver::Solver;

use log::debug;

/// Parse an 81-character puzzle string into a grid.
pub fn parse(puzzle: &str) -> Result<Grid, Error> {
    Ok(Grid::from_string(puzzle)?)
}

/// Solve a puzzle string completely, returning the 81-character
/// solution string.
///
/// Fails with [`Error::InvalidFormat`] for a malformed string and
/// [`Error::Unsolvable`] when the search finds no completion.
pub fn solve(puzzle: &str) -> Result<String, Error> {
    let grid = Grid::from_string(puzzle)?;
    let solved = Solver::new().solve(&grid).ok_or(Error::Unsolvable)?;
    debug!("solved puzzle");
    Ok(solved.to_puzzle_string())
}

/// Check a single placement against a puzzle string.
///
/// The puzzle is parsed first, so a malformed string fails with
/// [`Error::InvalidFormat`] before any placement logic runs.
pub fn check(puzzle: &str, coordinate: Coordinate, value: u8) -> Result<Placement, Error> {
    let grid = Grid::from_string(puzzle)?;
    grid.check_placement(coordinate, value)
}
