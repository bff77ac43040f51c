//! Placement checking: coordinate resolution plus the per-axis legality
//! checks behind the service's check endpoint.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::{Grid, Position};

/// An external board coordinate: row letter `A`-`I` (case-insensitive)
/// plus column number 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Resolve a row letter and column number into a coordinate.
    ///
    /// The caller is expected to have validated the lexical format
    /// already; anything outside `A`-`I` / 1-9 is still rejected here.
    pub fn new(row_letter: char, column: u8) -> Result<Self, Error> {
        let letter = row_letter.to_ascii_uppercase();
        if !('A'..='I').contains(&letter) {
            return Err(Error::InvalidCoordinate);
        }
        if !(1..=9).contains(&column) {
            return Err(Error::InvalidCoordinate);
        }
        Ok(Self {
            row: letter as u8 - b'A' + 1,
            column,
        })
    }

    /// Row number 1-9 (A=1 ... I=9).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column number 1-9.
    pub fn column(&self) -> u8 {
        self.column
    }

    pub(crate) fn position(&self) -> Position {
        Position::new(usize::from(self.row) - 1, usize::from(self.column) - 1)
    }
}

/// A constraint axis a placement can conflict with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
    Region,
}

/// Outcome of a placement check, shaped for the service's response
/// payload: the `conflict` list is omitted entirely when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub valid: bool,
    #[serde(rename = "conflict", default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Axis>,
}

impl Placement {
    fn valid() -> Self {
        Self {
            valid: true,
            conflicts: Vec::new(),
        }
    }
}

impl Grid {
    /// True when the target cell already holds exactly this value.
    ///
    /// Takes priority over every axis check: the proposal restates what
    /// the puzzle already contains, so the combined result is valid no
    /// matter what the axes say.
    pub fn already_placed(&self, coordinate: Coordinate, value: u8) -> bool {
        self.get(coordinate.position()) == value
    }

    /// Row legality. An occupied target cell is never a legal target,
    /// even when it holds the proposed value; only [`already_placed`]
    /// short-circuits that case.
    ///
    /// [`already_placed`]: Grid::already_placed
    pub fn row_allows(&self, coordinate: Coordinate, value: u8) -> bool {
        let pos = coordinate.position();
        if self.get(pos) != 0 {
            return false;
        }
        (0..9).all(|col| self.get(Position::new(pos.row, col)) != value)
    }

    /// Column legality, same rule as [`row_allows`].
    ///
    /// [`row_allows`]: Grid::row_allows
    pub fn column_allows(&self, coordinate: Coordinate, value: u8) -> bool {
        let pos = coordinate.position();
        if self.get(pos) != 0 {
            return false;
        }
        (0..9).all(|row| self.get(Position::new(row, pos.col)) != value)
    }

    /// Region legality for the 3x3 region containing the coordinate.
    /// The region origin floors to the 3-aligned boundary, so rows 1-3
    /// share an origin, as do 4-6 and 7-9 (and the same for columns).
    pub fn region_allows(&self, coordinate: Coordinate, value: u8) -> bool {
        let pos = coordinate.position();
        if self.get(pos) != 0 {
            return false;
        }
        let start_row = pos.row - pos.row % 3;
        let start_col = pos.col - pos.col % 3;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                if self.get(Position::new(row, col)) == value {
                    return false;
                }
            }
        }
        true
    }

    /// Combined placement check.
    ///
    /// Already-placed wins outright; otherwise the placement is valid
    /// iff all three axes allow it, with failures reported in fixed
    /// row, column, region order. The two layers are deliberately kept
    /// separate: the axis checks treat any occupied cell as illegal.
    pub fn check_placement(&self, coordinate: Coordinate, value: u8) -> Result<Placement, Error> {
        if !(1..=9).contains(&value) {
            return Err(Error::InvalidValue(value));
        }

        if self.already_placed(coordinate, value) {
            return Ok(Placement::valid());
        }

        let mut conflicts = Vec::new();
        if !self.row_allows(coordinate, value) {
            conflicts.push(Axis::Row);
        }
        if !self.column_allows(coordinate, value) {
            conflicts.push(Axis::Column);
        }
        if !self.region_allows(coordinate, value) {
            conflicts.push(Axis::Region);
        }

        Ok(Placement {
            valid: conflicts.is_empty(),
            conflicts,
        })
    }
}
