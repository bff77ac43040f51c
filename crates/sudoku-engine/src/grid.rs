use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A cell position on the board (0-indexed row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A 9x9 Sudoku board. Cells hold digits 1-9, with 0 marking a blank.
///
/// A grid is built fresh from a puzzle string at the start of each call
/// and owned by that call; nothing in the engine shares or caches one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Parse an 81-character puzzle string in row-major order.
    ///
    /// Accepted characters are `1`-`9` for givens and `.` or `0` for
    /// blanks. Anything else, or any other length, is a format error.
    pub fn from_string(puzzle: &str) -> Result<Self, FormatError> {
        let len = puzzle.chars().count();
        if len != 81 {
            return Err(FormatError::WrongLength(len));
        }

        let mut cells = [[0u8; 9]; 9];
        for (i, c) in puzzle.chars().enumerate() {
            let value = match c {
                '.' => 0,
                '0'..='9' => c as u8 - b'0',
                other => return Err(FormatError::InvalidCharacter(other)),
            };
            cells[i / 9][i % 9] = value;
        }

        Ok(Self { cells })
    }

    /// Serialize back to the 81-character form: rows concatenated in
    /// order, blanks as `.`, no separators.
    pub fn to_puzzle_string(&self) -> String {
        let mut out = String::with_capacity(81);
        for row in &self.cells {
            for &value in row {
                out.push(if value == 0 {
                    '.'
                } else {
                    (b'0' + value) as char
                });
            }
        }
        out
    }

    /// Value at a position, 0 for blank.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// True when no cell is blank.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_puzzle_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn parse_then_serialize_is_identity() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.to_puzzle_string(), PUZZLE);
        assert_eq!(Grid::from_string(&grid.to_puzzle_string()).unwrap(), grid);
    }

    #[test]
    fn zero_and_dot_both_parse_as_blank() {
        let zeros =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let with_zeros = Grid::from_string(zeros).unwrap();
        let with_dots = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(with_zeros, with_dots);
        // Serialization always emits the canonical '.' blank.
        assert_eq!(with_zeros.to_puzzle_string(), PUZZLE);
    }

    #[test]
    fn rejects_wrong_length() {
        let long = format!("{PUZZLE}123");
        assert_eq!(
            Grid::from_string(&long),
            Err(FormatError::WrongLength(84))
        );
        assert_eq!(Grid::from_string(""), Err(FormatError::WrongLength(0)));
        assert_eq!(
            Grid::from_string(&PUZZLE[..80]),
            Err(FormatError::WrongLength(80))
        );
    }

    #[test]
    fn rejects_invalid_characters() {
        let bad = PUZZLE.replacen('.', "A", 1);
        assert_eq!(
            Grid::from_string(&bad),
            Err(FormatError::InvalidCharacter('A'))
        );
    }

    #[test]
    fn cell_access_is_row_major() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(0, 2)), 0);
        assert_eq!(grid.get(Position::new(1, 3)), 1);
        assert_eq!(grid.get(Position::new(8, 8)), 9);
    }

    #[test]
    fn completeness_tracks_blanks() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert!(!grid.is_complete());

        let solved =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        assert!(Grid::from_string(solved).unwrap().is_complete());
    }

    #[test]
    fn display_matches_puzzle_string() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.to_string(), PUZZLE);
    }
}
