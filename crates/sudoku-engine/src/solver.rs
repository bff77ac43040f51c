use log::debug;

use crate::grid::{Grid, Position};

/// Exhaustive backtracking solver.
///
/// Stateless: one instance can serve any number of independent calls,
/// and each call works on its own copy of the grid, so nothing here
/// stands in the way of the caller wrapping a solve in its own timeout
/// boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve into a fresh grid, leaving the input untouched.
    ///
    /// Returns `None` when no completion exists. Contradictory givens
    /// are not pre-checked; they simply exhaust the search. When
    /// multiple completions exist, the ascending-digit, row-major
    /// search order makes the result the lexicographically first one.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if self.solve_from(&mut working, 0) {
            Some(working)
        } else {
            debug!("search exhausted without a completion");
            None
        }
    }

    /// Depth-first over cells in row-major order (index 0..81), digits
    /// tried ascending. Dead ends reset the cell to blank before
    /// backtracking.
    fn solve_from(&self, grid: &mut Grid, index: usize) -> bool {
        if index == 81 {
            return true;
        }

        let pos = Position::new(index / 9, index % 9);
        if grid.get(pos) != 0 {
            return self.solve_from(grid, index + 1);
        }

        for value in 1..=9 {
            if self.candidate_fits(grid, pos, value) {
                grid.set(pos, value);
                if self.solve_from(grid, index + 1) {
                    return true;
                }
            }
        }

        grid.set(pos, 0);
        false
    }

    /// Standard Sudoku membership test for a blank cell: the value must
    /// appear nowhere in the cell's row, column, or 3x3 region.
    fn candidate_fits(&self, grid: &Grid, pos: Position, value: u8) -> bool {
        for i in 0..9 {
            if grid.get(Position::new(pos.row, i)) == value {
                return false;
            }
            if grid.get(Position::new(i, pos.col)) == value {
                return false;
            }
        }

        let start_row = pos.row - pos.row % 3;
        let start_col = pos.col - pos.col % 3;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                if grid.get(Position::new(row, col)) == value {
                    return false;
                }
            }
        }

        true
    }
}
