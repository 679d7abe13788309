//! Grid module - the 4x4 tile matrix
//!
//! Cells are stored row-major as `[[Tile; 4]; 4]`. A value of 0 is an empty
//! cell, anything else is a tile whose value is a power of two in
//! `2..=MAX_TILE`.
//! Coordinates are `(row, col)` with `(0, 0)` at the top-left.
//!
//! The transforms here (`transpose`, `reverse_rows`) return new grids rather
//! than rewriting in place, so a move can be expressed as
//! transform -> collapse -> inverse transform without aliasing.

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Tile, CELL_COUNT, GRID_SIZE, MAX_TILE};

/// Rejected input when building a grid from external rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two in 2..=131072")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// The game grid - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an all-empty grid
    pub const fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from rows, checking that every non-zero value is a valid tile
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[[Tile; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Number of non-empty cells
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col][row] = self.cells[row][col];
            }
        }
        out
    }

    /// Mirror every row left-to-right
    pub fn reverse_rows(&self) -> Self {
        let mut out = *self;
        for line in &mut out.cells {
            line.reverse();
        }
        out
    }

    /// True if two horizontally or vertically neighbouring cells could merge.
    ///
    /// Empty cells count too; callers that care only about tiles check
    /// `is_full` first.
    pub fn has_mergeable_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[row][col];
                if col + 1 < GRID_SIZE && can_merge(v, self.cells[row][col + 1]) {
                    return true;
                }
                if row + 1 < GRID_SIZE && can_merge(v, self.cells[row + 1][col]) {
                    return true;
                }
            }
        }
        false
    }

    /// True if every non-zero cell is a valid tile
    pub fn is_well_formed(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&v| v == 0 || is_valid_tile(v))
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[Tile; GRID_SIZE]; GRID_SIZE] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &v) in line.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
        }
        Ok(())
    }
}

/// A tile value is a power of two between 2 and `MAX_TILE`
pub fn is_valid_tile(value: Tile) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

/// Two values merge when they are equal and their sum stays within `MAX_TILE`
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a < MAX_TILE
}
