//! Merge module - sliding and merging tiles
//!
//! Every move reduces to one primitive: collapse a single line toward index 0.
//! Rows are collapsed for `Left`/`Right` and columns for `Up`/`Down`; the grid
//! is transformed first so the collapse is always "toward index 0", then
//! transformed back:
//!
//! | direction | before collapse | after collapse |
//! |-----------|-----------------|----------------|
//! | Left      | -               | -              |
//! | Right     | reverse rows    | reverse rows   |
//! | Up        | transpose       | transpose      |
//! | Down      | transpose, reverse rows | reverse rows, transpose |
//!
//! Everything in here is pure: no RNG, no state.

use arrayvec::ArrayVec;

use crate::grid::{can_merge, Grid};
use crate::types::{Direction, Line, GRID_SIZE};

/// Slide and merge one line toward index 0.
///
/// Non-zero tiles keep their order. Scanning left to right, two equal
/// neighbours merge into their sum and both are consumed, so a tile merges at
/// most once per move and the leftmost pair wins ties. The result is padded
/// with zeros. The flag is true iff the line changed.
///
/// Tiles at `MAX_TILE` or above never merge, so any input line is accepted
/// and no sum leaves `u32`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::collapse_line;
///
/// assert_eq!(collapse_line([2, 2, 2, 2]), ([4, 4, 0, 0], true));
/// assert_eq!(collapse_line([2, 2, 2, 0]), ([4, 2, 0, 0], true));
/// assert_eq!(collapse_line([4, 2, 0, 0]), ([4, 2, 0, 0], false));
/// ```
pub fn collapse_line(line: Line) -> (Line, bool) {
    let tiles: ArrayVec<u32, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out: Line = [0; GRID_SIZE];
    let mut write = 0;
    let mut j = 0;
    while j < tiles.len() {
        if j + 1 < tiles.len() && can_merge(tiles[j], tiles[j + 1]) {
            out[write] = tiles[j] * 2;
            j += 2;
        } else {
            out[write] = tiles[j];
            j += 1;
        }
        write += 1;
    }

    (out, out != line)
}

/// Apply a move to a grid without spawning anything.
///
/// Returns the resulting grid and whether any line changed.
pub fn shift(grid: &Grid, direction: Direction) -> (Grid, bool) {
    match direction {
        Direction::Left => collapse_rows(grid),
        Direction::Right => {
            let (out, changed) = collapse_rows(&grid.reverse_rows());
            (out.reverse_rows(), changed)
        }
        Direction::Up => {
            let (out, changed) = collapse_rows(&grid.transpose());
            (out.transpose(), changed)
        }
        Direction::Down => {
            let (out, changed) = collapse_rows(&grid.transpose().reverse_rows());
            (out.reverse_rows().transpose(), changed)
        }
    }
}

/// True if moving in `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    shift(grid, direction).1
}

/// True if at least one direction would change the grid
pub fn has_any_move(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|&d| can_move(grid, d))
}

fn collapse_rows(grid: &Grid) -> (Grid, bool) {
    let mut out = *grid;
    let mut changed = false;
    for line in out.rows_mut().iter_mut() {
        let (collapsed, line_changed) = collapse_line(*line);
        *line = collapsed;
        changed |= line_changed;
    }
    (out, changed)
}
