//! Spawn module - placing new tiles
//!
//! A new tile goes into an empty cell chosen uniformly at random. Its value is
//! drawn uniformly from [`SPAWN_VALUES`] (2 or 4, even odds). A full grid is a
//! silent no-op.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{Tile, SPAWN_VALUES};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Place one new tile into a random empty cell.
///
/// Returns `None` when the grid has no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawned> {
    let empty = grid.empty_cells();
    let &(row, col) = empty.choose(rng)?;
    let value = *SPAWN_VALUES.choose(rng)?;
    grid.set(row, col, value);
    Some(Spawned { row, col, value })
}
