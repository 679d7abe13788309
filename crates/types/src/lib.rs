//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types shared by the engine, the input
//! mapping and the terminal view. Nothing here depends on I/O or randomness.
//!
//! # Grid Dimensions
//!
//! The puzzle is played on a fixed square grid:
//!
//! - **Size**: 4x4 cells, indexed `(row, col)` with `(0, 0)` top-left
//! - **Empty cell**: value `0`
//! - **Tile**: a power of two from 2 up to `MAX_TILE`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Target frame rate of the presentation loop |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STATIC_REDRAW_MS` | 250 | Redraw interval while nothing changes |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, InputEvent, GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let event = InputEvent::Move(Direction::Up);
//! assert!(!event.is_quit());
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Values a freshly spawned tile may take, chosen uniformly.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Largest tile a 4x4 board can hold.
///
/// With 4s spawning, 2^17 is the highest value reachable in play. Two tiles of
/// this value never merge, so tile arithmetic stays far inside `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: usize = 2;

/// Target frame rate of the presentation loop
pub const FPS: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 1000 / FPS;

/// Minimum redraw interval for an unchanged frame
pub const STATIC_REDRAW_MS: u64 = 250;

/// Upper bound on input events consumed in a single tick.
///
/// Anything beyond this stays queued in the terminal and is picked up next tick.
pub const MAX_EVENTS_PER_TICK: usize = 16;

/// Title shown in the banner above the grid
pub const TITLE: &str = "2048 Game";

/// Value stored in a cell (0 = empty)
pub type Tile = u32;

/// One row or column of the grid, ordered for merging
pub type Line = [Tile; GRID_SIZE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FPS, 60);
        assert_eq!(TICK_MS, 16);
        assert_eq!(CELL_COUNT, 16);
    }

    #[test]
    fn spawn_values_are_powers_of_two() {
        for v in SPAWN_VALUES {
            assert!(v >= 2 && v.is_power_of_two());
            assert!(v < MAX_TILE);
        }
    }
}

/// The four directions tiles can be pushed in
///
/// The only legal input to a move. Collapsing always happens toward the
/// side the direction names: `Left` packs tiles into column 0, `Up` into row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A classified discrete input, produced once per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game
    Quit,
    /// Push the tiles in a direction
    Move(Direction),
}

impl InputEvent {
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}
