//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board engine for the 4x4 sliding-tile puzzle. It has
//! **no dependencies** on the terminal, input handling or timing:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The merge primitive and every transform are pure functions
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix with transforms and adjacency checks
//! - [`merge`]: `collapse_line` and the per-direction `shift`
//! - [`spawn`]: random tile placement (2 or 4, even odds)
//! - [`game_state`]: the state machine: moves, spawning, game over
//! - [`snapshot`]: plain copyable view for renderers
//!
//! # Rules
//!
//! - A move slides every tile as far as it goes toward one side
//! - Two equal tiles that meet merge into one of double value, once per move
//! - A move that changes the grid spawns exactly one new tile
//! - A move that changes nothing on a full grid with no equal neighbours ends the game
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Grid};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut game = GameState::from_grid(grid, 12345);
//!
//! assert!(game.make_move(Direction::Left));
//! assert_eq!(game.grid().get(0, 0), Some(4));
//! assert_eq!(game.grid().count_tiles(), 2); // merged tile + one spawn
//! assert!(!game.game_over());
//! ```

pub mod game_state;
pub mod grid;
pub mod merge;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{is_terminal, GameState};
pub use grid::{can_merge, is_valid_tile, Grid, GridError};
pub use merge::{can_move, collapse_line, has_any_move, shift};
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_tile, Spawned};
