//! Game state module - the puzzle's state machine
//!
//! Ties together the grid, the spawn policy and terminal detection. A state
//! starts with two tiles and changes only through [`GameState::make_move`].
//! Once `game_over` is set it stays set.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::merge::shift;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_tile, Spawned};
use crate::types::{Direction, INITIAL_TILES};

/// True if no move in any direction could change the grid.
///
/// That is the case exactly when the grid is full and no two horizontally or
/// vertically adjacent tiles can merge.
pub fn is_terminal(grid: &Grid) -> bool {
    grid.is_full() && !grid.has_mergeable_pair()
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    game_over: bool,
    /// Successful moves so far.
    moves: u32,
    rng: SmallRng,
}

impl GameState {
    /// Start a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::start(SmallRng::seed_from_u64(seed))
    }

    /// Start a new game seeded from the OS
    pub fn from_entropy() -> Self {
        Self::start(SmallRng::from_entropy())
    }

    /// Wrap an existing grid without spawning anything
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rng: SmallRng) -> Self {
        Self {
            grid,
            game_over: false,
            moves: 0,
            rng,
        }
    }

    fn start(rng: SmallRng) -> Self {
        let mut state = Self::with_rng(Grid::new(), rng);
        for _ in 0..INITIAL_TILES {
            state.spawn_tile();
        }
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Place one new tile using this game's RNG
    pub fn spawn_tile(&mut self) -> Option<Spawned> {
        let spawned = spawn_tile(&mut self.grid, &mut self.rng);
        match spawned {
            Some(s) => debug!("spawned {} at ({}, {})", s.value, s.row, s.col),
            None => debug!("spawn skipped: grid is full"),
        }
        spawned
    }

    /// Push every tile in `direction`.
    ///
    /// When the grid changes, exactly one new tile is spawned. When it does
    /// not, the grid is checked for a terminal position. Calls after game
    /// over leave the state untouched. Returns whether the grid changed.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let (next, changed) = shift(&self.grid, direction);
        if changed {
            self.grid = next;
            self.moves += 1;
            self.spawn_tile();
        } else if is_terminal(&self.grid) {
            self.game_over = true;
            info!(
                "game over after {} moves, max tile {}",
                self.moves,
                self.grid.max_tile()
            );
        }

        changed
    }

    /// Create a snapshot for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.game_over = self.game_over;
        out.moves = self.moves;
        out.max_tile = self.grid.max_tile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn checkerboard() -> Grid {
        let mut rows = [[0; 4]; 4];
        for (r, line) in rows.iter_mut().enumerate() {
            for (c, cell) in line.iter_mut().enumerate() {
                *cell = if (r + c) % 2 == 0 { 2 } else { 4 };
            }
        }
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let state = GameState::new(42);
        assert_eq!(state.grid().count_tiles(), 2);
        assert!(!state.game_over());
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(5);
        let mut b = GameState::new(5);
        for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            a.make_move(d);
            b.make_move(d);
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_noop_move_on_full_terminal_grid_sets_game_over() {
        let mut state = GameState::from_grid(checkerboard(), 1);
        assert!(!state.make_move(Direction::Left));
        assert!(state.game_over());
    }

    #[test]
    fn test_noop_move_with_other_moves_left_is_not_game_over() {
        // Full, left-packed, but column 0 has an equal vertical pair.
        let grid = Grid::from_rows([[2, 4, 8, 16], [2, 8, 16, 32], [4, 2, 4, 2], [8, 4, 2, 4]])
            .unwrap();
        let mut state = GameState::from_grid(grid, 1);
        assert!(!state.make_move(Direction::Left));
        assert!(!state.game_over());
        assert_eq!(state.grid(), &grid);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut state = GameState::from_grid(checkerboard(), 1);
        state.make_move(Direction::Up);
        assert!(state.game_over());
        for d in Direction::ALL {
            assert!(!state.make_move(d));
        }
        assert!(state.game_over());
        assert_eq!(state.grid(), &checkerboard());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 64]]).unwrap();
        let mut state = GameState::from_grid(grid, 3);
        state.make_move(Direction::Left);
        let snap = state.snapshot();
        assert_eq!(snap.grid[0][0], 4);
        assert_eq!(snap.grid[3][0], 64);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.max_tile, 64);
        assert!(!snap.game_over);
    }
}
