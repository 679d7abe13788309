use crate::types::{Tile, GRID_SIZE};

/// Copyable view of a game, handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub game_over: bool,
    pub moves: u32,
    pub max_tile: Tile,
}

impl GameSnapshot {
    /// Stable 64-bit fingerprint of everything that affects a frame.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};

        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
