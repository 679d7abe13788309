use log::{info, trace};

use crate::core::{GameSnapshot, GameState};
use crate::types::InputEvent;

/// Result of one [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game continues; `changed` is true if any move in the batch changed the grid.
    Running { changed: bool },
    /// A quit event was seen.
    Quit,
    /// The game reached a terminal position.
    GameOver,
}

impl TickOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, TickOutcome::Running { .. })
    }
}

/// Owns the single game state and applies input to it, one tick at a time.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    ticks: u64,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self { state, ticks: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Apply a batch of input events in order.
    ///
    /// Events after a quit, or after the move that ended the game, are dropped.
    pub fn tick(&mut self, events: &[InputEvent]) -> TickOutcome {
        self.ticks += 1;

        if self.state.game_over() {
            return TickOutcome::GameOver;
        }

        let mut changed = false;
        for event in events {
            match *event {
                InputEvent::Quit => {
                    info!("quit requested at tick {}", self.ticks);
                    return TickOutcome::Quit;
                }
                InputEvent::Move(direction) => {
                    let moved = self.state.make_move(direction);
                    trace!("tick {}: {} -> changed={}", self.ticks, direction.as_str(), moved);
                    changed |= moved;
                    if self.state.game_over() {
                        return TickOutcome::GameOver;
                    }
                }
            }
        }

        TickOutcome::Running { changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::types::Direction;

    fn terminal_but_one_move() -> Grid {
        // Only a Left/Right merge of the two 8s is possible.
        Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]).unwrap()
    }

    #[test]
    fn empty_batch_is_running_unchanged() {
        let mut s = Session::new(GameState::new(1));
        assert_eq!(s.tick(&[]), TickOutcome::Running { changed: false });
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn quit_stops_the_batch() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut s = Session::new(GameState::from_grid(grid, 1));
        let out = s.tick(&[InputEvent::Quit, InputEvent::Move(Direction::Right)]);
        assert_eq!(out, TickOutcome::Quit);
        assert_eq!(s.state().grid(), &grid);
    }

    #[test]
    fn changed_is_or_of_moves() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut s = Session::new(GameState::from_grid(grid, 1));
        let out = s.tick(&[
            InputEvent::Move(Direction::Left),
            InputEvent::Move(Direction::Right),
        ]);
        assert_eq!(out, TickOutcome::Running { changed: true });
        assert_eq!(s.state().moves(), 1);
    }

    #[test]
    fn tick_after_game_over_reports_game_over() {
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        let mut s = Session::new(GameState::from_grid(grid, 1));
        assert_eq!(s.tick(&[InputEvent::Move(Direction::Up)]), TickOutcome::GameOver);
        assert_eq!(s.tick(&[InputEvent::Move(Direction::Left)]), TickOutcome::GameOver);
        assert!(s.tick(&[]).is_finished());
    }

    #[test]
    fn noop_move_with_a_merge_left_keeps_running() {
        let mut s = Session::new(GameState::from_grid(terminal_but_one_move(), 1));
        assert_eq!(
            s.tick(&[InputEvent::Move(Direction::Up)]),
            TickOutcome::Running { changed: false }
        );
    }
}
