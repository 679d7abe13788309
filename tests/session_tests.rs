//! Integration tests for the tick loop: session + pacer, no terminal.

use std::time::{Duration, Instant};

use tui_2048::core::{GameState, Grid};
use tui_2048::engine::{FramePacer, Session, TickOutcome};
use tui_2048::types::{Direction, InputEvent, FPS, TICK_MS};

#[test]
fn test_simulated_frames() {
    let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut session = Session::new(GameState::from_grid(grid, 4));

    let t0 = Instant::now();
    let mut pacer = FramePacer::from_fps(FPS, t0);
    let mut pending = vec![InputEvent::Move(Direction::Left)];

    // Walk simulated time forward one millisecond at a time for ~10 frames.
    let mut ticks = 0;
    let mut outcomes = Vec::new();
    for ms in 0..170 {
        let now = t0 + Duration::from_millis(ms);
        if pacer.tick_due(now) {
            ticks += 1;
            outcomes.push(session.tick(&pending));
            pending.clear();
        }
    }

    assert_eq!(ticks, 170 / TICK_MS as usize);
    assert_eq!(outcomes[0], TickOutcome::Running { changed: true });
    assert!(outcomes[1..]
        .iter()
        .all(|o| *o == TickOutcome::Running { changed: false }));
    assert_eq!(session.state().grid().get(0, 0), Some(4));
    assert_eq!(session.ticks(), ticks as u64);
}

#[test]
fn test_quit_ends_session_without_moving() {
    let mut session = Session::new(GameState::new(10));
    let before = *session.state().grid();
    let outcome = session.tick(&[InputEvent::Quit, InputEvent::Move(Direction::Down)]);
    assert_eq!(outcome, TickOutcome::Quit);
    assert!(outcome.is_finished());
    assert_eq!(session.state().grid(), &before);
}

#[test]
fn test_batch_stops_at_game_over() {
    // Checkerboard: nothing can move, so the first Left ends the game and the
    // Quit behind it is never reached.
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut session = Session::new(GameState::from_grid(Grid::from_rows(rows).unwrap(), 2));
    let outcome = session.tick(&[
        InputEvent::Move(Direction::Left),
        InputEvent::Quit,
    ]);
    assert_eq!(outcome, TickOutcome::GameOver);
    assert!(session.state().game_over());
}
