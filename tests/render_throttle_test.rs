use tui_2048::core::{GameState, Grid};
use tui_2048::term::RenderThrottle;
use tui_2048::types::Direction;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
}

#[test]
fn render_throttle_invalidate_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.invalidate();
    assert!(t.should_render(5, 1));
}

#[test]
fn render_throttle_follows_snapshot_changes() {
    let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::from_grid(grid, 9);
    let mut t = RenderThrottle::new(1000);

    assert!(t.should_render_snapshot(0, &state.snapshot()));
    assert!(!state.make_move(Direction::Left));
    assert!(!t.should_render_snapshot(16, &state.snapshot()));
    assert!(state.make_move(Direction::Right));
    assert!(t.should_render_snapshot(32, &state.snapshot()));
}
