//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! One tick per frame: drain input until the tick is due, apply it to the
//! session, redraw when the board changed.

use std::fs::File;
use std::time::Instant;

use anyhow::Result;
use log::info;

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::engine::{FramePacer, Session, TickOutcome};
use tui_2048::input::{drain_events, wait_for_key_press, EventBatch};
use tui_2048::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_2048::types::{FPS, STATIC_REDRAW_MS};

const LOG_FILE: &str = "tui-2048.log";

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logging is off unless `RUST_LOG` is set. Output goes to a file so it never
/// lands on the game screen.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join(LOG_FILE);
    match File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("logging disabled: cannot create {}: {}", path.display(), e),
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(GameState::from_entropy());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut pending = EventBatch::new();

    let started = Instant::now();
    let mut pacer = FramePacer::from_fps(FPS, started);
    info!("game started, {} fps", FPS);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render_snapshot(now_ms, &snap) {
            draw(term, &view, &snap, &mut fb)?;
        }

        // Input with timeout until next tick.
        let mut resized = false;
        drain_events(&mut pending, pacer.timeout(Instant::now()), |_: u16, _: u16| {
            resized = true
        })?;
        if resized {
            term.invalidate();
            throttle.invalidate();
        }

        // Tick.
        if !pacer.tick_due(Instant::now()) {
            continue;
        }
        let outcome = session.tick(&pending);
        pending.clear();

        match outcome {
            TickOutcome::Running { .. } => {}
            TickOutcome::Quit => {
                info!("quit after {} moves", session.state().moves());
                return Ok(());
            }
            TickOutcome::GameOver => {
                session.snapshot_into(&mut snap);
                draw(term, &view, &snap, &mut fb)?;
                wait_for_key_press()?;
                return Ok(());
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
