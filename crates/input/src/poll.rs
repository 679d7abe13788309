//! Per-tick event draining.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::classify;
use crate::types::{InputEvent, MAX_EVENTS_PER_TICK};

/// Events gathered during one tick (stack-only).
pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>;

/// Wait up to `timeout` for input, then take whatever else is already queued.
///
/// Classified events are appended to `batch`; the number appended is
/// returned. Terminal events that do not map to game input (mouse, focus,
/// unmapped keys) are consumed and dropped. Resize events are reported
/// through `on_resize` so the caller can invalidate its last frame.
///
/// When `batch` is already full nothing is read: pending input stays queued
/// in the terminal for the next tick and the call just waits out `timeout`.
pub fn drain_events(
    batch: &mut EventBatch,
    timeout: Duration,
    mut on_resize: impl FnMut(u16, u16),
) -> Result<usize> {
    if batch.is_full() {
        std::thread::sleep(timeout);
        return Ok(0);
    }

    let before = batch.len();
    if !event::poll(timeout)? {
        return Ok(0);
    }

    loop {
        let ev = event::read()?;
        push_event(batch, &ev, &mut on_resize);

        if batch.is_full() || !event::poll(Duration::ZERO)? {
            break;
        }
    }

    Ok(batch.len() - before)
}

/// Block until any key is pressed.
pub fn wait_for_key_press() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn push_event(batch: &mut EventBatch, ev: &Event, on_resize: &mut impl FnMut(u16, u16)) {
    if let Event::Resize(w, h) = *ev {
        on_resize(w, h);
        return;
    }
    if let Some(input) = classify(ev) {
        // drain_events never reads into a full batch.
        batch.push(input);
    }
}
