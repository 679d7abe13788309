//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and drains the
//! events that arrive between two ticks.

pub mod map;
pub mod poll;

pub use tui_2048_types as types;

pub use map::{classify, handle_key_event, should_quit};
pub use poll::{drain_events, wait_for_key_press, EventBatch};
