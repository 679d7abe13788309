//! Game loop scheduling.
//!
//! The board engine only exposes synchronous calls; this crate adds the
//! pieces a driver needs to run it at a fixed rate:
//!
//! - [`Session`]: owns the one `GameState` and applies a tick's worth of input
//! - [`FramePacer`]: decides when the next tick is due
//!
//! Nothing here touches the terminal, so any cooperative or threaded driver
//! can call `Session::tick` once per frame.

pub mod pacer;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use pacer::FramePacer;
pub use session::{Session, TickOutcome};
