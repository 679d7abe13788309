//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders into a plain
//! framebuffer that is then flushed to the terminal, instead of using a
//! widget/layout library.
//!
//! - [`fb`]: styled character framebuffer
//! - [`theme`]: tile colors, fixed for the life of the process
//! - [`game_view`]: snapshot -> framebuffer (pure)
//! - [`renderer`]: framebuffer -> terminal (diffed)
//! - [`render_throttle`]: skips redraws of unchanged frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod theme;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, TileRect, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{Theme, CLASSIC_THEME};
