//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a one-row title banner, the board (tiles separated
//! by background-colored gaps), and a one-row key hint. The whole block is
//! centered horizontally in the viewport.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer};
use crate::theme::{Theme, CLASSIC_THEME};
use crate::types::{GRID_SIZE, TITLE};

const BANNER_ROWS: u16 = 1;
const HINT_ROWS: u16 = 1;
const HINT: &str = "arrows/wasd move  q quit";
const GAME_OVER: &str = " GAME OVER ";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where a tile landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Renders the 4x4 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
    theme: &'static Theme,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 tiles with 2-column gaps look roughly square in most terminals.
        Self::new(8, 3)
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap_x: 2,
            gap_y: 1,
            anchor_y: AnchorY::Center,
            theme: &CLASSIC_THEME,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in terminal cells, gaps included.
    pub fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n * self.tile_w + (n + 1) * self.gap_x,
            n * self.tile_h + (n + 1) * self.gap_y,
        )
    }

    /// Total block size: banner + board + hint.
    pub fn frame_size(&self) -> (u16, u16) {
        let (w, h) = self.board_size();
        (w, BANNER_ROWS + h + HINT_ROWS)
    }

    /// Top-left corner of the whole block inside `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.frame_size();
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Screen rectangle of the tile at `(row, col)`.
    pub fn tile_rect(&self, viewport: Viewport, row: usize, col: usize) -> TileRect {
        let (x0, y0) = self.origin(viewport);
        let board_y = y0 + BANNER_ROWS;
        TileRect {
            x: x0 + self.gap_x + (col as u16) * (self.tile_w + self.gap_x),
            y: board_y + self.gap_y + (row as u16) * (self.tile_h + self.gap_y),
            w: self.tile_w,
            h: self.tile_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (x0, y0) = self.origin(viewport);
        let (board_w, board_h) = self.board_size();
        let board_y = y0 + BANNER_ROWS;

        // Banner.
        let banner = self.theme.banner_style();
        fb.fill_rect(x0, y0, board_w, BANNER_ROWS, ' ', banner);
        fb.put_str(x0 + 1, y0, TITLE, banner);

        // Board background.
        fb.fill_rect(x0, board_y, board_w, board_h, ' ', self.theme.background_style());

        for (row, line) in snap.grid.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, self.tile_rect(viewport, row, col), value);
            }
        }

        fb.put_str(x0, board_y + board_h, HINT, CellStyle::default());

        if snap.game_over {
            let text_w = GAME_OVER.chars().count() as u16;
            let x = x0 + board_w.saturating_sub(text_w) / 2;
            fb.put_str(x, board_y + board_h / 2, GAME_OVER, banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, rect: TileRect, value: u32) {
        let style = self.theme.tile_style(value);
        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        if value == 0 {
            return;
        }
        let text_w = decimal_width(value);
        let tx = rect.x + rect.w.saturating_sub(text_w) / 2;
        let ty = rect.y + rect.h / 2;
        fb.put_u32(tx, ty, value, style);
    }
}
