//! Colors for the board.
//!
//! The theme is immutable and lives for the whole process: build it once
//! (or use [`CLASSIC_THEME`]) and hand out `&'static` references.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

/// Number of tile values with their own color (2 ..= 2048).
pub const TILE_COLOR_COUNT: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Board background between tiles.
    pub background: Rgb,
    /// Empty cell.
    pub empty: Rgb,
    /// Numbers on tiles.
    pub text: Rgb,
    pub banner: Rgb,
    pub banner_text: Rgb,
    /// `(value, color)` pairs, ascending by value.
    pub tiles: [(Tile, Rgb); TILE_COLOR_COUNT],
    /// Used for values past the end of `tiles`.
    pub fallback: Rgb,
}

impl Theme {
    pub const fn classic() -> Self {
        Self {
            background: Rgb::new(187, 173, 160),
            empty: Rgb::new(205, 193, 180),
            text: Rgb::new(119, 110, 101),
            banner: Rgb::new(50, 50, 50),
            banner_text: Rgb::new(255, 255, 255),
            tiles: [
                (2, Rgb::new(238, 228, 218)),
                (4, Rgb::new(237, 224, 200)),
                (8, Rgb::new(242, 177, 121)),
                (16, Rgb::new(245, 149, 99)),
                (32, Rgb::new(246, 124, 95)),
                (64, Rgb::new(246, 94, 59)),
                (128, Rgb::new(237, 207, 114)),
                (256, Rgb::new(237, 204, 97)),
                (512, Rgb::new(237, 200, 80)),
                (1024, Rgb::new(237, 197, 63)),
                (2048, Rgb::new(237, 194, 46)),
            ],
            fallback: Rgb::new(237, 194, 46),
        }
    }

    /// Fill color for a cell value.
    pub fn tile_color(&self, value: Tile) -> Rgb {
        if value == 0 {
            return self.empty;
        }
        self.tiles
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, rgb)| *rgb)
            .unwrap_or(self.fallback)
    }

    /// Style for a cell: number color on the tile's fill.
    pub fn tile_style(&self, value: Tile) -> CellStyle {
        CellStyle::new(self.text, self.tile_color(value)).with_bold()
    }

    pub fn banner_style(&self) -> CellStyle {
        CellStyle::new(self.banner_text, self.banner).with_bold()
    }

    pub fn background_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

pub static CLASSIC_THEME: Theme = Theme::classic();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_use_table() {
        let t = Theme::classic();
        assert_eq!(t.tile_color(2), Rgb::new(238, 228, 218));
        assert_eq!(t.tile_color(64), Rgb::new(246, 94, 59));
    }

    #[test]
    fn empty_and_fallback() {
        let t = &CLASSIC_THEME;
        assert_eq!(t.tile_color(0), t.empty);
        assert_eq!(t.tile_color(4096), t.fallback);
        assert_eq!(t.tile_color(1 << 17), t.tile_color(2048));
    }

    #[test]
    fn table_is_ascending_powers_of_two() {
        let t = Theme::classic();
        for pair in t.tiles.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 * 2);
        }
    }
}
