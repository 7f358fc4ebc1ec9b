//! Tile colours.
//!
//! Picking a style is a pure decision on the tile value; the renderer applies
//! it around each write and resets styling after every flush.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background of the play area behind the tiles.
pub const BOARD_BG: Rgb = Rgb::new(187, 173, 160);

/// Style of an empty cell.
pub fn empty_style() -> CellStyle {
    CellStyle::new(Rgb::new(160, 148, 136), Rgb::new(205, 193, 180))
}

/// Style used to draw a tile of the given value.
///
/// ```
/// use tui_2048_term::tile_style;
///
/// assert_ne!(tile_style(2).bg, tile_style(4).bg);
/// assert_eq!(tile_style(4096), tile_style(65536));
/// ```
pub fn tile_style(value: Tile) -> CellStyle {
    let (bg, fg) = match value {
        0 => return empty_style(),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}

/// Text drawn inside a tile at most `width` columns wide.
///
/// Values too long for the cell are shortened with a `k`/`M` suffix.
pub fn tile_label(value: Tile, width: usize) -> String {
    let full = value.to_string();
    if full.len() <= width {
        return full;
    }
    let kilo = format!("{}k", value / 1024);
    if kilo.len() <= width {
        return kilo;
    }
    format!("{}M", value / (1024 * 1024))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_classic_tile_has_its_own_background() {
        let mut seen = Vec::new();
        let mut value = 2;
        while value <= 2048 {
            let bg = tile_style(value).bg;
            assert!(!seen.contains(&bg), "tile {} reuses a background", value);
            seen.push(bg);
            value *= 2;
        }
    }

    #[test]
    fn small_tiles_use_dark_text() {
        assert_eq!(tile_style(2).fg, DARK_TEXT);
        assert!(!tile_style(4).bold);
        assert!(tile_style(8).bold);
    }

    #[test]
    fn labels_fit_their_cell() {
        assert_eq!(tile_label(2048, 7), "2048");
        assert_eq!(tile_label(131072, 5), "128k");
        assert_eq!(tile_label(1 << 30, 5), "1024M");
        assert_eq!(tile_label(1 << 24, 4), "16M");
    }
}
