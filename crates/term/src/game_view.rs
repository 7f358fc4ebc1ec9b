//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{empty_style, tile_label, tile_style, BOARD_BG};

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

/// Lays out the grid, side panel and overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Background strip between neighbouring tiles.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size (border included) of the board for a `rows x cols` grid.
    ///
    /// Saturates at `u16::MAX` for grids too large for any terminal.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        (self.span(cols, self.cell_w), self.span(rows, self.cell_h))
    }

    fn span(&self, count: usize, cell: u16) -> u16 {
        let count = count as u64;
        let len = count * cell as u64 + (count + 1) * self.gap as u64 + 2;
        clamp_u16(len)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let rows = snap.grid.rows();
        let cols = snap.grid.cols();
        let (frame_w, frame_h) = self.frame_size(rows, cols);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let board = CellStyle::new(BOARD_BG, BOARD_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Rows and columns are monotonic: stop at the first tile starting off-screen.
        for row in 0..rows {
            let (_, py) = self.tile_origin(start_x, start_y, row, 0);
            if py >= viewport.height {
                break;
            }
            for col in 0..cols {
                let (px, _) = self.tile_origin(start_x, start_y, row, col);
                if px >= viewport.width {
                    break;
                }
                let value = snap.grid.get(row, col).unwrap_or(0);
                self.draw_tile(fb, px, py, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.terminal {
            self.draw_overlay_text(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "r restart  q quit"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at (row, col).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let step_x = (self.cell_w + self.gap) as u64;
        let step_y = (self.cell_h + self.gap) as u64;
        let x = start_x as u64 + 1 + self.gap as u64 + col as u64 * step_x;
        let y = start_y as u64 + 1 + self.gap as u64 + row as u64 * step_y;
        (clamp_u16(x), clamp_u16(y))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: u32) {
        let mid_y = py.saturating_add(self.cell_h / 2);

        if value == 0 {
            let style = empty_style();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px.saturating_add((self.cell_w - 1) / 2), mid_y, '·', style);
            return;
        }

        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let label = tile_label(value, self.cell_w as usize);
        let label_w = label.chars().count() as u16;
        let lx = px.saturating_add(self.cell_w.saturating_sub(label_w) / 2);
        fb.put_str(lx, mid_y, &label, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let score_w = fb.put_u64(panel_x, y, snap.score, value);
        if snap.last_delta > 0 {
            let gain_x = panel_x.saturating_add(score_w + 1);
            fb.put_char(gain_x, y, '+', dim);
            fb.put_u64(gain_x.saturating_add(1), y, snap.last_delta, dim);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.best_tile as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        if snap.won() {
            let gold = CellStyle::new(tile_style(2048).bg, Rgb::new(0, 0, 0)).bold();
            fb.put_str(panel_x, y, "2048!", gold);
            y = y.saturating_add(2);
        }

        for help in ["arrows/hjkl/wasd", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let top = start_y.saturating_add(frame_h.saturating_sub(lines.len() as u16) / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}

fn clamp_u16(v: u64) -> u16 {
    v.min(u16::MAX as u64) as u16
}
