//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O, no game rules). Whether the cursor preview is
//! valid is decided by the engine and passed in through [`ViewOverlay`].

use arrayvec::ArrayVec;

use crate::core::shapes::MAX_SHAPE_SIDE;
use crate::core::{Block, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{BlockColor, BLOCKS_PER_SET, GRID_SIZE};

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

/// Placement preview at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorView {
    pub index: usize,
    pub row: u8,
    pub col: u8,
    /// Engine answer for this (index, row, col)
    pub valid: bool,
}

/// Rows and columns to highlight after a clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashView {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl FlashView {
    fn covers(&self, row: u8, col: u8) -> bool {
        self.rows.contains(&row) || self.cols.contains(&col)
    }
}

/// Presentation-only state drawn on top of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOverlay {
    pub cursor: Option<CursorView>,
    pub flash: Option<FlashView>,
    pub best_score: u32,
}

/// Tray preview box side in grid cells
const TRAY_BOX: u16 = MAX_SHAPE_SIDE as u16;

/// A lightweight terminal renderer for the block puzzle.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_w(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_w + 2
    }

    fn frame_h(&self) -> u16 {
        GRID_SIZE as u16 + 2
    }

    /// Height of grid frame plus the tray underneath
    pub fn layout_height(&self) -> u16 {
        self.frame_h() + 1 + TRAY_BOX + 1
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: &ViewOverlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let frame_w = self.frame_w();
        let frame_h = self.frame_h();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(self.layout_height()) / 2;

        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::frame(),
        );

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let code = snap.grid[row as usize][col as usize];
                match BlockColor::from_code(code) {
                    Some(color) => {
                        self.fill_cell(fb, start_x, start_y, row, col, '█', CellStyle::block(color));
                    }
                    None => {
                        let flashing = overlay.flash.as_ref().is_some_and(|f| f.covers(row, col));
                        let (ch, style) = if flashing {
                            ('░', CellStyle::flash())
                        } else {
                            ('·', CellStyle::empty())
                        };
                        self.fill_cell(fb, start_x, start_y, row, col, ch, style);
                    }
                }
            }
        }

        if let Some(cursor) = overlay.cursor.filter(|_| snap.playable()) {
            if let Some(block) = snap.block(cursor.index) {
                self.draw_preview(fb, start_x, start_y, block, cursor);
            }
        }

        self.draw_tray(fb, snap, overlay, start_x, start_y + frame_h + 1);
        self.draw_side_panel(fb, snap, overlay, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: &ViewOverlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col as u16 * self.cell_w;
        let py = start_y + 1 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        block: Block,
        cursor: CursorView,
    ) {
        let ch = if cursor.valid { '▓' } else { '▒' };
        let style = CellStyle::preview(block.color, cursor.valid);
        for (dr, dc) in block.shape().cells() {
            let row = cursor.row + dr;
            let col = cursor.col + dc;
            if row < GRID_SIZE && col < GRID_SIZE {
                self.fill_cell(fb, start_x, start_y, row, col, ch, style);
            }
        }
    }

    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        overlay: &ViewOverlay,
        x: u16,
        y: u16,
    ) {
        let slot_w = TRAY_BOX * self.cell_w;
        let gap: u16 = 2;
        let tray_w = slot_w * BLOCKS_PER_SET as u16 + gap * (BLOCKS_PER_SET as u16 - 1);
        let origin_x = (x + self.frame_w() / 2).saturating_sub(tray_w / 2);
        let selected = overlay.cursor.map(|c| c.index);

        let label = CellStyle::value();
        for i in 0..BLOCKS_PER_SET {
            let slot_x = origin_x + i as u16 * (slot_w + gap);
            let marker_style = if selected == Some(i) {
                label.bold()
            } else {
                label.dim()
            };
            if selected == Some(i) {
                fb.put_char(slot_x.saturating_sub(1), y + TRAY_BOX, '▶', marker_style);
            }
            fb.put_u32(slot_x, y + TRAY_BOX, i as u32 + 1, marker_style);

            let Some(block) = snap.block(i) else {
                continue;
            };
            let style = CellStyle::tray(block.color);
            for (dr, dc) in block.shape().cells() {
                let px = slot_x + dc as u16 * self.cell_w;
                fb.fill_rect(px, y + dr as u16, self.cell_w, 1, '█', style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        overlay: &ViewOverlay,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::label();
        let value = CellStyle::value();

        let rows: [(&str, u32); 6] = [
            ("SCORE", snap.score),
            ("BEST", overlay.best_score.max(snap.score)),
            ("LEVEL", snap.level),
            ("COMBO", snap.combo),
            ("STREAK", snap.streak),
            ("LINES", snap.lines_cleared),
        ];

        let mut y = start_y;
        for (name, v) in rows {
            if y.saturating_add(1) >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(2);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::banner();
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (dy, text) in [(0u16, "GAME OVER"), (1, "R: restart")] {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_sub(1) + dy, text, style);
        }
    }
}
