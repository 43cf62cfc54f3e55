//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the bordered playfield (each board cell is
//! `cell_w` x `cell_h` terminal cells), then a side panel with SCORE, LEVEL,
//! LINES and a boxed NEXT preview. Phase overlays are centered on the
//! playfield.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Preview box interior, in board cells
const PREVIEW_CELLS: u16 = 4;

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

/// Vertical placement of the playfield inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corner of the playfield frame and its size, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for a game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the playfield frame lands for a given viewport.
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let panel_w = self.panel_width();
        let x = viewport.width.saturating_sub(w + panel_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames; nothing allocates
    /// unless the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let frame = self.frame_rect(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (cx, cy) = (frame.x + 1, frame.y + 1);
                match cell {
                    Some(color) => self.draw_block(fb, cx, cy, x as u16, y as u16, *color),
                    None => self.draw_empty(fb, cx, cy, x as u16, y as u16),
                }
            }
        }

        self.draw_piece_on_board(fb, frame, &snap.active);
        self.draw_side_panel(fb, snap, frame, border);
        self.draw_overlay(fb, snap.phase, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn panel_width(&self) -> u16 {
        2 + PREVIEW_CELLS * self.cell_w + 2
    }

    fn draw_piece_on_board(&self, fb: &mut FrameBuffer, frame: FrameRect, piece: &PieceSnapshot) {
        for (x, y) in piece.cells() {
            if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
                continue;
            }
            self.draw_block(fb, frame.x + 1, frame.y + 1, x as u16, y as u16, piece.color);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 80), PLAYFIELD_BG);
        let px = origin_x + x * self.cell_w;
        let py = origin_y + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w - 1, py, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: Color,
    ) {
        let rgb = Rgb::from(color);
        let style = CellStyle::new(rgb, rgb.scaled(3, 4)).bold();
        fb.fill_rect(
            origin_x + x * self.cell_w,
            origin_y + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            '█',
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame: FrameRect,
        border: CellStyle,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if x >= fb.width() {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(x, y, "NEXT", label);
        y = y.saturating_add(1);
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS * self.cell_h + 2;
        fb.draw_box(x, y, box_w, box_h, border);
        self.draw_preview(fb, &snap.next, x + 1, y + 1);
    }

    /// Draw `piece`'s shape centered in the preview box interior.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        piece: &PieceSnapshot,
        origin_x: u16,
        origin_y: u16,
    ) {
        let size = piece.shape.size() as u16;
        let pad_x = (PREVIEW_CELLS * self.cell_w).saturating_sub(size * self.cell_w) / 2;
        let pad_y = (PREVIEW_CELLS * self.cell_h).saturating_sub(size * self.cell_h) / 2;
        for (x, y) in piece.shape.occupied() {
            self.draw_block(
                fb,
                origin_x + pad_x,
                origin_y + pad_y,
                x as u16,
                y as u16,
                piece.color,
            );
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, phase: GamePhase, frame: FrameRect) {
        let (title, hint) = match phase {
            GamePhase::Running => return,
            GamePhase::Paused => ("PAUSED", "Press P to resume"),
            GamePhase::GameOver => ("GAME OVER", "Press S to play again"),
            GamePhase::Idle => ("BLOCKDROP", "Press S to start"),
        };
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y + frame.h / 2;
        for (dy, text) in [(0, title), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y - 1 + dy, text, style);
        }
    }
}
