//! Read-only views of a game session for renderers
//!
//! Snapshots are plain `Copy` data. Adapters pull one per frame with
//! [`GameSession::snapshot`](crate::session::GameSession::snapshot), or reuse
//! a buffer with `snapshot_into` to keep the frame loop allocation-free.

use crate::board::Grid;
use crate::catalog::PieceKind;
use crate::piece::{Piece, Position};
use crate::shape::ShapeMatrix;
use crate::types::{Color, GamePhase, BASE_FALL_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub pos: Position,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            pos: value.pos,
        }
    }
}

impl PieceSnapshot {
    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(x, y)| (x as i32 + self.pos.x, y as i32 + self.pos.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells only; the active piece is not merged in
    pub board: Grid,
    pub active: PieceSnapshot,
    /// The on-deck piece, shown in the preview
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub drop_counter_ms: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    /// Whether a piece command would currently be accepted
    pub fn playable(&self) -> bool {
        self.phase.accepts_moves()
    }

    /// Cell as it should be drawn: the active piece over the locked board.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn cell_with_active(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        if self.active.cells().any(|c| c == (x, y)) {
            return Some(self.active.color);
        }
        self.board[y as usize][x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let piece = PieceSnapshot::from(Piece::spawn(PieceKind::I));
        Self {
            board: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
            active: piece,
            next: piece,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
            drop_counter_ms: 0,
            phase: GamePhase::Idle,
        }
    }
}
