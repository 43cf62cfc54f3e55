//! Rotation with best-effort horizontal correction
//!
//! Pieces rotate 90° clockwise about their local matrix. If the rotated piece
//! collides, it is nudged sideways by a growing alternating step sequence
//! until it fits or the step exceeds the matrix size, in which case the
//! rotation is abandoned and the piece restored.
//!
//! The step sequence starts at 0 and each step is applied leftward, so the
//! cumulative offsets tried are 0, -1, -3, -6 (fewer for small matrices).
//! This is a simple heuristic, not a standard kick table: a piece jammed
//! against the left wall only escapes when a leftward position is free.
//!
//! The policy sits behind [`RotationSystem`] so a session can be built with a
//! different correction scheme.

use log::trace;

use crate::board::Board;
use crate::piece::Piece;

/// Strategy for rotating the active piece against a board
pub trait RotationSystem {
    /// Rotate `piece` clockwise in place.
    ///
    /// Returns `false` and leaves `piece` untouched when no legal placement
    /// was found.
    fn rotate(&self, piece: &mut Piece, board: &Board) -> bool;
}

/// Rotate, then shift left by an alternating, growing step until it fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftKick;

impl RotationSystem for ShiftKick {
    fn rotate(&self, piece: &mut Piece, board: &Board) -> bool {
        let original = *piece;
        piece.shape.rotate_cw();

        let size = piece.shape.size() as i32;
        let mut offset: i32 = 0;
        while board.collides(piece) {
            piece.pos.x += if offset > 0 { -offset } else { offset };
            offset = -(offset + if offset > 0 { 1 } else { -1 });
            if offset > size {
                trace!("rotation of {} rejected at x={}", original.kind, original.pos.x);
                *piece = original;
                return false;
            }
        }
        true
    }
}

/// Rotate without any correction; reject on collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoKick;

impl RotationSystem for NoKick {
    fn rotate(&self, piece: &mut Piece, board: &Board) -> bool {
        let mut rotated = *piece;
        rotated.shape.rotate_cw();
        if board.collides(&rotated) {
            return false;
        }
        *piece = rotated;
        true
    }
}
