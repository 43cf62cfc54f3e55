//! Piece - a shape instance with a color and a board position

use crate::catalog::PieceKind;
use crate::shape::ShapeMatrix;
use crate::types::{Color, BOARD_WIDTH};

/// Offset of a shape's local origin (top-left) in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A falling piece.
///
/// The shape is a private copy of the catalog matrix, so rotating it in place
/// only affects this instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub pos: Position,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position: horizontally centered,
    /// top row of the board.
    pub fn spawn(kind: PieceKind) -> Self {
        let entry = kind.entry();
        Self {
            kind,
            shape: entry.shape,
            color: entry.color,
            pos: Position::new(spawn_x(entry.shape.size()), 0),
        }
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(x, y)| (x as i32 + self.pos.x, y as i32 + self.pos.y))
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            pos: Position::new(self.pos.x + dx, self.pos.y + dy),
            ..*self
        }
    }
}

/// `floor(width / 2) - floor(size / 2)`
pub fn spawn_x(shape_size: usize) -> i32 {
    (BOARD_WIDTH / 2) as i32 - (shape_size / 2) as i32
}
