//! Piece catalog - the fixed set of playable shapes and their colors
//!
//! Seven entries, each a square occupancy matrix plus a color token. The
//! catalog is immutable; pieces take a copy of the matrix so rotating a piece
//! never disturbs the catalog.

use std::fmt;

use crate::shape::ShapeMatrix;
use crate::types::Color;

/// The seven piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// One catalog entry: shape in spawn orientation and its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
}

/// The full catalog, indexed by `PieceKind as usize`
pub static CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        kind: PieceKind::I,
        shape: ShapeMatrix::square4([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::new(0x00, 0xFF, 0xFF),
    },
    CatalogEntry {
        kind: PieceKind::J,
        shape: ShapeMatrix::square3([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::new(0x00, 0x00, 0xFF),
    },
    CatalogEntry {
        kind: PieceKind::L,
        shape: ShapeMatrix::square3([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Color::new(0xFF, 0x7F, 0x00),
    },
    CatalogEntry {
        kind: PieceKind::O,
        shape: ShapeMatrix::square2([[1, 1], [1, 1]]),
        color: Color::new(0xFF, 0xFF, 0x00),
    },
    CatalogEntry {
        kind: PieceKind::S,
        shape: ShapeMatrix::square3([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Color::new(0x00, 0xFF, 0x00),
    },
    CatalogEntry {
        kind: PieceKind::T,
        shape: ShapeMatrix::square3([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::new(0x80, 0x00, 0x80),
    },
    CatalogEntry {
        kind: PieceKind::Z,
        shape: ShapeMatrix::square3([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Color::new(0xFF, 0x00, 0x00),
    },
];

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog entry for this kind
    pub fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    pub fn shape(self) -> ShapeMatrix {
        self.entry().shape
    }

    pub fn color(self) -> Color {
        self.entry().color
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
