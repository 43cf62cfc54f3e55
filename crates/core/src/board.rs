//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of
//! the piece that locked there. Storage is a flat row-major array for cache
//! locality and zero allocation.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Anything outside that range, including negative rows, is
//! out of bounds and counts as a collision.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Row-major grid, as handed to renderers and snapshots
pub type Grid = [[Cell; BOARD_WIDTH]; BOARD_HEIGHT];

/// Row indices removed by a single clear, bottom to top
pub type ClearedRows = ArrayVec<usize, BOARD_HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * BOARD_WIDTH + x as usize)
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Borrow one row, or `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT {
            return None;
        }
        let start = y * BOARD_WIDTH;
        Some(&self.cells[start..start + BOARD_WIDTH])
    }

    /// True if any occupied cell of `piece` lies out of bounds or on a
    /// filled cell.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| !self.is_free(x, y))
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Cells that fall outside the board are skipped; callers only merge
    /// pieces that passed [`Board::collides`].
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top).
    ///
    /// Uses a two-pointer compaction: surviving rows slide down in order and
    /// the vacated rows at the top are emptied. No allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH;
        let mut write_y = BOARD_HEIGHT;

        for read_y in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared_rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from a row-major grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            board.cells[y * BOARD_WIDTH..(y + 1) * BOARD_WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Copy the board into a row-major grid without allocating
    pub fn write_grid(&self, grid: &mut Grid) {
        for (y, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * BOARD_WIDTH..(y + 1) * BOARD_WIDTH]);
        }
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        self.write_grid(&mut grid);
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
