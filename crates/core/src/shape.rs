//! Shape matrices - the local occupancy grid of a piece
//!
//! A shape is a square grid of 0/1 flags (4x4, 3x3 or 2x2). Storage is a
//! fixed 4x4 array so shapes are `Copy` and never allocate; only the top-left
//! `size x size` corner is meaningful.

/// Largest side length of any shape in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square 0/1 occupancy matrix of a piece in its local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a 4x4 shape
    pub const fn square4(rows: [[u8; 4]; 4]) -> Self {
        Self { size: 4, cells: rows }
    }

    /// Build a 3x3 shape
    pub const fn square3(rows: [[u8; 3]; 3]) -> Self {
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < 3 {
            let mut x = 0;
            while x < 3 {
                cells[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { size: 3, cells }
    }

    /// Build a 2x2 shape
    pub const fn square2(rows: [[u8; 2]; 2]) -> Self {
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        cells[0][0] = rows[0][0];
        cells[0][1] = rows[0][1];
        cells[1][0] = rows[1][0];
        cells[1][1] = rows[1][1];
        Self { size: 2, cells }
    }

    /// Build a shape from arbitrary rows.
    ///
    /// Returns `None` unless the rows form a square of side 1..=4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = u8::from(v != 0);
            }
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Flag at local (x, y); 0 outside the matrix
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.size() || y >= self.size() {
            return 0;
        }
        self.cells[y][x]
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    /// Iterate occupied local coordinates as `(x, y)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| self.is_occupied(x, y).then_some((x, y)))
        })
    }

    /// Index one past the lowest occupied row (0 for an empty shape)
    pub fn occupied_bottom(&self) -> usize {
        self.occupied().map(|(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Rotate 90° clockwise in place: transpose, then reverse every row.
    pub fn rotate_cw(&mut self) {
        let size = self.size();
        for y in 0..size {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
        for row in self.cells[..size].iter_mut() {
            row[..size].reverse();
        }
    }

    /// Return a clockwise-rotated copy
    pub fn rotated_cw(mut self) -> Self {
        self.rotate_cw();
        self
    }
}
