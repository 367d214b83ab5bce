//! Board module - the grid of settled cells
//!
//! The board is `height` rows by `width` columns; each cell is either empty or
//! occupied. Storage is a flat row-major vector sized once at construction.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Board {
    /// Largest side length. Every row and column index fits an `i16` coordinate.
    pub const MAX_SIDE: u16 = i16::MAX as u16;

    /// Create a new empty board. Sides above [`Board::MAX_SIDE`] are clamped.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.min(Self::MAX_SIDE);
        let height = height.min(Self::MAX_SIDE);
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, `#` marking occupied cells.
    ///
    /// All rows must have the same length; any other character is empty.
    ///
    /// ```
    /// use termtris_core::Board;
    ///
    /// let board = Board::from_rows(&["#..", "###"]);
    /// assert_eq!((board.width(), board.height()), (3, 2));
    /// assert!(board.is_occupied(0, 0));
    /// assert!(board.is_row_full(1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut board = Self::new(width, rows.len() as u16);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate().take(width as usize) {
                board.set(row as i16, col as i16, ch == '#');
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row as u16 >= self.height || col as u16 >= self.width {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        self.get(row, col) == Some(true)
    }

    /// Fill an entire row (test and bench setup helper)
    pub fn fill_row(&mut self, row: u16) {
        if row >= self.height {
            return;
        }
        let start = row as usize * self.width as usize;
        self.cells[start..start + self.width as usize].fill(true);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u16) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|&cell| cell)
    }

    /// Remove `row`, shift every row above it down by one and empty the top row.
    pub fn remove_row(&mut self, row: u16) {
        if row >= self.height {
            return;
        }
        let width = self.width as usize;
        let end = (row as usize + 1) * width;

        // copy_within handles the overlap
        self.cells.copy_within(0..end - width, width);
        self.cells[..width].fill(false);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on 0
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            termtris_types::DEFAULT_BOARD_WIDTH,
            termtris_types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
