//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell is empty or filled by a locked piece.
//! Uses a flat array for better cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom).
//! A cell is set iff a previously locked piece occupies it.

use arrayvec::ArrayVec;

use crate::pieces::ShapeMask;
use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i32 || y < 0 || y >= BOARD_ROWS as i32 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_COLS
    }

    pub fn height(&self) -> usize {
        BOARD_ROWS
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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Fill an entire row with `kind`, leaving the columns in `holes` empty.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind, holes: &[usize]) {
        if y >= BOARD_ROWS {
            return;
        }
        for (x, cell) in self.row_mut(y).iter_mut().enumerate() {
            *cell = if holes.contains(&x) { None } else { Some(kind) };
        }
    }

    /// Cells of row `y`, left to right
    ///
    /// # Panics
    ///
    /// Panics if `y >= BOARD_ROWS`. Use [`Board::get`] for checked access.
    pub fn row(&self, y: usize) -> &[Cell] {
        assert!(y < BOARD_ROWS, "row {y} out of range");
        let start = y * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    // Callers check `y` first.
    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        debug_assert!(y < BOARD_ROWS);
        let start = y * BOARD_COLS;
        &mut self.cells[start..start + BOARD_COLS]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Number of set cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Remove row `y`: every row above shifts down by one and the top row is emptied.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_ROWS {
            return;
        }

        // copy_within handles the overlapping rows
        for row in (1..=y).rev() {
            let src_start = (row - 1) * BOARD_COLS;
            self.cells
                .copy_within(src_start..src_start + BOARD_COLS, row * BOARD_COLS);
        }

        self.row_mut(0).fill(None);
    }

    /// Clear all full rows and compact the grid. Returns the number of rows cleared.
    ///
    /// Full rows are collected in one top-to-bottom pass and then removed one at a
    /// time. Each removal shifts the rows above it down, so pending row indices that
    /// sat above the removed row are moved down by one before they are processed.
    pub fn clear_lines(&mut self) -> usize {
        let mut pending: ArrayVec<usize, BOARD_ROWS> = (0..BOARD_ROWS)
            .filter(|&y| self.is_row_full(y))
            .collect();

        for i in 0..pending.len() {
            let line = pending[i];
            self.clear_row(line);

            for later in pending[i + 1..].iter_mut() {
                if *later < line {
                    *later += 1;
                }
            }
        }

        pending.len()
    }

    /// Lock a piece onto the board with its mask origin at (x, y)
    ///
    /// Cells above the top edge (y < 0) are dropped. Returns the number of cells written.
    pub fn lock_piece(&mut self, mask: &ShapeMask, x: i32, y: i32, kind: PieceKind) -> usize {
        let mut written = 0;
        for (dx, dy) in mask.cells() {
            let py = y + dy;
            if py < 0 {
                continue;
            }
            if self.set(x + dx, py, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
