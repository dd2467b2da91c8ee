//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell is empty or holds a gem kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) with x ranging 0..7 (left to right) and y ranging
//! 0..7 (top to bottom); gravity pulls toward increasing y.
//!
//! Gems carry no coordinates of their own - a swap exchanges two array
//! slots, so board position and storage can never drift apart.

use arrayvec::ArrayVec;

use gemgrid_types::{Cell, GemKind, Pos, BOARD_CELLS, BOARD_SIZE};

use crate::matcher::MatchSet;
use crate::rng::GemStream;

/// One gem's vertical relocation during collapse
///
/// Presentation-only payload: subsequent detection passes only need the
/// final board, but a renderer animates these origin/destination pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FallEvent {
    pub x: i8,
    pub from_y: i8,
    pub to_y: i8,
    pub kind: GemKind,
}

/// A freshly generated gem entering a vacated top-of-column cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefillEvent {
    pub x: i8,
    pub y: i8,
    pub kind: GemKind,
}

/// The game board - 8x8 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_SIZE as i8 || y < 0 || y >= BOARD_SIZE as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
    }

    /// Board edge length
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Gem kind at (x, y); None for empty or out-of-bounds cells
    pub fn kind_at(&self, x: i8, y: i8) -> Option<GemKind> {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and holding a gem)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if every cell holds a gem
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Swap the contents of two cells by index exchange
    /// Returns false (no mutation) if either position is out of bounds
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (Self::index(a.x, a.y), Self::index(b.x, b.y)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Empty every cell in the match set
    /// Returns the number of cells cleared
    pub fn clear_matched(&mut self, matched: &MatchSet) -> usize {
        let mut cleared = 0;
        for pos in matched.positions() {
            if self.is_occupied(pos.x, pos.y) {
                self.set(pos.x, pos.y, None);
                cleared += 1;
            }
        }
        cleared
    }

    /// Collapse every column downward and refill the vacated top cells
    ///
    /// Per column, occupied cells compact toward the bottom preserving their
    /// relative order (two-pointer walk from the bottom row up), then each
    /// vacated top cell receives a fresh draw from the stream. Refill gems
    /// are NOT screened against creating new runs - cascades depend on that.
    pub fn collapse_and_refill(
        &mut self,
        stream: &mut GemStream,
    ) -> (
        ArrayVec<FallEvent, BOARD_CELLS>,
        ArrayVec<RefillEvent, BOARD_CELLS>,
    ) {
        let size = BOARD_SIZE as usize;
        let mut falls = ArrayVec::new();
        let mut refills = ArrayVec::new();

        for x in 0..size {
            let mut write_y = size;

            // Scan from bottom to top, dropping each gem to the lowest free row
            for read_y in (0..size).rev() {
                if let Some(kind) = self.cells[read_y * size + x] {
                    write_y -= 1;
                    if write_y != read_y {
                        self.cells[write_y * size + x] = Some(kind);
                        self.cells[read_y * size + x] = None;
                        falls.push(FallEvent {
                            x: x as i8,
                            from_y: read_y as i8,
                            to_y: write_y as i8,
                            kind,
                        });
                    }
                }
            }

            // Top-up the vacated cells
            for y in 0..write_y {
                let kind = stream.next();
                self.cells[y * size + x] = Some(kind);
                refills.push(RefillEvent {
                    x: x as i8,
                    y: y as i8,
                    kind,
                });
            }
        }

        (falls, refills)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid as u8 codes (0 = empty, 1..=K = gem kind index + 1)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        let size = BOARD_SIZE as usize;
        for y in 0..size {
            for x in 0..size {
                out[y][x] = match self.cells[y * size + x] {
                    Some(kind) => kind.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let size = BOARD_SIZE as usize;
        assert_eq!(cells_2d.len(), size);
        assert!(cells_2d.iter().all(|row| row.len() == size));

        let mut flat = [None; BOARD_CELLS];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * size + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let size = BOARD_SIZE as usize;
        (0..size)
            .map(|y| {
                let start = y * size;
                self.cells[start..start + size].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
