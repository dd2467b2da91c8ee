//! Match detection - maximal-run scanning over the board
//!
//! A match is a horizontal or vertical run of at least [`MIN_RUN_LEN`] cells
//! holding the same gem kind. Detection is a pure function of the board:
//! two independent linear scans (rows, then columns), each marking every
//! cell of a maximal run. A cell sitting on both a horizontal and a
//! vertical run is marked exactly once thanks to set semantics.

use arrayvec::ArrayVec;

use gemgrid_types::{Pos, BOARD_CELLS, BOARD_SIZE, MIN_RUN_LEN};

use crate::board::Board;

/// Set of matched cells from one detection pass
///
/// Backed by a 64-bit mask, one bit per cell in raster order, so membership
/// and cardinality are O(1) and union is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSet {
    bits: u64,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(x: usize, y: usize) -> u64 {
        1u64 << (y * BOARD_SIZE as usize + x)
    }

    /// Mark a cell. Out-of-bounds coordinates are ignored and return false.
    pub fn insert(&mut self, x: i8, y: i8) -> bool {
        if !Pos::new(x, y).in_bounds() {
            return false;
        }
        self.bits |= Self::bit(x as usize, y as usize);
        true
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        Pos::new(x, y).in_bounds() && self.bits & Self::bit(x as usize, y as usize) != 0
    }

    /// Number of matched cells
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Matched cells in raster order (left to right, top to bottom)
    pub fn positions(&self) -> ArrayVec<Pos, BOARD_CELLS> {
        let size = BOARD_SIZE as usize;
        let mut out = ArrayVec::new();
        let mut bits = self.bits;
        while bits != 0 {
            let i = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            out.push(Pos::new((i % size) as i8, (i / size) as i8));
        }
        out
    }
}

/// Scan the whole board and return every cell on a run of 3 or more
///
/// Runs are marked maximally: a run of length L contributes all L cells,
/// not just the first 3. Empty cells never match.
pub fn find_matches(board: &Board) -> MatchSet {
    let size = BOARD_SIZE as usize;
    let mut matched = MatchSet::new();

    // Horizontal scan: maximal runs per row
    for y in 0..size {
        let mut x = 0;
        while x < size {
            let Some(kind) = board.kind_at(x as i8, y as i8) else {
                x += 1;
                continue;
            };
            let mut run = 1;
            while x + run < size && board.kind_at((x + run) as i8, y as i8) == Some(kind) {
                run += 1;
            }
            if run >= MIN_RUN_LEN {
                for dx in 0..run {
                    matched.insert((x + dx) as i8, y as i8);
                }
            }
            x += run;
        }
    }

    // Vertical scan: the transposed mirror
    for x in 0..size {
        let mut y = 0;
        while y < size {
            let Some(kind) = board.kind_at(x as i8, y as i8) else {
                y += 1;
                continue;
            };
            let mut run = 1;
            while y + run < size && board.kind_at(x as i8, (y + run) as i8) == Some(kind) {
                run += 1;
            }
            if run >= MIN_RUN_LEN {
                for dy in 0..run {
                    matched.insert(x as i8, (y + dy) as i8);
                }
            }
            y += run;
        }
    }

    matched
}

/// Check whether a run of 3 or more passes through the given cell
///
/// This is the O(1)-radius local probe the swap validator uses: it extends
/// outward from (x, y) along its row and column only, so a match elsewhere
/// on the board does not authorize a swap here.
pub fn run_through(board: &Board, x: i8, y: i8) -> bool {
    let Some(kind) = board.kind_at(x, y) else {
        return false;
    };

    let mut horizontal = 1;
    let mut dx = x - 1;
    while board.kind_at(dx, y) == Some(kind) {
        horizontal += 1;
        dx -= 1;
    }
    let mut dx = x + 1;
    while board.kind_at(dx, y) == Some(kind) {
        horizontal += 1;
        dx += 1;
    }
    if horizontal >= MIN_RUN_LEN {
        return true;
    }

    let mut vertical = 1;
    let mut dy = y - 1;
    while board.kind_at(x, dy) == Some(kind) {
        vertical += 1;
        dy -= 1;
    }
    let mut dy = y + 1;
    while board.kind_at(x, dy) == Some(kind) {
        vertical += 1;
        dy += 1;
    }
    vertical >= MIN_RUN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemgrid_types::GemKind;

    fn board_with_row(y: i8, kinds: &[GemKind]) -> Board {
        let mut board = Board::new();
        for (x, &kind) in kinds.iter().enumerate() {
            board.set(x as i8, y, Some(kind));
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_matches() {
        let board = Board::new();
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_horizontal_run_of_three() {
        let board = board_with_row(2, &[GemKind::Ruby, GemKind::Ruby, GemKind::Ruby]);
        let matched = find_matches(&board);
        assert_eq!(matched.len(), 3);
        assert!(matched.contains(0, 2));
        assert!(matched.contains(1, 2));
        assert!(matched.contains(2, 2));
    }

    #[test]
    fn test_run_of_two_does_not_match() {
        let board = board_with_row(0, &[GemKind::Topaz, GemKind::Topaz]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_maximal_run_marks_all_cells() {
        let board = board_with_row(5, &[GemKind::Emerald; 5]);
        let matched = find_matches(&board);
        assert_eq!(matched.len(), 5);
        for x in 0..5 {
            assert!(matched.contains(x, 5));
        }
    }

    #[test]
    fn test_vertical_run() {
        let mut board = Board::new();
        for y in 3..6 {
            board.set(4, y, Some(GemKind::Sapphire));
        }
        let matched = find_matches(&board);
        assert_eq!(matched.len(), 3);
        for y in 3..6 {
            assert!(matched.contains(4, y));
        }
    }

    #[test]
    fn test_cross_overlap_counted_once() {
        // Horizontal run through (2, 2) crossing a vertical run through (2, 2)
        let mut board = Board::new();
        for x in 1..4 {
            board.set(x, 2, Some(GemKind::Amethyst));
        }
        board.set(2, 1, Some(GemKind::Amethyst));
        board.set(2, 3, Some(GemKind::Amethyst));

        let matched = find_matches(&board);
        // 3 horizontal + 3 vertical sharing the center cell
        assert_eq!(matched.len(), 5);
        assert!(matched.contains(2, 2));
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let mut board = Board::new();
        board.set(0, 0, Some(GemKind::Ruby));
        board.set(1, 0, Some(GemKind::Ruby));
        board.set(3, 0, Some(GemKind::Ruby));
        board.set(4, 0, Some(GemKind::Ruby));
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_detection_is_deterministic() {
        let board = board_with_row(7, &[GemKind::Topaz; 4]);
        assert_eq!(find_matches(&board), find_matches(&board));
    }

    #[test]
    fn test_run_through_detects_local_runs() {
        let board = board_with_row(4, &[GemKind::Ruby, GemKind::Ruby, GemKind::Ruby]);
        // Every cell of the run sees it, including from the middle
        assert!(run_through(&board, 0, 4));
        assert!(run_through(&board, 1, 4));
        assert!(run_through(&board, 2, 4));
        // A neighbor off the run does not
        assert!(!run_through(&board, 3, 4));
    }

    #[test]
    fn test_run_through_empty_cell() {
        let board = Board::new();
        assert!(!run_through(&board, 3, 3));
    }

    #[test]
    fn test_run_through_out_of_bounds() {
        let board = board_with_row(0, &[GemKind::Ruby; 3]);
        assert!(!run_through(&board, -1, 0));
        assert!(!run_through(&board, 0, 8));
    }

    #[test]
    fn test_match_set_semantics() {
        let mut set = MatchSet::new();
        assert!(set.is_empty());
        assert!(set.insert(3, 4));
        assert!(set.insert(3, 4)); // duplicate insert is a no-op
        assert_eq!(set.len(), 1);
        assert!(set.contains(3, 4));
        assert!(!set.contains(4, 3));
        assert!(!set.insert(8, 0)); // out of bounds ignored
        assert_eq!(set.len(), 1);

        let positions = set.positions();
        assert_eq!(positions.as_slice(), &[Pos::new(3, 4)]);
    }

    #[test]
    fn test_match_set_raster_order() {
        let mut set = MatchSet::new();
        set.insert(5, 2);
        set.insert(1, 0);
        set.insert(0, 7);
        let positions = set.positions();
        assert_eq!(
            positions.as_slice(),
            &[Pos::new(1, 0), Pos::new(5, 2), Pos::new(0, 7)]
        );
    }
}
