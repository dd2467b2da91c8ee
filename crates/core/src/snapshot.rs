//! Read-only session snapshots for presentation refresh

use gemgrid_types::{Phase, BOARD_SIZE};

use crate::board::Board;

/// Flat observable state of a session at one instant
///
/// The grid uses u8 codes: 0 = empty, 1..=K = gem kind index + 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub grid: [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub score: u32,
    pub seed: u32,
    pub episode_id: u32,
    pub phase: Phase,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.score = 0;
        self.seed = 0;
        self.episode_id = 0;
        self.phase = Phase::Idle;
    }

    /// Fill the grid portion from a board
    pub fn write_board(&mut self, board: &Board) {
        board.write_u8_grid(&mut self.grid);
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            score: 0,
            seed: 0,
            episode_id: 0,
            phase: Phase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemgrid_types::GemKind;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = BoardSnapshot::default();
        assert!(snapshot.grid.iter().flatten().all(|&c| c == 0));
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.phase, Phase::Idle);
    }

    #[test]
    fn test_write_board_codes() {
        let mut board = Board::new();
        board.set(2, 6, Some(GemKind::Emerald));

        let mut snapshot = BoardSnapshot::default();
        snapshot.write_board(&board);

        assert_eq!(snapshot.grid[6][2], GemKind::Emerald.index() as u8 + 1);
        assert_eq!(snapshot.grid[0][0], 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut snapshot = BoardSnapshot {
            score: 1200,
            seed: 99,
            episode_id: 3,
            phase: Phase::Resolving,
            ..Default::default()
        };
        snapshot.grid[4][4] = 2;
        snapshot.clear();
        assert_eq!(snapshot, BoardSnapshot::default());
    }
}
