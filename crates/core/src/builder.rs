//! Initial board builder - match-free starting boards
//!
//! Fills the board in raster order, redrawing any candidate that would
//! complete a run of 3 with the two already-placed neighbors to its left or
//! above. With an alphabet of 5 kinds at most two kinds are ever excluded,
//! so the rejection loop always terminates.

use gemgrid_types::MIN_RUN_LEN;

use crate::board::Board;
use crate::rng::GemStream;

/// Build a fully occupied board with no pre-existing matches
pub fn build_board(stream: &mut GemStream) -> Board {
    let mut board = Board::new();
    let size = board.size() as i8;

    for y in 0..size {
        for x in 0..size {
            let kind = loop {
                let candidate = stream.next();
                let completes_row = x >= (MIN_RUN_LEN as i8 - 1)
                    && board.kind_at(x - 1, y) == Some(candidate)
                    && board.kind_at(x - 2, y) == Some(candidate);
                let completes_column = y >= (MIN_RUN_LEN as i8 - 1)
                    && board.kind_at(x, y - 1) == Some(candidate)
                    && board.kind_at(x, y - 2) == Some(candidate);
                if !completes_row && !completes_column {
                    break candidate;
                }
            };
            board.set(x, y, Some(kind));
        }
    }

    board
}
