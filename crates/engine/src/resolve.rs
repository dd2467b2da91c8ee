//! Swap validation and cascade resolution
//!
//! The resolver is a pure state transformer: given a board and a gem
//! stream, it computes the entire outcome of an accepted swap eagerly -
//! every detection pass, removal, fall and refill - and hands the ordered
//! step list to the caller. Playback pacing (animation) is entirely the
//! caller's concern; nothing here waits on anything.

use arrayvec::ArrayVec;

use gemgrid_core::board::{Board, FallEvent, RefillEvent};
use gemgrid_core::matcher::{find_matches, run_through, MatchSet};
use gemgrid_core::rng::GemStream;
use gemgrid_core::scoring;
use gemgrid_types::{Pos, SwapRejection, BOARD_CELLS};

/// One detect-score-remove-collapse-refill iteration of a cascade
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeStep {
    /// Cells removed in this pass (each counted once, even on run crossings)
    pub matched: MatchSet,
    /// Points awarded for this pass: matched cell count x 100
    pub score: u32,
    /// Per-column gem relocations, in column-major discovery order
    pub falls: ArrayVec<FallEvent, BOARD_CELLS>,
    /// Fresh gems introduced at vacated top-of-column cells
    pub refills: ArrayVec<RefillEvent, BOARD_CELLS>,
}

/// Full outcome of one accepted swap
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeResult {
    /// Total points for the cascade (sum of the per-step scores)
    pub score_delta: u32,
    /// Ordered steps, first detection pass first; never empty for an
    /// accepted swap
    pub steps: Vec<CascadeStep>,
}

/// Outcome of a swap attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapOutcome {
    /// The request was rejected; the board is unchanged
    Rejected(SwapRejection),
    /// The swap was applied and the board resolved to a stable state
    Resolved(CascadeResult),
}

impl SwapOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapOutcome::Resolved(_))
    }
}

/// Validate and apply a swap, or revert it
///
/// Bounds and adjacency gate first (rejected outright, no mutation). An
/// adjacent in-bounds pair is swapped, then probed locally: does a run of
/// 3+ pass through either swapped cell's new position? If not, the swap is
/// reverted and the board is bit-identical to its pre-call state.
///
/// The probe is deliberately local - a swap whose only effect is a match
/// elsewhere on the board does not qualify.
pub fn check_swap(board: &mut Board, a: Pos, b: Pos) -> Result<(), SwapRejection> {
    if !a.in_bounds() || !b.in_bounds() {
        return Err(SwapRejection::OutOfBounds);
    }
    if !a.is_adjacent(b) {
        return Err(SwapRejection::NotAdjacent);
    }

    board.swap(a, b);
    if run_through(board, a.x, a.y) || run_through(board, b.x, b.y) {
        Ok(())
    } else {
        board.swap(a, b);
        Err(SwapRejection::NoMatch)
    }
}

/// Drive the board to a stable state, recording every step
///
/// Loops detect -> score -> remove -> collapse -> refill until a detection
/// pass comes back empty. Refills draw from the stream without any
/// match-avoidance, so a step's refill may feed the next step's matches.
/// No iteration cap is enforced; the loop converges because every pass
/// removes at least 3 gems and refills are finite per pass.
pub fn resolve_cascade(board: &mut Board, stream: &mut GemStream) -> CascadeResult {
    let mut steps = Vec::new();
    let mut score_delta: u32 = 0;

    loop {
        let matched = find_matches(board);
        if matched.is_empty() {
            break;
        }

        let score = scoring::score_for_pass(matched.len());
        score_delta = scoring::accumulate(score_delta, score);

        board.clear_matched(&matched);
        let (falls, refills) = board.collapse_and_refill(stream);

        steps.push(CascadeStep {
            matched,
            score,
            falls,
            refills,
        });
    }

    CascadeResult { score_delta, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemgrid_types::GemKind;

    /// Board tiled with 2x2 blocks of alternating kind pairs; no run of 3
    /// exists anywhere and Amethyst is left out of the tiling for fixtures.
    fn matchless_board() -> Board {
        let mut board = Board::new();
        for y in 0..8i8 {
            for x in 0..8i8 {
                let index = (x % 2) as usize + 2 * ((y / 2) % 2) as usize;
                board.set(x, y, Some(GemKind::ALL[index]));
            }
        }
        board
    }

    #[test]
    fn test_matchless_fixture_is_actually_matchless() {
        assert!(find_matches(&matchless_board()).is_empty());
    }

    #[test]
    fn test_check_swap_out_of_bounds() {
        let mut board = matchless_board();
        let before = board.clone();
        assert_eq!(
            check_swap(&mut board, Pos::new(-1, 0), Pos::new(0, 0)),
            Err(SwapRejection::OutOfBounds)
        );
        assert_eq!(
            check_swap(&mut board, Pos::new(7, 7), Pos::new(7, 8)),
            Err(SwapRejection::OutOfBounds)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_check_swap_not_adjacent() {
        let mut board = matchless_board();
        let before = board.clone();
        assert_eq!(
            check_swap(&mut board, Pos::new(0, 0), Pos::new(1, 1)),
            Err(SwapRejection::NotAdjacent)
        );
        assert_eq!(
            check_swap(&mut board, Pos::new(0, 0), Pos::new(0, 0)),
            Err(SwapRejection::NotAdjacent)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_check_swap_no_match_reverts() {
        let mut board = matchless_board();
        let before = board.clone();
        // Any swap on the 2x2 tiling creates at most a run of 2
        assert_eq!(
            check_swap(&mut board, Pos::new(3, 3), Pos::new(4, 3)),
            Err(SwapRejection::NoMatch)
        );
        assert_eq!(board, before, "rejected swap must leave the board bit-identical");
    }

    #[test]
    fn test_check_swap_accepts_run_through_swapped_cell() {
        let mut board = matchless_board();
        // Plant Amethyst at (1,4) and (2,4); bringing the one at (4,4) to
        // (3,4) completes the run
        board.set(1, 4, Some(GemKind::Amethyst));
        board.set(2, 4, Some(GemKind::Amethyst));
        board.set(4, 4, Some(GemKind::Amethyst));
        assert!(find_matches(&board).is_empty());

        assert_eq!(
            check_swap(&mut board, Pos::new(3, 4), Pos::new(4, 4)),
            Ok(())
        );
        // The swap was kept
        assert_eq!(board.kind_at(3, 4), Some(GemKind::Amethyst));
        let matched = find_matches(&board);
        assert_eq!(matched.len(), 3);
        for x in 1..4 {
            assert!(matched.contains(x, 4));
        }
    }

    #[test]
    fn test_check_swap_ignores_remote_matches() {
        let mut board = matchless_board();
        // A ready-made match far away must not authorize a local no-op swap
        board.set(5, 0, Some(GemKind::Amethyst));
        board.set(6, 0, Some(GemKind::Amethyst));
        board.set(7, 0, Some(GemKind::Amethyst));

        let before = board.clone();
        assert_eq!(
            check_swap(&mut board, Pos::new(0, 6), Pos::new(1, 6)),
            Err(SwapRejection::NoMatch)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_resolve_cascade_stable_board_yields_nothing() {
        let mut board = matchless_board();
        let mut stream = GemStream::new(5);
        let result = resolve_cascade(&mut board, &mut stream);
        assert_eq!(result.score_delta, 0);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_resolve_cascade_single_run() {
        let mut board = matchless_board();
        board.set(1, 4, Some(GemKind::Amethyst));
        board.set(2, 4, Some(GemKind::Amethyst));
        board.set(3, 4, Some(GemKind::Amethyst));

        let mut stream = GemStream::new(99);
        let result = resolve_cascade(&mut board, &mut stream);

        assert!(!result.steps.is_empty());
        let first = &result.steps[0];
        assert_eq!(first.matched.len(), 3);
        assert_eq!(first.score, 300);
        // Only the three matched columns move
        assert!(first.falls.iter().all(|f| (1..=3).contains(&f.x)));
        assert_eq!(first.refills.len(), 3);
        assert!(first.refills.iter().all(|r| r.y == 0));

        // The cascade total is the sum of its per-step scores
        let sum: u32 = result.steps.iter().map(|s| s.score).sum();
        assert_eq!(result.score_delta, sum);

        // And the board it leaves behind is stable
        assert!(find_matches(&board).is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_resolve_cascade_converges_across_seeds() {
        for seed in 0..100 {
            let mut board = matchless_board();
            board.set(1, 4, Some(GemKind::Amethyst));
            board.set(2, 4, Some(GemKind::Amethyst));
            board.set(3, 4, Some(GemKind::Amethyst));

            let mut stream = GemStream::new(seed);
            let result = resolve_cascade(&mut board, &mut stream);
            assert!(
                result.steps.len() <= 50,
                "seed {seed} cascaded for {} steps",
                result.steps.len()
            );
            assert!(find_matches(&board).is_empty());
        }
    }
}
