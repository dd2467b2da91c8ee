//! Game session - the single owner of board, stream, and score
//!
//! One `GameSession` holds everything a match-3 round needs. The session is
//! the engine's public boundary: a presentation layer feeds it swap intents
//! and renders the step lists it returns; it never reaches into the board
//! directly.

use gemgrid_core::board::Board;
use gemgrid_core::builder::build_board;
use gemgrid_core::rng::GemStream;
use gemgrid_core::scoring;
use gemgrid_core::snapshot::BoardSnapshot;
use gemgrid_types::{Phase, Pos, SwapRejection};

use crate::resolve::{check_swap, resolve_cascade, SwapOutcome};

/// Complete session state
///
/// The state machine per swap is `Idle -> Validating -> Resolving -> Idle`;
/// only `Idle` and `Resolving` are ever observable because validation is
/// transient. While `Resolving`, the cascade owns the board exclusively and
/// further swap intents are rejected rather than interleaved.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    stream: GemStream,
    score: u32,
    phase: Phase,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
}

impl GameSession {
    /// Create a new session with the given RNG seed
    ///
    /// The starting board is fully occupied and match-free for every seed.
    pub fn new(seed: u32) -> Self {
        let mut stream = GemStream::new(seed);
        let board = build_board(&mut stream);
        Self {
            board,
            stream,
            score: 0,
            phase: Phase::Idle,
            episode_id: 0,
        }
    }

    /// Create a session over a caller-supplied board
    ///
    /// For embedders restoring an observed position, and for tests that
    /// need a hand-built fixture. The board is taken as-is; if it already
    /// contains matches the next accepted swap will resolve them too.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            stream: GemStream::new(seed),
            score: 0,
            phase: Phase::Idle,
            episode_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Current RNG state (feeding it to `new` replays the future sequence)
    pub fn seed(&self) -> u32 {
        self.stream.seed()
    }

    /// Attempt to swap two cells and resolve the board
    ///
    /// Rejections (out-of-bounds, non-adjacent, no run created, cascade in
    /// flight) leave the board bit-identical to its pre-call state. On
    /// acceptance the entire cascade is computed eagerly and the session
    /// score grows by the returned `score_delta`.
    pub fn attempt_swap(&mut self, a: Pos, b: Pos) -> SwapOutcome {
        if self.phase != Phase::Idle {
            return SwapOutcome::Rejected(SwapRejection::ResolutionInProgress);
        }

        if let Err(rejection) = check_swap(&mut self.board, a, b) {
            return SwapOutcome::Rejected(rejection);
        }

        self.phase = Phase::Resolving;
        let result = resolve_cascade(&mut self.board, &mut self.stream);
        self.score = scoring::accumulate(self.score, result.score_delta);
        self.phase = Phase::Idle;

        SwapOutcome::Resolved(result)
    }

    /// Start a fresh episode: rebuild the board from the current stream
    /// state, zero the score, and bump the episode id
    pub fn reset(&mut self) {
        self.board = build_board(&mut self.stream);
        self.score = 0;
        self.phase = Phase::Idle;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.write_board(&self.board);
        out.score = self.score;
        out.seed = self.stream.seed();
        out.episode_id = self.episode_id;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
