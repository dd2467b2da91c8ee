//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board logic, cascade resolution, presentation
//! adapters).
//!
//! # Board Dimensions
//!
//! - **Size**: 8x8 cells, addressed as (x, y) with x growing rightward and
//!   y growing downward (gravity pulls toward increasing y)
//! - **Alphabet**: 5 gem kinds
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 8 | Board edge length in cells |
//! | `BOARD_CELLS` | 64 | Total cell count |
//! | `GEM_KIND_COUNT` | 5 | Size of the gem alphabet |
//! | `MIN_RUN_LEN` | 3 | Minimum aligned run that matches |
//! | `SCORE_PER_GEM` | 100 | Points per matched cell per pass |
//!
//! # Examples
//!
//! ```
//! use gemgrid_types::{GemKind, Pos, BOARD_SIZE};
//!
//! let gem = GemKind::Ruby;
//! let parsed = GemKind::from_str("ruby").unwrap();
//! assert_eq!(gem, parsed);
//!
//! let a = Pos::new(3, 4);
//! let b = Pos::new(4, 4);
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(Pos::new(4, 5)));
//!
//! assert_eq!(BOARD_SIZE, 8);
//! ```

/// Board edge length in cells (the board is square)
pub const BOARD_SIZE: u8 = 8;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of distinct gem kinds in the alphabet
pub const GEM_KIND_COUNT: usize = 5;

/// Minimum length of an aligned same-kind run that counts as a match
pub const MIN_RUN_LEN: usize = 3;

/// Points awarded per matched cell in a single detection pass
pub const SCORE_PER_GEM: u32 = 100;

/// Gem kinds
///
/// Equality only; there is no ordering semantics between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GemKind {
    Ruby,
    Sapphire,
    Emerald,
    Topaz,
    Amethyst,
}

impl GemKind {
    /// All gem kinds, in index order
    pub const ALL: [GemKind; GEM_KIND_COUNT] = [
        GemKind::Ruby,
        GemKind::Sapphire,
        GemKind::Emerald,
        GemKind::Topaz,
        GemKind::Amethyst,
    ];

    /// Stable index of this kind in [0, GEM_KIND_COUNT)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its stable index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse gem kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(GemKind::Ruby),
            "sapphire" => Some(GemKind::Sapphire),
            "emerald" => Some(GemKind::Emerald),
            "topaz" => Some(GemKind::Topaz),
            "amethyst" => Some(GemKind::Amethyst),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GemKind::Ruby => "ruby",
            GemKind::Sapphire => "sapphire",
            GemKind::Emerald => "emerald",
            GemKind::Topaz => "topaz",
            GemKind::Amethyst => "amethyst",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a gem kind)
pub type Cell = Option<GemKind>;

/// Board coordinate pair
///
/// Signed so that out-of-bounds requests from a caller are representable and
/// can be rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check whether this position lies on the board
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i8 && self.y >= 0 && self.y < BOARD_SIZE as i8
    }

    /// Grid adjacency: Manhattan distance exactly 1
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dx = (self.x as i16 - other.x as i16).abs();
        let dy = (self.y as i16 - other.y as i16).abs();
        dx + dy == 1
    }
}

/// Session phase with respect to cascade resolution
///
/// While a cascade is in flight the board is exclusively owned by the
/// resolver and new swap intents are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Resolving,
}

/// Reasons a swap request is rejected
///
/// Every rejection is recoverable: the board is left bit-identical to its
/// pre-call state and the caller treats the move as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapRejection {
    /// At least one coordinate lies outside the board
    OutOfBounds,
    /// The two cells are not grid-adjacent
    NotAdjacent,
    /// The swap would not create a run of 3 through either swapped cell
    NoMatch,
    /// A cascade is already in flight for this session
    ResolutionInProgress,
}

impl SwapRejection {
    pub fn code(self) -> &'static str {
        match self {
            SwapRejection::OutOfBounds | SwapRejection::NotAdjacent => "invalid_move",
            SwapRejection::NoMatch => "no_match",
            SwapRejection::ResolutionInProgress => "resolution_in_progress",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SwapRejection::OutOfBounds => "swap target out of bounds",
            SwapRejection::NotAdjacent => "swap cells are not adjacent",
            SwapRejection::NoMatch => "swap would not create a match",
            SwapRejection::ResolutionInProgress => "a cascade is already resolving",
        }
    }
}
