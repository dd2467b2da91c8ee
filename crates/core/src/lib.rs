//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the board data structure and the rules primitives
//! the cascade resolver is built from. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Testable**: Comprehensive unit tests for every rule
//! - **Portable**: Can run in any environment (GUI shell, headless, wasm)
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with index-exchange swaps, gravity collapse, refill
//! - [`builder`]: match-free initial board generation via rejection sampling
//! - [`matcher`]: maximal run-of-3+ detection and the local swap probe
//! - [`rng`]: seeded LCG and the uniform gem stream
//! - [`scoring`]: flat 100-points-per-matched-cell rule
//! - [`snapshot`]: read-only observable state for presentation refresh
//!
//! # Example
//!
//! ```
//! use gemgrid_core::{build_board, find_matches, GemStream};
//!
//! let mut stream = GemStream::new(12345);
//! let board = build_board(&mut stream);
//!
//! // A freshly built board is always stable
//! assert!(board.is_full());
//! assert!(find_matches(&board).is_empty());
//! ```

pub mod board;
pub mod builder;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use gemgrid_types as types;

// Re-export commonly used items for convenience
pub use board::{Board, FallEvent, RefillEvent};
pub use builder::build_board;
pub use matcher::{find_matches, run_through, MatchSet};
pub use rng::{GemStream, SimpleRng};
pub use scoring::{accumulate, score_for_pass};
pub use snapshot::BoardSnapshot;
