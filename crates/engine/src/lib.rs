//! Cascade engine - swap validation, resolution, and session state
//!
//! This crate layers the interactive surface on top of `gemgrid-core`:
//!
//! - [`resolve`]: the swap validator and the detect-remove-collapse-refill
//!   fixed-point loop, exposed as pure functions over a board and stream
//! - [`session`]: [`GameSession`], the single-owner boundary a presentation
//!   layer talks to
//!
//! The engine is synchronous and single-threaded. An accepted swap returns
//! the complete, already-resolved cascade as an ordered list of steps; the
//! caller stages the visual reveal at whatever pace it likes and never
//! feeds anything back in.
//!
//! # Example
//!
//! ```
//! use gemgrid_engine::GameSession;
//! use gemgrid_types::Pos;
//!
//! let mut session = GameSession::new(12345);
//!
//! // Non-adjacent requests are always rejected, with no board change
//! let outcome = session.attempt_swap(Pos::new(0, 0), Pos::new(5, 5));
//! assert!(!outcome.is_accepted());
//! assert_eq!(session.score(), 0);
//! ```

pub mod resolve;
pub mod session;

pub use gemgrid_core as core;
pub use gemgrid_types as types;

// Re-export the boundary types for convenience
pub use resolve::{check_swap, resolve_cascade, CascadeResult, CascadeStep, SwapOutcome};
pub use session::GameSession;
