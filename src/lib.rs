//! gemgrid (workspace facade crate).
//!
//! This package keeps the `gemgrid::{core,engine,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use gemgrid_core as core;
pub use gemgrid_engine as engine;
pub use gemgrid_types as types;
