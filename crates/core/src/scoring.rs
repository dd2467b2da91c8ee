//! Scoring module - flat per-cell match scoring
//!
//! The rule is deliberately simple: every cell marked in a detection pass
//! is worth [`SCORE_PER_GEM`] points, with no bonus for run length beyond 3
//! and no multiplier for chain depth. A cascade's total is the plain sum
//! over its passes.

use gemgrid_types::SCORE_PER_GEM;

/// Score for one detection pass: matched cell count times the flat rate
pub fn score_for_pass(matched_cells: usize) -> u32 {
    (matched_cells as u32).saturating_mul(SCORE_PER_GEM)
}

/// Add a pass score onto a running total without overflow
pub fn accumulate(total: u32, delta: u32) -> u32 {
    total.saturating_add(delta)
}
