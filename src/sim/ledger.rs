//! Collision ledger for planted offsets
//!
//! Stores the offset angle of every successfully planted projectile,
//! relative to the rotating target's own frame, and answers proximity
//! queries in wrapped angle space. The ledger does not enforce the
//! no-collision precondition itself - `RoundState` is the sole authority
//! that sequences check-then-record.

use serde::{Deserialize, Serialize};

use crate::wrap_angle;

/// Planted offset angles, insertion order, append-only until cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionLedger {
    offsets: Vec<f32>,
}

impl CollisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would planting at `candidate` land within `threshold` radians of any
    /// stored offset? Strict inequality: exactly-at-threshold is not a
    /// collision.
    pub fn would_collide(&self, candidate: f32, threshold: f32) -> bool {
        self.offsets
            .iter()
            .any(|&stored| wrap_angle(candidate - stored).abs() < threshold)
    }

    /// Smallest wrapped angular distance from `candidate` to any stored
    /// offset; infinity when the ledger is empty. Used for near-miss
    /// classification.
    pub fn nearest_gap(&self, candidate: f32) -> f32 {
        self.offsets
            .iter()
            .map(|&stored| wrap_angle(candidate - stored).abs())
            .fold(f32::INFINITY, f32::min)
    }

    /// Append an offset. Caller must have verified no collision first.
    pub fn record(&mut self, offset: f32) {
        self.offsets.push(wrap_angle(offset));
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Stored offsets in plant order
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}
