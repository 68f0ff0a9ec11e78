//! Data-driven game balance
//!
//! Tunables that are not part of the per-level progression. Injected by
//! value into `RoundState::new` so two rounds with different balance can
//! coexist in one process; never process-wide mutable state.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Round-level balance knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tuning {
    /// World-space angle where a projectile always arrives (radians)
    pub impact_angle: f32,
    /// Rotation speed multiplier while a spike is active (> 1)
    pub spike_multiplier: f32,
    /// Spike duration once armed (milliseconds)
    pub spike_duration_ms: f32,
    /// Max gap between plants for a combo to continue (milliseconds)
    pub combo_window_ms: f32,
    /// Near-miss classification bound (degrees, strict upper bound on gap)
    pub near_miss_deg: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            impact_angle: consts::IMPACT_ANGLE,
            spike_multiplier: consts::SPIKE_MULTIPLIER,
            spike_duration_ms: consts::SPIKE_DURATION_MS,
            combo_window_ms: consts::COMBO_WINDOW_MS,
            near_miss_deg: consts::NEAR_MISS_DEG,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let t = Tuning::default();
        assert!(t.spike_multiplier > 1.0);
        assert!(t.spike_duration_ms > 0.0);
        assert!(t.combo_window_ms > 0.0);
        assert!(t.near_miss_deg > 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).expect("serialize");
        let parsed = Tuning::from_json(&json).expect("parse");
        assert_eq!(parsed.combo_window_ms, t.combo_window_ms);
        assert_eq!(parsed.impact_angle, t.impact_angle);
    }
}
