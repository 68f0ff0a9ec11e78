//! Level progression table
//!
//! A fixed ordered sequence of level definitions consulted by index.
//! Immutable after construction; data-driven so alternate balance tables
//! can be loaded from JSON or injected directly in tests.

use serde::{Deserialize, Serialize};

/// Parameters for one difficulty step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Base rotation speed (radians/sec)
    pub speed: f32,
    /// Successful plants required to win the level
    pub target_count: usize,
    /// Minimum angular gap between plants (degrees)
    pub threshold_deg: f32,
    /// Seconds between direction flips; 0 = never flips
    pub flip_interval_secs: f32,
    /// Per-plant probability of arming a speed spike, [0, 1]
    pub spike_chance: f32,
}

impl LevelDef {
    #[inline]
    pub fn threshold_rad(&self) -> f32 {
        self.threshold_deg.to_radians()
    }
}

/// Ordered, read-only level table indexed 1..=len
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTable {
    levels: Vec<LevelDef>,
}

/// Rotation speed at level 1 (radians/sec)
const BASE_SPEED: f32 = 1.2;
/// Speed added per level
const SPEED_INCREMENT: f32 = 0.3;
/// Number of levels in the standard progression
const STANDARD_LEVELS: usize = 20;

impl ProgressionTable {
    /// Build a table from an explicit level list (tests, custom balance)
    pub fn new(levels: Vec<LevelDef>) -> Self {
        debug_assert!(!levels.is_empty());
        Self { levels }
    }

    /// The standard 20-step progression: speed ramps linearly, targets grow,
    /// the collision threshold tightens, flips appear from level 5 and
    /// quicken, spikes appear from level 4 and become more likely.
    pub fn standard() -> Self {
        let levels = (1..=STANDARD_LEVELS).map(standard_level).collect();
        Self { levels }
    }

    /// Parse a table from JSON (data-driven balance)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Level definition for `n`, clamped to [1, len]
    pub fn get(&self, n: usize) -> &LevelDef {
        &self.levels[self.clamp_level(n) - 1]
    }

    /// Clamp a level index into the valid range
    pub fn clamp_level(&self, n: usize) -> usize {
        n.clamp(1, self.levels.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// True when `n` is the last level (clearing it clears the game)
    #[inline]
    pub fn is_last(&self, n: usize) -> bool {
        self.clamp_level(n) == self.levels.len()
    }
}

impl Default for ProgressionTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_level(n: usize) -> LevelDef {
    let step = (n - 1) as f32;
    LevelDef {
        speed: BASE_SPEED + SPEED_INCREMENT * step,
        target_count: 10 + (n - 1) / 2,
        threshold_deg: (12.0 - 0.35 * step).max(5.0),
        flip_interval_secs: if n >= 5 {
            (11.0 - 0.4 * n as f32).max(3.0)
        } else {
            0.0
        },
        spike_chance: if n >= 4 {
            (0.03 * (n - 3) as f32).min(0.35)
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_has_twenty_levels() {
        let table = ProgressionTable::standard();
        assert_eq!(table.len(), 20);
    }

    #[test]
    fn test_get_clamps_out_of_range() {
        let table = ProgressionTable::standard();
        assert_eq!(table.get(0).speed, table.get(1).speed);
        assert_eq!(table.get(999).speed, table.get(20).speed);
        assert_eq!(table.clamp_level(0), 1);
        assert_eq!(table.clamp_level(999), 20);
    }

    #[test]
    fn test_speed_ramps_linearly() {
        let table = ProgressionTable::standard();
        assert!((table.get(1).speed - 1.2).abs() < 1e-6);
        assert!((table.get(2).speed - 1.5).abs() < 1e-6);
        for n in 2..=20 {
            assert!(table.get(n).speed > table.get(n - 1).speed);
        }
    }

    #[test]
    fn test_threshold_tightens_but_stays_positive() {
        let table = ProgressionTable::standard();
        for n in 1..=20 {
            let def = table.get(n);
            assert!(def.threshold_deg > 0.0);
            assert!(def.threshold_deg <= 12.0);
            // Every target count must physically fit around the circle
            let needed = def.target_count as f32 * 2.0 * def.threshold_deg;
            assert!(needed < 360.0, "level {} cannot fit its targets", n);
        }
    }

    #[test]
    fn test_early_levels_have_no_flips_or_spikes() {
        let table = ProgressionTable::standard();
        for n in 1..=3 {
            assert_eq!(table.get(n).flip_interval_secs, 0.0);
            assert_eq!(table.get(n).spike_chance, 0.0);
        }
        assert!(table.get(5).flip_interval_secs > 0.0);
        assert!(table.get(4).spike_chance > 0.0);
    }

    #[test]
    fn test_spike_chance_bounded() {
        let table = ProgressionTable::standard();
        for n in 1..=20 {
            let c = table.get(n).spike_chance;
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_is_last() {
        let table = ProgressionTable::standard();
        assert!(!table.is_last(1));
        assert!(!table.is_last(19));
        assert!(table.is_last(20));
        assert!(table.is_last(999)); // clamped
    }

    #[test]
    fn test_from_json_round_trip() {
        let table = ProgressionTable::new(vec![LevelDef {
            speed: 2.0,
            target_count: 5,
            threshold_deg: 10.0,
            flip_interval_secs: 0.0,
            spike_chance: 0.0,
        }]);
        let json = serde_json::to_string(&table).expect("serialize");
        let parsed = ProgressionTable::from_json(&json).expect("parse");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(1), table.get(1));
    }
}
