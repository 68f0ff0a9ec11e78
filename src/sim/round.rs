//! Round state machine and tap resolution
//!
//! The tricky part of Hairspin: the target keeps rotating while a projectile
//! is in flight, so a plant must be resolved against the rotation sampled at
//! the instant of arrival, never the rotation at launch. Offsets are stored
//! in the rotating frame (`impact angle - rotation at arrival`) so planted
//! projectiles stay glued to the target as it spins.
//!
//! Attempts follow a two-phase protocol: `begin_attempt` at the tap (the
//! presentation layer starts the flight tween), `resolve` when the flight
//! ends. At most one attempt may be pending; extra calls are ignored rather
//! than rejected with an error.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::RotationClock;
use super::ledger::CollisionLedger;
use super::levels::ProgressionTable;
use crate::tuning::Tuning;
use crate::wrap_angle;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Target count reached; terminal until reset
    Win,
    /// A plant collided; terminal until reset
    Lose,
}

/// Result of resolving one plant attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlantOutcome {
    /// Plant landed; round continues
    Planted {
        offset: f32,
        near_miss: bool,
        combo: u32,
        remaining: usize,
    },
    /// Plant landed and reached the level's target count
    Win { offset: f32, final_level: bool },
    /// Plant collided with an existing one; the offset was not recorded
    Lose { offset: f32 },
    /// Contract violation (not playing, or no attempt pending); no-op
    Ignored,
}

/// Read-only state summary for UI/score display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub level: usize,
    pub planted: usize,
    pub target_count: usize,
    pub phase: RoundPhase,
    pub combo: u32,
}

/// One attempt of one level: owns the clock, the ledger, and the phase.
///
/// Single-threaded, frame-driven; all operations are synchronous and
/// non-blocking. A multi-threaded host must serialize all mutating calls
/// through one owner.
#[derive(Debug, Clone)]
pub struct RoundState {
    table: ProgressionTable,
    tuning: Tuning,
    clock: RotationClock,
    ledger: CollisionLedger,
    level: usize,
    phase: RoundPhase,
    combo: u32,
    /// Accumulated game time (milliseconds), advanced by `tick`
    time_ms: f32,
    /// Time of the last successful plant, for the combo window
    last_plant_ms: Option<f32>,
    /// One attempt in flight at most
    pending: bool,
    rng: Pcg32,
}

impl RoundState {
    /// Create a round at level 1 with a seeded RNG
    pub fn new(table: ProgressionTable, tuning: Tuning, seed: u64) -> Self {
        let mut state = Self {
            clock: RotationClock::new(1.0, 1.0, 0.0, tuning.spike_multiplier),
            ledger: CollisionLedger::new(),
            level: 1,
            phase: RoundPhase::Playing,
            combo: 0,
            time_ms: 0.0,
            last_plant_ms: None,
            pending: false,
            rng: Pcg32::seed_from_u64(seed),
            table,
            tuning,
        };
        state.reset(1);
        state
    }

    /// Advance the clock and timers by one frame delta. No-op outside
    /// `Playing` so the target freezes on win/lose overlays.
    pub fn tick(&mut self, delta_ms: f32) {
        if self.phase != RoundPhase::Playing {
            return;
        }
        self.time_ms += delta_ms;
        self.clock.advance(delta_ms);
    }

    /// Mark one attempt as pending (call at the tap, before the flight
    /// tween starts). Returns false without side effects when not playing
    /// or an attempt is already in flight.
    pub fn begin_attempt(&mut self) -> bool {
        if self.phase != RoundPhase::Playing || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Resolve the pending attempt against the rotation sampled at the
    /// instant the projectile arrived.
    ///
    /// Exactly one outcome is returned and the ledger mutation (or its
    /// absence, on a collision) is atomic with it.
    pub fn resolve(&mut self, arrival_rotation: f32) -> PlantOutcome {
        if self.phase != RoundPhase::Playing || !self.pending {
            return PlantOutcome::Ignored;
        }
        self.pending = false;

        let def = *self.table.get(self.level);
        let threshold = def.threshold_rad();

        // Offset in the rotating frame, from the arrival-time rotation
        let offset = wrap_angle(self.tuning.impact_angle - arrival_rotation);

        if self.ledger.would_collide(offset, threshold) {
            log::debug!(
                "collision at offset {:.3} (level {}, {} planted)",
                offset,
                self.level,
                self.ledger.len()
            );
            self.phase = RoundPhase::Lose;
            return PlantOutcome::Lose { offset };
        }

        // Gap is sampled before recording: the candidate itself would
        // otherwise always be the nearest neighbor at distance zero.
        let gap = self.ledger.nearest_gap(offset);
        let near_miss =
            gap.is_finite() && gap > threshold && gap < self.tuning.near_miss_deg.to_radians();

        self.ledger.record(offset);

        self.combo = match self.last_plant_ms {
            Some(last) if self.time_ms - last < self.tuning.combo_window_ms => self.combo + 1,
            _ => 1,
        };
        self.last_plant_ms = Some(self.time_ms);

        if self.rng.random::<f32>() < def.spike_chance {
            self.clock.arm_spike(self.tuning.spike_duration_ms);
        }

        if self.ledger.len() >= def.target_count {
            self.phase = RoundPhase::Win;
            let final_level = self.table.is_last(self.level);
            log::debug!("level {} cleared (final: {})", self.level, final_level);
            return PlantOutcome::Win {
                offset,
                final_level,
            };
        }

        PlantOutcome::Planted {
            offset,
            near_miss,
            combo: self.combo,
            remaining: def.target_count - self.ledger.len(),
        }
    }

    /// Re-initialize for a level (clamped into range): clears the ledger,
    /// re-parameterizes the clock, and re-enters `Playing`. Even levels
    /// start rotating reversed.
    pub fn reset(&mut self, level: usize) {
        self.level = self.table.clamp_level(level);
        let def = *self.table.get(self.level);
        let direction = if self.level % 2 == 0 { -1.0 } else { 1.0 };

        self.clock = RotationClock::new(
            def.speed,
            direction,
            def.flip_interval_secs,
            self.tuning.spike_multiplier,
        );
        self.ledger.clear();
        self.phase = RoundPhase::Playing;
        self.combo = 0;
        self.time_ms = 0.0;
        self.last_plant_ms = None;
        self.pending = false;
    }

    /// Current absolute rotation of the target (radians, wrapped)
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.clock.rotation()
    }

    /// Signed effective angular velocity (radians/sec), spike-adjusted
    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.clock.angular_velocity()
    }

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn attempt_pending(&self) -> bool {
        self.pending
    }

    /// Offsets planted so far, in plant order (rotating frame)
    pub fn planted_offsets(&self) -> &[f32] {
        self.ledger.offsets()
    }

    pub fn table(&self) -> &ProgressionTable {
        &self.table
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            level: self.level,
            planted: self.ledger.len(),
            target_count: self.table.get(self.level).target_count,
            phase: self.phase,
            combo: self.combo,
        }
    }
}
