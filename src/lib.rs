//! Hairspin - a rotating-target planting arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic game logic (rotation clock, collision ledger,
//!   level progression, round state machine)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, tween/flight animation, audio and input are owned by an
//! external presentation layer. The contract at that seam: the presentation
//! layer calls `tick` once per frame, `begin_attempt` on tap, and
//! `resolve` with the rotation sampled at the instant the projectile
//! physically arrives - never the rotation at launch time.

pub mod sim;
pub mod tuning;

pub use sim::{
    CollisionLedger, LevelDef, PlantOutcome, ProgressionTable, RotationClock, RoundPhase,
    RoundSnapshot, RoundState,
};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World-space angle where a straight-up projectile always arrives:
    /// the bottom of the circle in the target's un-rotated frame.
    pub const IMPACT_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Rotation speed multiplier while a spike is active
    pub const SPIKE_MULTIPLIER: f32 = 1.75;
    /// How long a spike lasts once armed (milliseconds)
    pub const SPIKE_DURATION_MS: f32 = 1500.0;

    /// Two plants closer together than this count as a combo (milliseconds)
    pub const COMBO_WINDOW_MS: f32 = 2000.0;

    /// A plant whose nearest gap is under this (but over the collision
    /// threshold) classifies as a near miss (degrees)
    pub const NEAR_MISS_DEG: f32 = 15.0;

    /// Stick radius of the default target sprite, pixels (demo/presentation)
    pub const STICK_RADIUS: f32 = 120.0;
    /// Projectile flight duration, milliseconds (demo/presentation)
    pub const FLIGHT_DURATION_MS: f32 = 200.0;
}

/// Normalize an angle to (-π, π]
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// World position of a planted offset given the target's current rotation.
///
/// Offsets are stored in the rotating frame; world position is re-derived
/// every frame by re-adding the current rotation. The presentation layer
/// uses this to keep planted sprites glued to the target.
#[inline]
pub fn planted_world_position(offset: f32, rotation: f32, radius: f32) -> Vec2 {
    polar_to_cartesian(radius, wrap_angle(rotation + offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wrap_angle_basic() {
        assert!((wrap_angle(0.0)).abs() < 1e-6);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-2.5 * PI) - (-0.5 * PI)).abs() < 1e-5);
        // -π maps to +π (range is half-open at the negative end)
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_planted_world_position_tracks_rotation() {
        // Offset 0 at rotation π/2 sits at the bottom of the circle
        let p = planted_world_position(0.0, PI / 2.0, 100.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 100.0).abs() < 1e-4);

        // Rotating the frame by π carries the plant to the top
        let p = planted_world_position(0.0, PI / 2.0 + PI, 100.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y + 100.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_wrap_angle_in_range(a in -100.0f32..100.0) {
            let w = wrap_angle(a);
            prop_assert!(w > -PI && w <= PI);
        }

        #[test]
        fn prop_wrap_angle_idempotent(a in -100.0f32..100.0) {
            let w = wrap_angle(a);
            prop_assert!((wrap_angle(w) - w).abs() < 1e-6);
        }

        #[test]
        fn prop_wrap_angle_identity_in_range(a in -3.0f32..3.0) {
            // Angles already in range pass through unchanged
            prop_assume!(a > -PI && a <= PI);
            prop_assert!((wrap_angle(a) - a).abs() < 1e-6);
        }
    }
}
