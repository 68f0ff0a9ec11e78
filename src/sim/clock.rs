//! Rotation clock for the spinning target
//!
//! Advances the target's absolute rotation each tick from the current
//! angular speed, direction, and elapsed delta. Carries two transient
//! modifiers: periodic direction flips on a timer, and time-limited speed
//! spikes. Pure function of elapsed time - callable at any frame rate.

use serde::{Deserialize, Serialize};

use crate::wrap_angle;

/// Advances the target's angular position; owns flip and spike timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationClock {
    /// Absolute rotation (radians, wrapped to (-π, π])
    rotation: f32,
    /// Base angular speed (radians/sec, always positive)
    base_speed: f32,
    /// Rotation direction, +1 or -1
    direction: f32,
    /// Seconds between direction flips; 0 disables flipping
    flip_interval_secs: f32,
    /// Countdown to the next flip (seconds)
    flip_timer_secs: f32,
    /// Speed multiplier applied while a spike is active (> 1)
    spike_multiplier: f32,
    /// Remaining spike time (milliseconds); spike active while > 0
    spike_timer_ms: f32,
}

impl RotationClock {
    pub fn new(
        base_speed: f32,
        direction: f32,
        flip_interval_secs: f32,
        spike_multiplier: f32,
    ) -> Self {
        Self {
            rotation: 0.0,
            base_speed,
            direction,
            flip_interval_secs,
            flip_timer_secs: flip_interval_secs,
            spike_multiplier,
            spike_timer_ms: 0.0,
        }
    }

    /// Advance by the elapsed frame delta; returns the new absolute rotation.
    ///
    /// Flip timing accumulates across ticks: on trigger the timer re-arms by
    /// adding the interval, so overshoot carries into the next interval and
    /// a large delta spanning several intervals flips several times.
    pub fn advance(&mut self, delta_ms: f32) -> f32 {
        let dt = delta_ms / 1000.0;

        if self.flip_interval_secs > 0.0 {
            self.flip_timer_secs -= dt;
            while self.flip_timer_secs <= 0.0 {
                self.direction = -self.direction;
                self.flip_timer_secs += self.flip_interval_secs;
            }
        }

        let velocity = self.base_speed * self.direction * self.effective_multiplier();
        self.rotation = wrap_angle(self.rotation + velocity * dt);

        if self.spike_timer_ms > 0.0 {
            self.spike_timer_ms -= delta_ms;
        }

        self.rotation
    }

    /// (Re)arm the spike timer for `duration_ms`
    pub fn arm_spike(&mut self, duration_ms: f32) {
        self.spike_timer_ms = duration_ms;
    }

    #[inline]
    fn effective_multiplier(&self) -> f32 {
        if self.spike_timer_ms > 0.0 {
            self.spike_multiplier
        } else {
            1.0
        }
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Signed effective angular velocity (radians/sec), spike-adjusted
    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.base_speed * self.direction * self.effective_multiplier()
    }

    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    #[inline]
    pub fn spike_active(&self) -> bool {
        self.spike_timer_ms > 0.0
    }
}
