//! Hairspin headless demo
//!
//! Runs the sim with a scripted player to exercise the full loop: tap,
//! flight delay, resolve against the arrival-time rotation. Useful for
//! balance tuning and as a reference for how a presentation layer drives
//! the core.
//!
//! Usage: `hairspin [seed]`

use hairspin::consts::{FLIGHT_DURATION_MS, STICK_RADIUS};
use hairspin::{
    PlantOutcome, ProgressionTable, RoundPhase, RoundState, Tuning, planted_world_position,
};

/// Frame delta for the demo loop (~60 fps)
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Scripted pause between taps (milliseconds)
const TAP_GAP_MS: f32 = 350.0;

/// One projectile in flight: counts down to arrival
struct Flight {
    remaining_ms: f32,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let table = ProgressionTable::standard();
    let total_levels = table.len();
    let mut state = RoundState::new(table, Tuning::default(), seed);

    log::info!("hairspin demo, seed {seed}, {total_levels} levels");

    let mut flight: Option<Flight> = None;
    let mut tap_timer_ms = TAP_GAP_MS;
    let mut levels_cleared = 0usize;

    loop {
        state.tick(FRAME_MS);

        // Resolve an arrived projectile against the rotation NOW
        let arrived = match flight.as_mut() {
            Some(f) => {
                f.remaining_ms -= FRAME_MS;
                f.remaining_ms <= 0.0
            }
            None => false,
        };
        if arrived {
            flight = None;
            let arrival_rotation = state.rotation();
            match state.resolve(arrival_rotation) {
                PlantOutcome::Planted {
                    offset,
                    near_miss,
                    combo,
                    remaining,
                } => {
                    let pos = planted_world_position(offset, arrival_rotation, STICK_RADIUS);
                    log::info!(
                        "planted at offset {:.3} ({:.0}, {:.0}), {} to go, combo x{}{}",
                        offset,
                        pos.x,
                        pos.y,
                        remaining,
                        combo,
                        if near_miss { " [near miss!]" } else { "" },
                    );
                }
                PlantOutcome::Win { final_level, .. } => {
                    levels_cleared += 1;
                    if final_level {
                        log::info!("all {levels_cleared} levels cleared!");
                        break;
                    }
                    let next = state.level() + 1;
                    log::info!("level {} cleared, onward to {}", state.level(), next);
                    state.reset(next);
                    tap_timer_ms = TAP_GAP_MS;
                }
                PlantOutcome::Lose { offset } => {
                    let snap = state.snapshot();
                    log::info!(
                        "bounced off at offset {:.3}: game over on level {} with {}/{} planted",
                        offset,
                        snap.level,
                        snap.planted,
                        snap.target_count,
                    );
                    break;
                }
                PlantOutcome::Ignored => {}
            }
        }

        // Scripted player: tap at a steady cadence while nothing is in flight
        if state.phase() == RoundPhase::Playing && flight.is_none() {
            tap_timer_ms -= FRAME_MS;
            if tap_timer_ms <= 0.0 && state.begin_attempt() {
                flight = Some(Flight {
                    remaining_ms: FLIGHT_DURATION_MS,
                });
                tap_timer_ms = TAP_GAP_MS;
            }
        }
    }

    log::info!("demo finished: {levels_cleared} level(s) cleared");
}
