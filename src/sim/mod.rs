//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-driven time only (frame-rate independent)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod ledger;
pub mod levels;
pub mod round;

pub use clock::RotationClock;
pub use ledger::CollisionLedger;
pub use levels::{LevelDef, ProgressionTable};
pub use round::{PlantOutcome, RoundPhase, RoundSnapshot, RoundState};
