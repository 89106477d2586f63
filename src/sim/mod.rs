//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick is the sole unit of time (no delta scaling)
//! - Snapshots move by value; `step` never mutates its input
//! - No rendering, scheduling, or platform dependencies

pub mod events;
pub mod state;
pub mod step;

pub use events::GameEvent;
pub use state::{Ball, GameSnapshot, RoundPhase, Shield};
pub use step::{StepInput, StepResult, angular_separation, step};
