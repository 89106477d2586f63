//! Events emitted by the simulation
//!
//! At most one event per tick; `Scored` and `Missed` are mutually exclusive.

use serde::{Deserialize, Serialize};

/// Outcome of a boundary contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball hit the shield arc and was deflected back
    Scored,
    /// Ball escaped past the boundary outside the shield arc
    Missed,
}
