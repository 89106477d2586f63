//! Fixed-step simulation transition
//!
//! One call advances the round by exactly one tick: rotate the shield,
//! integrate the ball, and resolve boundary contact as a deflection, a miss,
//! or a grazing pass.

use crate::consts::*;
use crate::{normalize_degrees, polar_angle_degrees};

use super::events::GameEvent;
use super::state::{GameSnapshot, RoundPhase};

/// Player input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInput {
    /// Whether the player toggled the shield direction since the last tick
    pub reverse_shield: bool,
}

/// Output of one tick: the replacement snapshot plus events in emission order
#[derive(Debug, Clone)]
pub struct StepResult {
    pub snapshot: GameSnapshot,
    pub events: Vec<GameEvent>,
}

/// Shortest-arc separation between two angles in degrees
///
/// Always in [0, 180] and symmetric in its arguments.
#[inline]
pub fn angular_separation(a: f32, b: f32) -> f32 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Advance the round by one tick
///
/// Pure over its inputs: the snapshot comes in by value and the result
/// carries the replacement. Outside the `Active` phase this is the identity
/// and emits nothing.
pub fn step(snapshot: GameSnapshot, input: &StepInput) -> StepResult {
    if snapshot.phase != RoundPhase::Active {
        return StepResult {
            snapshot,
            events: Vec::new(),
        };
    }

    let mut snap = snapshot;
    let mut events = Vec::new();

    // Direction toggle applies before any motion this tick
    if input.reverse_shield {
        snap.shield.reverse();
    }
    snap.shield.advance();

    // The tick is the time unit: one velocity's worth of travel
    snap.ball.pos += snap.ball.vel;

    let dist = snap.ball.pos.length();
    if dist >= CONTACT_RADIUS {
        // Touching the boundary band; equality counts as contact
        let ball_angle = polar_angle_degrees(snap.ball.pos);
        let diff = angular_separation(ball_angle, snap.shield.angle);

        if diff < SHIELD_ARC / 2.0 {
            // Deflection: bounce straight back through the center, then grow
            // the speed scalar and rescale the velocity to match it
            snap.ball.vel = -snap.ball.vel;
            snap.ball.speed += SPEED_INCREMENT;
            snap.ball.vel = snap.ball.vel.normalize() * snap.ball.speed;
            // Nudge clear of the contact band so the next tick can't re-trigger
            snap.ball.pos += snap.ball.vel * 2.0;
            snap.score += 1;
            events.push(GameEvent::Scored);
        } else if dist > ESCAPE_RADIUS {
            snap.phase = RoundPhase::Over;
            events.push(GameEvent::Missed);
        }
        // Still inside the escape margin: a grazing pass. The ball keeps its
        // velocity and the round continues; the contact test may fire again
        // next tick until the ball either deflects or escapes.
    }

    StepResult {
        snapshot: snap,
        events,
    }
}
