//! Game state and core simulation types
//!
//! Everything that describes one round lives in the [`GameSnapshot`]
//! aggregate. The snapshot is `Copy`: the clock hands it to `step` by value
//! and replaces it with the returned one, so no state is shared across tick
//! boundaries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundPhase {
    /// Created, waiting for the first start command
    #[default]
    NotStarted,
    /// Ball in flight, shield rotating
    Active,
    /// Ball escaped past the shield - round ended
    Over,
}

/// The ball
///
/// `speed` tracks the velocity magnitude separately so deflection speed-ups
/// accumulate without drift; it equals `vel.length()` after every velocity
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position relative to the orbit center
    pub pos: Vec2,
    /// Velocity in units/tick
    pub vel: Vec2,
    /// Velocity magnitude, kept in sync with `vel`
    pub speed: f32,
}

impl Ball {
    /// Ball at rest in the orbit center
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: 0.0,
        }
    }

    /// Launch from the center in the given direction (radians)
    ///
    /// Any angle with a non-zero speed yields a non-zero velocity, so the
    /// speed-rescale on deflection never divides by zero.
    pub fn launch(&mut self, angle: f32, speed: f32) {
        self.pos = Vec2::ZERO;
        self.vel = polar_to_cartesian(speed, angle);
        self.speed = speed;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's shield - an arc riding the orbit boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    /// Center angle of the arc (degrees, normalized to [0, 360))
    pub angle: f32,
    /// Rotation speed (signed degrees/tick); the player input flips the sign
    pub angular_speed: f32,
}

impl Shield {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            angular_speed: SHIELD_START_SPEED,
        }
    }

    /// Rotate by one tick's worth of angular speed
    pub fn advance(&mut self) {
        self.angle = crate::normalize_degrees(self.angle + self.angular_speed);
    }

    /// Flip the rotation direction
    pub fn reverse(&mut self) {
        self.angular_speed = -self.angular_speed;
    }
}

impl Default for Shield {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GameSnapshot {
    /// Current phase
    pub phase: RoundPhase,
    /// Successful deflections this round
    pub score: u32,
    /// The ball
    pub ball: Ball,
    /// The shield
    pub shield: Shield,
}

impl GameSnapshot {
    /// Fresh snapshot waiting for a start command
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new round and launch the ball in the given direction
    /// (radians). Score, shield, and ball all return to their start values.
    pub fn start_round(&mut self, launch_angle: f32) {
        self.score = 0;
        self.shield = Shield::new();
        self.ball = Ball::new();
        self.ball.launch(launch_angle, BALL_START_SPEED);
        self.phase = RoundPhase::Active;
    }
}
