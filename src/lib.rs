//! Orbit Catch - a circular-orbit deflection game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, shield overlap, scoring)
//! - `clock`: Fixed-step round lifecycle driver and observer surface
//! - `settings`: Data-driven configuration for the demo runner

pub mod clock;
pub mod settings;
pub mod sim;

pub use clock::{RoundObserver, SimulationClock};
pub use settings::DemoSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Radius of the circular boundary the ball bounces inside
    pub const ORBIT_RADIUS: f32 = 120.0;
    /// Ball radius
    pub const BALL_RADIUS: f32 = 8.0;

    /// Shield defaults - an arc riding the orbit boundary
    pub const SHIELD_ARC: f32 = 60.0; // degrees, centered on the shield angle
    pub const SHIELD_THICKNESS: f32 = 10.0;
    /// Shield rotation speed at round start (degrees/tick)
    pub const SHIELD_START_SPEED: f32 = 1.0;

    /// Ball speed at launch (units/tick)
    pub const BALL_START_SPEED: f32 = 1.0;
    /// Speed gained on each successful deflection
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Radial distance at which the ball counts as touching the boundary
    pub const CONTACT_RADIUS: f32 = ORBIT_RADIUS - SHIELD_THICKNESS / 2.0 - BALL_RADIUS;
    /// Past this distance an undeflected ball has escaped - round over
    pub const ESCAPE_RADIUS: f32 = ORBIT_RADIUS + 10.0;

    /// Nominal tick rate for real-time pacing (ticks/second)
    pub const TICK_RATE: u32 = 60;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 360.0 {
        angle -= 360.0;
    }
    while angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Polar angle of a point in degrees, normalized to [0, 360)
#[inline]
pub fn polar_angle_degrees(pos: Vec2) -> f32 {
    normalize_degrees(pos.y.atan2(pos.x).to_degrees())
}
