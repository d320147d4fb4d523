//! Damped spring integrator
//!
//! Second-order filter that smooths a target displacement into gradual
//! motion. Semi-implicit Euler at a fixed timestep; with the reference
//! tuning (damping 15, stiffness 150) the response is lightly underdamped
//! and settles within a few hundred milliseconds.

use glam::Vec2;

/// Per-axis-pair spring state (offset + velocity)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spring {
    pub offset: Vec2,
    pub velocity: Vec2,
}

impl Spring {
    /// Advance the spring one timestep toward `target`.
    ///
    /// Acceleration is `stiffness * (target - offset) - damping * velocity`;
    /// velocity integrates before position so energy stays bounded at the
    /// 120 Hz step.
    pub fn step(&mut self, target: Vec2, damping: f32, stiffness: f32, dt: f32) {
        let accel = (target - self.offset) * stiffness - self.velocity * damping;
        self.velocity += accel * dt;
        self.offset += self.velocity * dt;
    }

    /// True once the spring is effectively at rest on `target`
    pub fn settled(&self, target: Vec2, epsilon: f32) -> bool {
        (self.offset - target).length() < epsilon && self.velocity.length() < epsilon
    }
}
