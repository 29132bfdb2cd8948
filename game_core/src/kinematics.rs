//! Scalar velocity + direction angle <-> 2D speed components.
//!
//! Direction follows mathematical convention: 0 is rightward, angles grow
//! counter-clockwise. Screen y grows downward, so callers apply the
//! vertical component with a flipped sign when moving.

use glam::Vec2;

/// Decompose a scalar velocity and a direction angle (radians) into
/// horizontal and vertical speed components.
pub fn speed_components(velocity: f32, direction: f32) -> Vec2 {
    Vec2::new(velocity * direction.cos(), velocity * direction.sin())
}

/// Recover a direction angle from speed components.
///
/// `atan` alone cannot distinguish quadrants, so a leftward horizontal
/// speed gets a +pi correction. A horizontal speed of exactly zero would
/// divide by zero; that degenerate case resolves to 0 radians.
pub fn direction_from_components(hspeed: f32, vspeed: f32) -> f32 {
    if hspeed == 0.0 {
        return 0.0;
    }
    let mut direction = (vspeed / hspeed).atan();
    if hspeed < 0.0 {
        direction += std::f32::consts::PI;
    }
    direction
}
