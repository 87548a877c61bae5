//! Small 2D vector helpers shared by the physics core and the game rules.
//!
//! Angles handed to [`unit_vector`] follow the ship-rotation convention:
//! angle 0 points "up" along +y and positive angles turn towards +x.

use super::states::NVec2;

/// Unit vector for `angle` (radians): `(sin(angle), cos(angle))`.
pub fn unit_vector(angle: f64) -> NVec2 {
    NVec2::new(angle.sin(), angle.cos())
}

/// `v` rotated 90 degrees counterclockwise: `(x, y) -> (-y, x)`.
pub fn tangent_vector(v: &NVec2) -> NVec2 {
    NVec2::new(-v.y, v.x)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn bound_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Euclidean norm, kept as a free function for call sites that work on raw vectors.
pub fn norm(v: &NVec2) -> f64 {
    v.norm()
}
