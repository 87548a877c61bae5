//! Initial conditions for bound orbits around a dominant central mass.

use std::f64::consts::PI;

use crate::simulation::states::NVec2;
use crate::simulation::vector::tangent_vector;

/// Tangential starting velocity for a body at `position`, with the central
/// mass at the origin.
///
/// `|position|` is taken as the semi-major axis, so the speed is the
/// vis-viva value `sqrt(g * central_mass / |position|)` along the
/// counterclockwise tangent. Returns zero for a body sitting on the origin.
pub fn initial_velocity(position: &NVec2, g: f64, central_mass: f64) -> NVec2 {
    let a = position.norm();
    if a == 0.0 {
        return NVec2::zeros();
    }
    let radial = position / a;
    (g * central_mass / a).sqrt() * tangent_vector(&radial)
}

/// Kepler's third law: `T = 2 pi sqrt(a^3 / (g * m))`.
pub fn orbital_period(semi_major_axis: f64, g: f64, total_mass: f64) -> f64 {
    2.0 * PI * (semi_major_axis.powi(3) / (g * total_mass)).sqrt()
}
