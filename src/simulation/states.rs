//! Core state types for the simulated solar system.
//!
//! A `Body` is one row of the [`BodySet`](super::body_set::BodySet): a point
//! mass with a position, velocity, density and a radius derived from them.
//! Rows are addressed by dense index, which shifts when a body is removed,
//! and by a stable `BodyId` handle that never changes.

use std::f64::consts::PI;

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Stable handle of a body; survives compaction of the body set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec2, // position [AU]
    pub v: NVec2, // velocity [AU/yr]
    pub m: f64, // mass [solar masses]
    pub rho: f64, // density [solar masses/AU^3]
    pub radius: f64, // collision radius [AU, scaled]
}

impl Body {
    /// Build a body whose radius is derived from its mass and density.
    pub fn new(id: BodyId, x: NVec2, v: NVec2, m: f64, rho: f64, radius_scale: f64) -> Self {
        Self {
            id,
            x,
            v,
            m,
            rho,
            radius: density_radius(m, rho, radius_scale),
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }
}

/// Radius of a uniform sphere of mass `m` and density `rho`, times `scale`.
///
/// `radius = cbrt(m / (rho * 4/3 * pi)) * scale`
pub fn density_radius(m: f64, rho: f64, scale: f64) -> f64 {
    (m / (rho * 4.0 / 3.0 * PI)).cbrt() * scale
}
