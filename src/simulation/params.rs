//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and the separation floor used by the force law,
//! - radius scaling and system bounds,
//! - the initial-state ranges and the deterministic seed

use crate::configuration::config::ParametersConfig;

/// Gravitational constant in AU^3 yr^-2 M_sun^-1 (4 pi^2).
pub const G_AU_YR_MSUN: f64 = 39.478;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // floor on pair distance in the force law
    pub radius_scale: f64, // display scaling applied to physical radii
    pub system_size: f64, // half-width of the spawn region [AU]
    pub n_planets: usize, // planets besides the player and the star
    pub seed: u64, // deterministic seed
    pub player_mass: f64, // initial player mass
    pub player_density: f64, // player density (radius only)
    pub star_mass: f64, // central star mass
    pub star_density: f64, // mean solar density
    pub planet_mass_range: [f64; 2], // uniform draw for planet masses
    pub density_range: [f64; 2], // uniform draw for planet densities
    pub random_velocity_range: [f64; 2], // per-component draw in random velocity mode
}

impl From<&ParametersConfig> for Parameters {
    fn from(p_cfg: &ParametersConfig) -> Self {
        Self {
            g: p_cfg.g,
            min_separation: p_cfg.min_separation,
            radius_scale: p_cfg.radius_scale,
            system_size: p_cfg.system_size,
            n_planets: p_cfg.n_planets,
            seed: p_cfg.seed,
            player_mass: p_cfg.player_mass,
            player_density: p_cfg.player_density,
            star_mass: p_cfg.star_mass,
            star_density: p_cfg.star_density,
            planet_mass_range: p_cfg.planet_mass_range,
            density_range: p_cfg.density_range,
            random_velocity_range: p_cfg.random_velocity_range,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from(&ParametersConfig::default())
    }
}
