//! Configuration types for loading game sessions from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! session. A session consists of:
//!
//! - [`EngineConfig`]     – integration scheme and the physics policies
//! - [`ParametersConfig`] – physical constants and the initial-state ranges
//! - [`ControlsConfig`]   – ship handling and consumption rules
//! - [`DisplayConfig`]    – window size and starting zoom
//! - [`GameConfig`]       – top-level wrapper used to load a session from YAML
//!
//! Every field has a default, so a file only needs the values it changes.
//!
//! # YAML format
//! ```yaml
//! engine:
//!   integration_scheme: "euler_cromer"    # or "euler", "verlet"
//!   initial_velocity_mode: "vis_viva"     # or "random"
//!   radius_mode: "fixed"                  # or "density_derived"
//!   consume_policy: "gradual"             # or "instant"
//!
//! parameters:
//!   g: 39.478                 # AU^3 yr^-2 M_sun^-1
//!   min_separation: 1.0e-6    # distance floor in the force law
//!   radius_scale: 500.0
//!   system_size: 30.0         # AU
//!   n_planets: 7
//!   seed: 42
//!   planet_mass_range: [1.0e-6, 1.0e-2]
//!
//! controls:
//!   thrust: 1.0e-4
//!   eat_distance: 1.0         # AU
//!   dt: 0.01                  # yr per frame
//!
//! display:
//!   width: 1920
//!   height: 1080
//! ```
//!
//! The session builder then maps this configuration into the runtime
//! structures (`Engine`, `Parameters`, `Controls`, `ScreenProjection`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::params::G_AU_YR_MSUN;

/// Time integrator used by `BodySet::step`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationScheme {
    #[serde(rename = "euler_cromer")] // Semi-implicit Euler: kick, then drift with the new velocity
    #[default]
    EulerCromer,

    #[serde(rename = "euler")] // Explicit Euler: drift with the old velocity, then kick
    Euler,

    #[serde(rename = "verlet")] // Velocity Verlet: half kick, drift, half kick, two force evaluations
    Verlet,
}

/// How bodies other than the star get their starting velocity
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialVelocityMode {
    #[serde(rename = "vis_viva")] // tangential vis-viva speed around the star
    #[default]
    VisViva,

    #[serde(rename = "random")] // uniform components in `random_velocity_range`
    Random,
}

/// Whether a body's radius follows its mass
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusMode {
    #[serde(rename = "fixed")] // computed once at creation
    #[default]
    Fixed,

    #[serde(rename = "density_derived")] // recomputed from mass and density on every mass change
    DensityDerived,
}

/// How `consume` moves mass from a target to the player
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsumePolicy {
    #[serde(rename = "gradual")] // transfer `amount` per call, remove once depleted
    #[default]
    Gradual,

    #[serde(rename = "instant")] // remove on the first call, transferring everything
    Instant,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub integration_scheme: IntegrationScheme,
    pub initial_velocity_mode: InitialVelocityMode,
    pub radius_mode: RadiusMode,
    pub consume_policy: ConsumePolicy,
}

/// Physical constants and the ranges the initial state is drawn from
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // distance floor in the force law
    pub radius_scale: f64, // multiplier on physical radii
    pub system_size: f64, // half-width of the spawn square [AU]
    pub n_planets: usize, // planets besides player and star
    pub seed: u64, // deterministic seed to make sessions reproducible
    pub player_mass: f64, // [M_sun]
    pub player_density: f64, // [M_sun/AU^3]
    pub star_mass: f64, // [M_sun]
    pub star_density: f64, // mean solar density [M_sun/AU^3]
    pub planet_mass_range: [f64; 2],
    pub density_range: [f64; 2],
    pub random_velocity_range: [f64; 2],
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: G_AU_YR_MSUN,
            min_separation: 1.0e-6,
            radius_scale: 500.0,
            system_size: 30.0,
            n_planets: 7,
            seed: 42,
            player_mass: 1.0e-4,
            player_density: 5.0e6,
            star_mass: 1.0,
            star_density: 2.3e6,
            planet_mass_range: [1.0e-6, 1.0e-2],
            density_range: [1.0e6, 1.0e7],
            random_velocity_range: [-0.1, 1.1],
        }
    }
}

/// Ship handling and consumption rules applied by the game session
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ControlsConfig {
    pub thrust: f64, // boost force; acceleration is thrust / player mass
    pub flow_rate: f64, // mass burned per unit time while boosting
    pub rotation_step: f64, // degrees per frame
    pub eat_distance: f64, // max surface distance for consumption [AU]
    pub dry_mass: f64, // ship mass without fuel
    pub consume_rate: f64, // mass transferred per frame while consuming
    pub dt: f64, // initial timestep [yr]
    pub speed_up: f64, // dt multiplier
    pub slow_down: f64, // dt multiplier
    pub zoom_in: f64, // zoom multiplier
    pub zoom_out: f64, // zoom multiplier
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            thrust: 1.0e-4,
            flow_rate: 1.0e-5,
            rotation_step: 2.0,
            eat_distance: 1.0,
            dry_mass: 1.0e-5,
            consume_rate: 1.0e-4,
            dt: 0.01,
            speed_up: 1.02,
            slow_down: 0.98,
            zoom_in: 1.025,
            zoom_out: 0.975,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            zoom: 1.0,
        }
    }
}

/// Top-level session configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub controls: ControlsConfig,
    pub display: DisplayConfig,
}

impl GameConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: GameConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        positive("parameters.g", p.g)?;
        positive("parameters.min_separation", p.min_separation)?;
        positive("parameters.radius_scale", p.radius_scale)?;
        positive("parameters.system_size", p.system_size)?;
        positive("parameters.player_mass", p.player_mass)?;
        positive("parameters.player_density", p.player_density)?;
        positive("parameters.star_mass", p.star_mass)?;
        positive("parameters.star_density", p.star_density)?;
        positive_range("parameters.planet_mass_range", p.planet_mass_range)?;
        positive_range("parameters.density_range", p.density_range)?;
        ordered_range("parameters.random_velocity_range", p.random_velocity_range)?;

        let c = &self.controls;
        positive("controls.dt", c.dt)?;
        positive("controls.speed_up", c.speed_up)?;
        positive("controls.slow_down", c.slow_down)?;
        positive("controls.zoom_in", c.zoom_in)?;
        positive("controls.zoom_out", c.zoom_out)?;
        non_negative("controls.thrust", c.thrust)?;
        non_negative("controls.flow_rate", c.flow_rate)?;
        non_negative("controls.eat_distance", c.eat_distance)?;
        non_negative("controls.dry_mass", c.dry_mass)?;
        non_negative("controls.consume_rate", c.consume_rate)?;

        let d = &self.display;
        if d.width < 2 || d.height < 2 {
            return Err(ConfigError::Invalid(format!(
                "display must be at least 2x2, got {}x{}",
                d.width, d.height
            )));
        }
        positive("display.zoom", d.zoom)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be non-negative, got {value}")))
    }
}

fn ordered_range(name: &str, [lo, hi]: [f64; 2]) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be [low, high], got [{lo}, {hi}]")))
    }
}

fn positive_range(name: &str, range: [f64; 2]) -> Result<(), ConfigError> {
    ordered_range(name, range)?;
    positive(name, range[0])
}
