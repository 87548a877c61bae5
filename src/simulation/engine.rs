//! High-level runtime engine settings
//!
//! Selects the integration scheme, how initial velocities are seeded, how
//! radii follow mass, and how consumption transfers mass to the player.

pub use crate::configuration::config::{ConsumePolicy, InitialVelocityMode, IntegrationScheme, RadiusMode};
use crate::configuration::config::EngineConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    pub integration_scheme: IntegrationScheme, // euler_cromer, euler or verlet
    pub initial_velocity_mode: InitialVelocityMode, // vis_viva or random
    pub radius_mode: RadiusMode, // fixed or density_derived
    pub consume_policy: ConsumePolicy, // gradual or instant
}

impl From<&EngineConfig> for Engine {
    fn from(e_cfg: &EngineConfig) -> Self {
        Self {
            integration_scheme: e_cfg.integration_scheme,
            initial_velocity_mode: e_cfg.initial_velocity_mode,
            radius_mode: e_cfg.radius_mode,
            consume_policy: e_cfg.consume_policy,
        }
    }
}
