//! Build fully-initialized game sessions from configuration
//!
//! Takes a `GameConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the body set at t = 0: player at index 0, star at index 1, planets after
//!
//! The body set is drawn from a `ChaChaRng` seeded with `parameters.seed`, so
//! the same configuration always produces the same solar system.

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::configuration::config::GameConfig;
use crate::simulation::body_set::BodySet;
use crate::simulation::engine::{Engine, InitialVelocityMode};
use crate::simulation::orbit::initial_velocity;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Index of the central star right after initialisation.
pub const STAR: usize = 1;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: BodySet,
}

impl Scenario {
    pub fn build_scenario(cfg: &GameConfig) -> Self {
        let engine = Engine::from(&cfg.engine);
        let parameters = Parameters::from(&cfg.parameters);
        let system = populate(engine, parameters.clone());

        info!(
            "built scenario: {} bodies, {:?} integration, seed {}",
            system.len(),
            engine.integration_scheme,
            parameters.seed
        );

        Self {
            engine,
            parameters,
            system,
        }
    }
}

/// Draw the initial solar system.
///
/// The star is fixed at the origin before any velocity is computed, since
/// vis-viva velocities assume the central mass sits there.
pub fn populate(engine: Engine, parameters: Parameters) -> BodySet {
    let mut rng = ChaChaRng::seed_from_u64(parameters.seed);
    let p = &parameters;
    let size = p.system_size;

    // (position, mass, density) for player, star, then planets
    let mut rows = Vec::with_capacity(p.n_planets + 2);
    rows.push((NVec2::new(size, 0.0), p.player_mass, p.player_density));
    rows.push((NVec2::zeros(), p.star_mass, p.star_density));
    for _ in 0..p.n_planets {
        let x = NVec2::new(
            rng.random_range(-size..=size),
            rng.random_range(-size..=size),
        );
        let m = rng.random_range(p.planet_mass_range[0]..=p.planet_mass_range[1]);
        let rho = rng.random_range(p.density_range[0]..=p.density_range[1]);
        rows.push((x, m, rho));
    }

    let velocities: Vec<NVec2> = rows
        .iter()
        .enumerate()
        .map(|(i, (x, _, _))| {
            if i == STAR {
                return NVec2::zeros();
            }
            match engine.initial_velocity_mode {
                InitialVelocityMode::VisViva => initial_velocity(x, p.g, p.star_mass),
                InitialVelocityMode::Random => {
                    let [lo, hi] = p.random_velocity_range;
                    NVec2::new(rng.random_range(lo..=hi), rng.random_range(lo..=hi))
                }
            }
        })
        .collect();

    let mut system = BodySet::new(engine, parameters);
    for ((x, m, rho), v) in rows.into_iter().zip(velocities) {
        system.push(x, v, m, rho);
    }
    system
}
