pub mod error;
pub mod simulation;
pub mod configuration;
pub mod game;
pub mod visualization;
pub mod benchmark;

pub use error::{ConfigError, SimError};
pub use simulation::states::{Body, BodyId, NVec2};
pub use simulation::body_set::{BodySet, PLAYER, REFERENCE_FRAME};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::orbit::{initial_velocity, orbital_period};
pub use simulation::vector::{bound_angle, tangent_vector, unit_vector};

pub use configuration::config::{GameConfig, EngineConfig, ParametersConfig, ControlsConfig, DisplayConfig};
pub use configuration::config::{IntegrationScheme, InitialVelocityMode, RadiusMode, ConsumePolicy};

pub use game::session::{GameSession, Controls, ControlInput, SessionState, TickOutcome};

pub use visualization::{projection::ScreenProjection, game_vis2d::run_game};

pub use benchmark::benchmark::bench_step;
