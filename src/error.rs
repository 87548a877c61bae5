//! Error types for the physics core and configuration loading.

use thiserror::Error;

use crate::simulation::states::BodyId;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("body index {index} out of bounds for {len} bodies")]
    InvalidIndex { index: usize, len: usize },

    #[error("the player (index 0) cannot be consumed")]
    PlayerNotRemovable,

    #[error("timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),

    #[error("consume amount must be finite and non-negative, got {0}")]
    InvalidAmount(f64),

    #[error("body {0:?} is no longer in the set")]
    UnknownBody(BodyId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
