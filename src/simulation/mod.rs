pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod forces;
pub mod orbit;
pub mod integrator;
pub mod body_set;
pub mod scenario;
