//! The simulated solar system: a dense, compacting set of bodies.
//!
//! Index 0 is always the player and is also the reference frame: after every
//! [`BodySet::step`] the player sits at rest at the origin. Removing a body
//! shifts every later body down by one index, so indices held across a
//! removal must be refreshed, either by re-querying or through the stable
//! [`BodyId`] handles (`index_of`, `consume_body`).

use log::{debug, info, warn};

use crate::error::{Result, SimError};
use crate::simulation::engine::{ConsumePolicy, Engine, IntegrationScheme, RadiusMode};
use crate::simulation::forces::{potential_energy, AccelSet, NewtonianGravity};
use crate::simulation::integrator::{euler, euler_cromer, verlet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{density_radius, Body, BodyId, NVec2};
use crate::simulation::vector::norm;

/// Index of the player body.
pub const PLAYER: usize = 0;

/// Index of the body whose frame the simulation is expressed in.
pub const REFERENCE_FRAME: usize = PLAYER;

pub struct BodySet {
    bodies: Vec<Body>,
    engine: Engine,
    parameters: Parameters,
    gravity: NewtonianGravity,
    forces: AccelSet,
    next_id: u32,
}

impl BodySet {
    /// Create an empty set; the first body pushed becomes the player.
    pub fn new(engine: Engine, parameters: Parameters) -> Self {
        let gravity = NewtonianGravity {
            g: parameters.g,
            min_separation: parameters.min_separation,
        };
        Self {
            bodies: Vec::new(),
            engine,
            parameters,
            gravity,
            forces: AccelSet::new().with(gravity),
            next_id: 0,
        }
    }

    /// Append a body and return its handle. Radius is derived from mass and density.
    pub fn push(&mut self, x: NVec2, v: NVec2, m: f64, rho: f64) -> BodyId {
        debug_assert!(m > 0.0, "bodies must have positive mass");
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, x, v, m, rho, self.parameters.radius_scale));
        id
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only snapshot of every body, in index order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Raw mutable access for external game rules (thrust, fuel burn).
    ///
    /// Mass written here is not checked; use [`BodySet::set_mass`] to keep
    /// the radius policy and the positive-mass invariant.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn player(&self) -> Option<&Body> {
        self.bodies.get(PLAYER)
    }

    pub fn player_mut(&mut self) -> Option<&mut Body> {
        self.bodies.get_mut(PLAYER)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Current index of the body with handle `id`, if it is still alive.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn positions(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    pub fn velocities(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.v).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    pub fn radii(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.radius).collect()
    }

    /// Gravitational acceleration of every body in the current state.
    pub fn accelerations(&self) -> Vec<NVec2> {
        let mut out = vec![NVec2::zeros(); self.bodies.len()];
        self.forces.accumulate_accels(&self.bodies, &mut out);
        out
    }

    /// Advance the system by `dt`. Body count never changes here.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt <= 0.0 {
            warn!("rejected step with dt = {dt}");
            return Err(SimError::InvalidTimestep(dt));
        }
        if self.bodies.is_empty() {
            return Ok(());
        }

        match self.engine.integration_scheme {
            IntegrationScheme::EulerCromer => euler_cromer(&mut self.bodies, &self.forces, dt, REFERENCE_FRAME),
            IntegrationScheme::Euler => euler(&mut self.bodies, &self.forces, dt, REFERENCE_FRAME),
            IntegrationScheme::Verlet => verlet(&mut self.bodies, &self.forces, dt, REFERENCE_FRAME),
        }
        Ok(())
    }

    /// Signed distance from the player's centre to each other body's surface.
    ///
    /// Element `k` belongs to body `k + 1`. A negative value means the player
    /// is inside that body.
    pub fn distance_to_player_surface(&self) -> Vec<f64> {
        let Some(player) = self.bodies.first() else {
            return Vec::new();
        };
        self.bodies[1..]
            .iter()
            .map(|b| norm(&(b.x - player.x)) - b.radius)
            .collect()
    }

    /// Index and surface distance of the non-player body closest to the player.
    pub fn nearest_to_player(&self) -> Option<(usize, f64)> {
        self.distance_to_player_surface()
            .into_iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, d)| (k + 1, d))
    }

    /// True when the player is inside any other body.
    pub fn player_collided(&self) -> bool {
        self.distance_to_player_surface().iter().any(|&d| d < 0.0)
    }

    /// Transfer mass from body `index` to the player.
    ///
    /// Returns `Ok(true)` when the body was fully consumed and removed, which
    /// shifts every later body down by one index. Under the gradual policy a
    /// partial transfer of `amount` returns `Ok(false)`.
    pub fn consume(&mut self, index: usize, amount: f64) -> Result<bool> {
        self.check_target(index)?;
        if !amount.is_finite() || amount < 0.0 {
            warn!("rejected consume of body {index} with amount {amount}");
            return Err(SimError::InvalidAmount(amount));
        }

        let remaining = self.bodies[index].m - amount;
        let full = match self.engine.consume_policy {
            ConsumePolicy::Instant => true,
            ConsumePolicy::Gradual => remaining <= 0.0,
        };

        if full {
            let body = self.bodies.remove(index);
            self.bodies[PLAYER].m += body.m;
            self.refresh_radius(PLAYER);
            info!(
                "body {:?} consumed at index {index}, player mass now {:.3e}, {} bodies left",
                body.id,
                self.bodies[PLAYER].m,
                self.bodies.len()
            );
            return Ok(true);
        }

        self.bodies[PLAYER].m += amount;
        self.bodies[index].m = remaining;
        self.refresh_radius(PLAYER);
        self.refresh_radius(index);
        debug!("transferred {amount:.3e} from body {index}, {remaining:.3e} left");
        Ok(false)
    }

    /// [`BodySet::consume`] addressed by handle instead of index.
    pub fn consume_body(&mut self, id: BodyId, amount: f64) -> Result<bool> {
        let index = self.index_of(id).ok_or(SimError::UnknownBody(id))?;
        self.consume(index, amount)
    }

    /// Set the mass of body `index`, keeping the radius policy.
    pub fn set_mass(&mut self, index: usize, m: f64) -> Result<()> {
        if index >= self.bodies.len() {
            return Err(SimError::InvalidIndex { index, len: self.bodies.len() });
        }
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidAmount(m));
        }
        self.bodies[index].m = m;
        self.refresh_radius(index);
        Ok(())
    }

    /// Add `dv` to the player's velocity.
    pub fn boost_player(&mut self, dv: NVec2) {
        if let Some(player) = self.bodies.get_mut(PLAYER) {
            player.v += dv;
        }
    }

    /// Burn `dm` of the player's mass. Returns the mass actually burned,
    /// which is zero when the burn would leave the player massless.
    pub fn burn_fuel(&mut self, dm: f64) -> f64 {
        let Some(player) = self.bodies.get_mut(PLAYER) else {
            return 0.0;
        };
        if dm.is_nan() || dm <= 0.0 || dm >= player.m {
            return 0.0;
        }
        player.m -= dm;
        self.refresh_radius(PLAYER);
        dm
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        potential_energy(&self.gravity, &self.bodies)
    }

    fn check_target(&self, index: usize) -> Result<()> {
        let len = self.bodies.len();
        debug_assert!(index != PLAYER, "the player cannot be consumed");
        debug_assert!(index < len, "consume index {index} out of bounds ({len} bodies)");
        if index == PLAYER {
            warn!("rejected consume of the player");
            return Err(SimError::PlayerNotRemovable);
        }
        if index >= len {
            warn!("rejected consume of index {index} with {len} bodies");
            return Err(SimError::InvalidIndex { index, len });
        }
        Ok(())
    }

    fn refresh_radius(&mut self, index: usize) {
        if self.engine.radius_mode == RadiusMode::DensityDerived {
            let b = &mut self.bodies[index];
            b.radius = density_radius(b.m, b.rho, self.parameters.radius_scale);
        }
    }
}
