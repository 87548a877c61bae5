//! Game rules layered on top of the physics core.
//!
//! A `GameSession` is advanced once per rendered frame by the host loop with
//! the player's current `ControlInput`. Each tick applies the controls,
//! steps the body set, then checks proximity for collision and consumption.
//! Nothing here knows about windows, sprites or keyboards.

use log::info;

use crate::configuration::config::{ControlsConfig, GameConfig};
use crate::error::Result;
use crate::simulation::body_set::BodySet;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyId;
use crate::simulation::vector::{bound_angle, unit_vector};
use crate::visualization::projection::ScreenProjection;

/// Smallest timestep reachable by repeatedly slowing the simulation down.
pub const MIN_DT: f64 = 1.0e-9;

/// Ship handling and consumption rules
#[derive(Debug, Clone)]
pub struct Controls {
    pub thrust: f64,
    pub flow_rate: f64,
    pub rotation_step: f64, // degrees
    pub eat_distance: f64,
    pub dry_mass: f64,
    pub consume_rate: f64,
    pub speed_up: f64,
    pub slow_down: f64,
    pub zoom_in: f64,
    pub zoom_out: f64,
}

impl From<&ControlsConfig> for Controls {
    fn from(c: &ControlsConfig) -> Self {
        Self {
            thrust: c.thrust,
            flow_rate: c.flow_rate,
            rotation_step: c.rotation_step,
            eat_distance: c.eat_distance,
            dry_mass: c.dry_mass,
            consume_rate: c.consume_rate,
            speed_up: c.speed_up,
            slow_down: c.slow_down,
            zoom_in: c.zoom_in,
            zoom_out: c.zoom_out,
        }
    }
}

/// Buttons held during one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlInput {
    pub boost: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub consume: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub speed_up: bool,
    pub slow_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// The player ended up inside another body.
    Destroyed,
    /// Every other body has been consumed.
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub state: SessionState,
    /// Some body's surface is within eating distance of the player.
    pub in_range: bool,
    /// Body fully consumed during this tick.
    pub consumed: Option<BodyId>,
}

pub struct GameSession {
    system: BodySet,
    controls: Controls,
    projection: ScreenProjection,
    dt: f64,
    heading: f64, // degrees, 0 = up, clockwise positive
    elapsed: f64, // simulated years
    total_consumable: usize,
    consumed: usize,
    state: SessionState,
}

impl GameSession {
    pub fn new(system: BodySet, controls: Controls, projection: ScreenProjection, dt: f64) -> Self {
        let total_consumable = system.len().saturating_sub(1);
        Self {
            system,
            controls,
            projection,
            dt,
            heading: 0.0,
            elapsed: 0.0,
            total_consumable,
            consumed: 0,
            state: SessionState::Playing,
        }
    }

    /// Build the initial solar system and wrap it in a session.
    pub fn from_config(cfg: &GameConfig) -> Self {
        let scenario = Scenario::build_scenario(cfg);
        let projection = ScreenProjection::new(
            cfg.display.width,
            cfg.display.height,
            cfg.parameters.system_size,
            cfg.display.zoom,
        );
        info!("session started with {} consumable bodies", scenario.system.len().saturating_sub(1));
        Self::new(scenario.system, Controls::from(&cfg.controls), projection, cfg.controls.dt)
    }

    pub fn system(&self) -> &BodySet {
        &self.system
    }

    pub fn projection(&self) -> &ScreenProjection {
        &self.projection
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// (bodies consumed, bodies consumable at the start)
    pub fn progress(&self) -> (usize, usize) {
        (self.consumed, self.total_consumable)
    }

    /// Player mass above the dry mass; `None` when the tank is empty.
    pub fn fuel(&self) -> Option<f64> {
        let m = self.system.player()?.m;
        let fuel = m - self.controls.dry_mass;
        (fuel > 0.0).then_some(fuel)
    }

    /// Advance the session by one frame.
    pub fn tick(&mut self, input: &ControlInput) -> Result<TickOutcome> {
        if self.state != SessionState::Playing {
            return Ok(TickOutcome {
                state: self.state,
                in_range: false,
                consumed: None,
            });
        }

        self.apply_view_controls(input);
        self.apply_ship_controls(input);

        self.system.step(self.dt)?;
        self.elapsed += self.dt;

        if self.system.player_collided() {
            self.state = SessionState::Destroyed;
            info!("player destroyed after {:.2} yr", self.elapsed);
            return Ok(TickOutcome {
                state: self.state,
                in_range: true,
                consumed: None,
            });
        }

        let target = self
            .system
            .nearest_to_player()
            .filter(|&(_, d)| d < self.controls.eat_distance)
            .map(|(index, _)| index);

        let mut consumed = None;
        if let (Some(index), true) = (target, input.consume) {
            let id = self.system.bodies()[index].id;
            if self.system.consume(index, self.controls.consume_rate)? {
                self.consumed += 1;
                consumed = Some(id);
                info!("objects consumed: {}/{}", self.consumed, self.total_consumable);
            }
        }

        if self.system.len() <= 1 {
            self.state = SessionState::Victory;
            info!("all bodies consumed after {:.2} yr", self.elapsed);
        }

        Ok(TickOutcome {
            state: self.state,
            in_range: target.is_some(),
            consumed,
        })
    }

    fn apply_view_controls(&mut self, input: &ControlInput) {
        if input.zoom_out {
            self.projection.set_zoom(self.projection.zoom() * self.controls.zoom_out);
        }
        if input.zoom_in {
            self.projection.set_zoom(self.projection.zoom() * self.controls.zoom_in);
        }
        if input.slow_down {
            self.dt = (self.dt * self.controls.slow_down).max(MIN_DT);
        }
        if input.speed_up {
            self.dt *= self.controls.speed_up;
        }
    }

    fn apply_ship_controls(&mut self, input: &ControlInput) {
        if input.boost {
            if let Some(m) = self.system.player().map(|p| p.m) {
                if m > self.controls.dry_mass {
                    let direction = unit_vector(self.heading.to_radians());
                    self.system.boost_player(direction * self.controls.thrust / m * self.dt);
                    self.system.burn_fuel(self.controls.flow_rate * self.dt);
                }
            }
        }
        if input.rotate_cw {
            self.heading = bound_angle(self.heading + self.controls.rotation_step);
        }
        if input.rotate_ccw {
            self.heading = bound_angle(self.heading - self.controls.rotation_step);
        }
    }
}
