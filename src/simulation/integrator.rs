//! Variable-step time integrators for the body set
//!
//! Every integrator advances `bodies` by `dt` and leaves the reference body
//! `rf` at rest at the origin, so callers can treat the simulation as being
//! viewed from that body.

use super::forces::AccelSet;
use super::states::{Body, NVec2};

/// Advance by one step using Euler-Cromer (semi-implicit Euler)
///
/// Order: kick with the current accelerations, recentre velocities on the
/// fresh reference velocity, recentre positions on the pre-step reference
/// position, then drift with the recentred velocities.
pub fn euler_cromer(bodies: &mut [Body], forces: &AccelSet, dt: f64, rf: usize) {
    let n = bodies.len();
    if n == 0 {
        return;
    }

    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut acc);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
    }

    recenter_velocities(bodies, rf);
    recenter_positions(bodies, rf);

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.x += dt * b.v;
    }
}

/// Advance by one step using explicit Euler
/// Positions move with the old velocity, then velocities take the kick.
pub fn euler(bodies: &mut [Body], forces: &AccelSet, dt: f64, rf: usize) {
    let n = bodies.len();
    if n == 0 {
        return;
    }

    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut acc);

    for (b, a) in bodies.iter_mut().zip(acc.iter()) {
        b.x += dt * b.v;
        b.v += dt * *a;
    }

    recenter_velocities(bodies, rf);
    recenter_positions(bodies, rf);
}

/// Advance by one step using velocity-Verlet
/// Uses two force evaluations per step, then recentres on the post-step
/// reference state
pub fn verlet(bodies: &mut [Body], forces: &AccelSet, dt: f64, rf: usize) {
    let n = bodies.len();
    if n == 0 {
        return;
    }
    let half_dt = 0.5 * dt;

    // a_n from x_n
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }

    recenter_velocities(bodies, rf);
    recenter_positions(bodies, rf);
}

/// Subtract the reference body's velocity from every body
pub fn recenter_velocities(bodies: &mut [Body], rf: usize) {
    let v_ref = bodies[rf].v;
    for b in bodies.iter_mut() {
        b.v -= v_ref;
    }
}

/// Subtract the reference body's position from every body
pub fn recenter_positions(bodies: &mut [Body], rf: usize) {
    let x_ref = bodies[rf].x;
    for b in bodies.iter_mut() {
        b.x -= x_ref;
    }
}
