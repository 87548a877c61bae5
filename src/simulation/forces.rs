//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums its terms, and direct
//! pairwise Newtonian gravity with a separation floor.

use crate::simulation::states::{Body, NVec2};

/// Collection of acceleration terms (gravity, thrust fields, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a slice of bodies
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Direct-summation Newtonian gravity
///
/// The pair distance is floored at `min_separation`, so coincident or
/// interpenetrating bodies give a large but finite pull instead of NaN.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // distance floor
}

impl NewtonianGravity {
    /// Accelerations for bodies given as parallel position and mass slices.
    pub fn accelerations(&self, positions: &[NVec2], masses: &[f64]) -> Vec<NVec2> {
        debug_assert_eq!(positions.len(), masses.len());
        let mut out = vec![NVec2::zeros(); positions.len()];
        self.accumulate(positions.len(), |i| (positions[i], masses[i]), &mut out);
        out
    }

    fn accumulate<F>(&self, n: usize, body: F, out: &mut [NVec2])
    where
        F: Fn(usize) -> (NVec2, f64),
    {
        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let (xi, mi) = body(i);

            for j in (i + 1)..n {
                let (xj, mj) = body(j);

                // displacement from i to j: i is pulled along +r, j along -r
                let r = xj - xi;
                let d = r.norm().max(self.min_separation);
                let coef = self.g / (d * d * d);

                // a_i +=  G * m_j * r / d^3
                // a_j += -G * m_i * r / d^3
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        self.accumulate(bodies.len(), |i| (bodies[i].x, bodies[i].m), out);
    }
}

/// Total gravitational potential energy of `bodies`, using the same floor.
pub fn potential_energy(gravity: &NewtonianGravity, bodies: &[Body]) -> f64 {
    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let d = bi.distance_to(bj).max(gravity.min_separation);
            u -= gravity.g * bi.m * bj.m / d;
        }
    }
    u
}
