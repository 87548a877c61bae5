use std::time::Instant;

use crate::simulation::body_set::BodySet;
use crate::simulation::engine::{Engine, IntegrationScheme};
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Build a deterministic set of `n` bodies for timing
/// Body 0 is a light player, body 1 a unit-mass star, the rest spread on a spiral
fn make_system(n: usize, scheme: IntegrationScheme) -> BodySet {
    let engine = Engine {
        integration_scheme: scheme,
        ..Engine::default()
    };
    let mut system = BodySet::new(engine, Parameters::default());

    system.push(NVec2::new(30.0, 0.0), NVec2::zeros(), 1.0e-4, 5.0e6);
    if n > 1 {
        system.push(NVec2::zeros(), NVec2::zeros(), 1.0, 2.3e6);
    }
    for i in 2..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 20.0, (i_f * 0.13).cos() * 20.0);
        system.push(x, NVec2::zeros(), 1.0e-3, 5.0e6);
    }
    system
}

/// Time `BodySet::step` for each integration scheme over a range of body counts
/// Output is CSV so it can be pasted straight into a spreadsheet
pub fn bench_step() {
    let ns = [2, 4, 8, 16, 32, 64];
    let steps = 10_000;
    let dt = 1.0e-3;

    println!("N,euler_cromer_us,euler_us,verlet_us");

    for n in ns {
        let mut row = Vec::with_capacity(3);
        for scheme in [IntegrationScheme::EulerCromer, IntegrationScheme::Euler, IntegrationScheme::Verlet] {
            let mut system = make_system(n, scheme);

            // Warm-up
            let _ = system.step(dt);

            let t0 = Instant::now();
            for _ in 0..steps {
                if system.step(dt).is_err() {
                    break;
                }
            }
            row.push(t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64);
        }

        println!("{},{:.4},{:.4},{:.4}", n, row[0], row[1], row[2]);
    }
}
