use std::time::Instant;

use crate::simulation::forcing::SinusoidalForcing;
use crate::simulation::integrator::integrate;
use crate::simulation::params::{SteadyStateParams, TimeGrid, TransientParams};
use crate::simulation::steady_state::solve;

/// Time both solvers on their default inputs over growing sample counts.
/// Output is CSV, paste directly into excel to graph
pub fn bench_solvers() {
    let steady = SteadyStateParams::default();
    let transient = TransientParams::default();
    let forcing = SinusoidalForcing::default();

    println!("samples,steady_state_us,transient_us");

    for samples in [1_000usize, 10_000, 100_000, 1_000_000] {
        // Keep the default step, stretch the window
        let steady_grid = TimeGrid { t_end: (samples - 1) as f64 * 0.01, dt: 0.01 };
        let transient_grid = TimeGrid { t_end: (samples - 1) as f64 * 0.1, dt: 0.1 };

        // Small runs: average over a few repeats to smooth noise
        let reps = if samples <= 10_000 { 20 } else { 2 };

        let t0 = Instant::now();
        for _ in 0..reps {
            if let Err(e) = solve(&steady.matrices(), &steady.forcing(), &steady_grid) {
                println!("steady state failed: {e}");
                return;
            }
        }
        let us_steady = t0.elapsed().as_secs_f64() * 1.0e6 / reps as f64;

        let t1 = Instant::now();
        for _ in 0..reps {
            if let Err(e) = integrate(&transient.matrices(), &transient.initial_state(), &forcing, &transient_grid) {
                println!("transient failed: {e}");
                return;
            }
        }
        let us_transient = t1.elapsed().as_secs_f64() * 1.0e6 / reps as f64;

        println!("{},{:.3},{:.3}", samples, us_steady, us_transient);
    }
}
