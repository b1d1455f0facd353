//! Fixed-step time integrator for the transient response
//!
//! Semi-implicit Euler on `M x'' + C x' + K x = F(t)`: the position is
//! advanced with the velocity from the start of the step, then the velocity
//! with the acceleration evaluated at the start of the step. The order of
//! the two updates matters and must not be swapped.

use log::debug;

use super::error::SolverError;
use super::forcing::Forcing;
use super::linalg::{invert, NMat2, NVec2};
use super::params::TimeGrid;
use super::states::{InitialState, SystemMatrices, TimeSample};

/// Advance `(x, v)` by one step of size `dt` at time `t`.
/// `m_inv` is the precomputed inverse of the mass matrix.
pub fn euler_step<F: Forcing + ?Sized>(
    sys: &SystemMatrices,
    m_inv: &NMat2,
    forcing: &F,
    t: f64,
    dt: f64,
    x: &mut NVec2,
    v: &mut NVec2,
) {
    // a = M^-1 (F(t) - C v - K x), all at the start of the step
    let a = m_inv * (forcing.force(t) - sys.c * *v - sys.k * *x);

    // Drift with the old velocity: x_n+1 = x_n + dt v_n
    *x += *v * dt;

    // Kick: v_n+1 = v_n + dt a_n
    *v += a * dt;
}

/// Integrate from `init` over `grid`.
///
/// The sample at `t_i` holds the position after the step taken at `t_i`,
/// so the first sample is `x0 + v0 dt`, not `x0`.
pub fn integrate<F: Forcing + ?Sized>(
    sys: &SystemMatrices,
    init: &InitialState,
    forcing: &F,
    grid: &TimeGrid,
) -> Result<Vec<TimeSample>, SolverError> {
    grid.validate()?;
    let m_inv = invert(&sys.m, "M")?;

    let dt = grid.dt;
    let mut x = init.x0;
    let mut v = init.v0;
    let mut samples = Vec::with_capacity(grid.sample_count());

    for t in grid.times() {
        euler_step(sys, &m_inv, forcing, t, dt, &mut x, &mut v);

        // a stiff system can blow up; never hand out inf/NaN samples
        if !(x.iter().all(|q| q.is_finite()) && v.iter().all(|q| q.is_finite())) {
            debug!("transient: state diverged at t = {t}");
            return Err(SolverError::NonFiniteState { t });
        }

        samples.push(TimeSample::new(t, x));
    }

    Ok(samples)
}
