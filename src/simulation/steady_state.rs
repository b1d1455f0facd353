//! Steady-state harmonic response in the frequency domain
//!
//! For forcing `F e^{i w t}` the particular solution is `X e^{i w t}` with
//! `Z(w) X = F` and `Z(w) = K - w^2 M - i w C`. Each sample is evaluated
//! from the closed form, so there is no accumulated error over time.

use log::debug;
use num_complex::Complex64;

use super::error::SolverError;
use super::forcing::HarmonicForcing;
use super::linalg::{cis, invert, re, to_complex, to_complex_vec, CMat2, CVec2};
use super::params::TimeGrid;
use super::states::{SystemMatrices, TimeSample};

/// Dynamic stiffness `Z(w) = K - w^2 M - i w C`
pub fn dynamic_stiffness(sys: &SystemMatrices, omega: f64) -> CMat2 {
    let m = to_complex(&sys.m);
    let c = to_complex(&sys.c);
    let k = to_complex(&sys.k);

    k - m * Complex64::new(omega * omega, 0.0) - c * Complex64::new(0.0, omega)
}

/// Complex response amplitudes `X = Z(w)^-1 F`
pub fn response_amplitudes(sys: &SystemMatrices, forcing: &HarmonicForcing) -> Result<CVec2, SolverError> {
    let z = dynamic_stiffness(sys, forcing.omega);
    let z_inv = invert(&z, "Z")?;
    let x = z_inv * to_complex_vec(&forcing.amplitude);

    // a regular but tiny Z can still push X past f64 range
    if !x.iter().all(|q| q.re.is_finite() && q.im.is_finite()) {
        return Err(SolverError::NonFiniteResponse { omega: forcing.omega });
    }
    Ok(x)
}

/// Sample `x_j(t) = Re(X_j e^{i w t})` over `grid`
pub fn solve(sys: &SystemMatrices, forcing: &HarmonicForcing, grid: &TimeGrid) -> Result<Vec<TimeSample>, SolverError> {
    grid.validate()?;
    let amplitudes = response_amplitudes(sys, forcing)?;
    debug!(
        "steady state: |X1| = {:.6e}, |X2| = {:.6e} at omega = {}",
        amplitudes[0].norm(),
        amplitudes[1].norm(),
        forcing.omega
    );

    let samples: Vec<TimeSample> = grid
        .times()
        .map(|t| TimeSample::new(t, re(&(amplitudes * cis(forcing.omega * t)))))
        .collect();

    // |X| near f64::MAX can still overflow in Re(X e^{iwt})
    if !samples.iter().all(|s| s.x1.is_finite() && s.x2.is_finite()) {
        return Err(SolverError::NonFiniteResponse { omega: forcing.omega });
    }

    Ok(samples)
}
