//! Core state types for the two-degree-of-freedom model.
//!
//! Defines the system matrices, initial state and the sampled output:
//! - `SystemMatrices` holds M, C, K as `NMat2`
//! - `InitialState` holds x(0) and x'(0) as `NVec2`
//! - `TimeSample` is one `{t, x1, x2}` record of a trajectory
//!
//! The governing equation is `M x'' + C x' + K x = F(t)`.

use crate::simulation::linalg::{NMat2, NVec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMatrices {
    pub m: NMat2, // mass
    pub c: NMat2, // damping
    pub k: NMat2, // stiffness
}

impl SystemMatrices {
    /// Build M, C, K from scalar entries. Off-diagonals are stored once and
    /// mirrored, so C and K are symmetric and M is diagonal.
    #[allow(clippy::too_many_arguments)]
    pub fn symmetric(m1: f64, m2: f64, c11: f64, c12: f64, c22: f64, k11: f64, k12: f64, k22: f64) -> Self {
        Self {
            m: NMat2::new(m1, 0.0, 0.0, m2),
            c: NMat2::new(c11, c12, c12, c22),
            k: NMat2::new(k11, k12, k12, k22),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub x0: NVec2, // initial displacement
    pub v0: NVec2, // initial velocity
}

impl InitialState {
    /// Start from rest at the origin
    pub fn at_rest() -> Self {
        Self {
            x0: NVec2::zeros(),
            v0: NVec2::zeros(),
        }
    }
}

/// One point of a sampled trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    pub t: f64,
    pub x1: f64,
    pub x2: f64,
}

impl TimeSample {
    pub fn new(t: f64, x: NVec2) -> Self {
        Self { t, x1: x[0], x2: x[1] }
    }

    pub fn displacement(&self) -> NVec2 {
        NVec2::new(self.x1, self.x2)
    }
}

/// Largest absolute displacement of each coordinate over a trajectory
pub fn peak_amplitudes(samples: &[TimeSample]) -> NVec2 {
    samples.iter().fold(NVec2::zeros(), |peak, s| {
        NVec2::new(peak[0].max(s.x1.abs()), peak[1].max(s.x2.abs()))
    })
}
