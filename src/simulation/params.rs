//! Numerical and physical parameters for the two solvers
//!
//! `TimeGrid` holds the sampling window (end time and fixed step).
//! `SteadyStateParams` and `TransientParams` are the flat scalar records a
//! parameter form edits; their `Default` values are the tool's starting
//! values. Off-diagonal terms are stored once (`k12`, `c12`).

use crate::simulation::error::SolverError;
use crate::simulation::forcing::HarmonicForcing;
use crate::simulation::linalg::NVec2;
use crate::simulation::states::{InitialState, SystemMatrices};

/// Fixed-step sampling window `t_i = i * dt` for `i = 0..=floor(t_end / dt)`.
/// Both endpoints are included when `dt` divides `t_end`; otherwise the last
/// sample is the largest `t_i <= t_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub t_end: f64, // last sample time
    pub dt: f64,    // step size
}

impl TimeGrid {
    /// Steady-state window: [0, 10] every 0.01 (1001 samples)
    pub const STEADY_STATE: TimeGrid = TimeGrid { t_end: 10.0, dt: 0.01 };

    /// Transient window: [0, 50] every 0.1 (501 samples)
    pub const TRANSIENT: TimeGrid = TimeGrid { t_end: 50.0, dt: 0.1 };

    /// Upper bound on `t_end / dt`, keeps every solve a bounded loop
    pub const MAX_STEPS: f64 = 1.0e7;

    /// Relative slack on `t_end / dt` so `10 / 0.01` still counts as 1000 steps
    const STEP_TOL: f64 = 1.0e-12;

    pub fn new(t_end: f64, dt: f64) -> Result<Self, SolverError> {
        let grid = Self { t_end, dt };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.t_end.is_finite() || !self.dt.is_finite() || self.dt <= 0.0 || self.t_end < 0.0 {
            return Err(SolverError::InvalidTimeGrid { t_end: self.t_end, dt: self.dt });
        }
        let ratio = self.t_end / self.dt;
        if !ratio.is_finite() || ratio > Self::MAX_STEPS {
            return Err(SolverError::InvalidTimeGrid { t_end: self.t_end, dt: self.dt });
        }
        Ok(())
    }

    /// Number of steps after t = 0. Only meaningful on a validated grid;
    /// anything past `MAX_STEPS` is clamped.
    pub fn steps(&self) -> usize {
        let ratio = (self.t_end / self.dt) * (1.0 + Self::STEP_TOL);
        if ratio.is_finite() && ratio > 0.0 {
            ratio.floor().min(Self::MAX_STEPS) as usize
        } else {
            0
        }
    }

    /// Number of samples including both endpoints
    pub fn sample_count(&self) -> usize {
        self.steps() + 1
    }

    /// Sample times computed from the index, so no drift from repeated adds
    pub fn times(&self) -> impl Iterator<Item = f64> {
        let dt = self.dt;
        (0..=self.steps()).map(move |i| i as f64 * dt)
    }
}

/// Inputs of the harmonic excitation tool. Damping is diagonal-only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateParams {
    pub m1: f64,
    pub m2: f64,
    pub c11: f64,
    pub c22: f64,
    pub k11: f64,
    pub k12: f64,
    pub k22: f64,
    pub f1: f64,
    pub f2: f64,
    pub omega: f64, // drive frequency, rad/s
}

impl Default for SteadyStateParams {
    fn default() -> Self {
        Self {
            m1: 2.5,
            m2: 2.5,
            c11: 250.0,
            c22: 0.0,
            k11: 8000.0,
            k12: -4000.0,
            k22: 4000.0,
            f1: 5.0,
            f2: 10.0,
            omega: 5.0,
        }
    }
}

impl SteadyStateParams {
    pub fn matrices(&self) -> SystemMatrices {
        SystemMatrices::symmetric(self.m1, self.m2, self.c11, 0.0, self.c22, self.k11, self.k12, self.k22)
    }

    pub fn forcing(&self) -> HarmonicForcing {
        HarmonicForcing {
            amplitude: NVec2::new(self.f1, self.f2),
            omega: self.omega,
        }
    }
}

/// Inputs of the transient (free/forced) tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientParams {
    pub m1: f64,
    pub m2: f64,
    pub c11: f64,
    pub c12: f64,
    pub c22: f64,
    pub k11: f64,
    pub k12: f64,
    pub k22: f64,
    pub x1_0: f64,
    pub x2_0: f64,
    pub x1_dot_0: f64,
    pub x2_dot_0: f64,
}

impl Default for TransientParams {
    fn default() -> Self {
        Self {
            m1: 2.0,
            m2: 10.0,
            c11: 20.0,
            c12: -5.0,
            c22: 5.0,
            k11: 50.0,
            k12: -10.0,
            k22: 10.0,
            x1_0: 1.0,
            x2_0: -1.0,
            x1_dot_0: 0.0,
            x2_dot_0: 0.0,
        }
    }
}

impl TransientParams {
    pub fn matrices(&self) -> SystemMatrices {
        SystemMatrices::symmetric(self.m1, self.m2, self.c11, self.c12, self.c22, self.k11, self.k12, self.k22)
    }

    pub fn initial_state(&self) -> InitialState {
        InitialState {
            x0: NVec2::new(self.x1_0, self.x2_0),
            v0: NVec2::new(self.x1_dot_0, self.x2_dot_0),
        }
    }
}
