//! External forcing for the two solvers
//!
//! The transient integrator takes any [`Forcing`], a map from time to a
//! force 2-vector. The steady-state solver takes a [`HarmonicForcing`],
//! the amplitude of `F e^{i omega t}`.

use crate::simulation::linalg::NVec2;

/// Time-varying force acting on both coordinates
pub trait Forcing {
    fn force(&self, t: f64) -> NVec2;
}

/// Any `Fn(t) -> F` closure can be used as forcing
impl<F> Forcing for F
where
    F: Fn(f64) -> NVec2,
{
    fn force(&self, t: f64) -> NVec2 {
        self(t)
    }
}

/// No external force (free vibration)
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroForcing;

impl Forcing for ZeroForcing {
    fn force(&self, _t: f64) -> NVec2 {
        NVec2::zeros()
    }
}

/// `F(t) = [a1 sin(w1 t), a2 cos(w2 t)]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalForcing {
    pub a1: f64, // amplitude on x1
    pub w1: f64, // frequency on x1 (rad/s)
    pub a2: f64, // amplitude on x2
    pub w2: f64, // frequency on x2 (rad/s)
}

impl Default for SinusoidalForcing {
    /// `[2 sin(3t), 5 cos(5t)]`, the forcing of the transient tool
    fn default() -> Self {
        Self {
            a1: 2.0,
            w1: 3.0,
            a2: 5.0,
            w2: 5.0,
        }
    }
}

impl Forcing for SinusoidalForcing {
    fn force(&self, t: f64) -> NVec2 {
        NVec2::new(self.a1 * (self.w1 * t).sin(), self.a2 * (self.w2 * t).cos())
    }
}

/// Real amplitude vector and drive frequency of `F e^{i omega t}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicForcing {
    pub amplitude: NVec2,
    pub omega: f64, // rad/s
}
