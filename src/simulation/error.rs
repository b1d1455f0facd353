//! Failure modes shared by both solvers
//!
//! A solve either returns a complete, finite trajectory or one of these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("matrix {name} is singular (|det| = {det:e})")]
    SingularMatrix { name: &'static str, det: f64 },

    #[error("state became non-finite at t = {t}")]
    NonFiniteState { t: f64 },

    #[error("response amplitude overflowed at omega = {omega}")]
    NonFiniteResponse { omega: f64 },

    #[error("invalid time grid: t_end = {t_end}, dt = {dt}")]
    InvalidTimeGrid { t_end: f64, dt: f64 },
}
