pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{SystemMatrices, InitialState, TimeSample, peak_amplitudes};
pub use simulation::linalg::{NMat2, NVec2, CMat2, CVec2};
pub use simulation::error::SolverError;
pub use simulation::forcing::{Forcing, ZeroForcing, SinusoidalForcing, HarmonicForcing};
pub use simulation::params::{TimeGrid, SteadyStateParams, TransientParams};
pub use simulation::integrator::{euler_step, integrate};
pub use simulation::steady_state::{dynamic_stiffness, response_amplitudes, solve};
pub use simulation::scenario::{Scenario, Problem};

pub use configuration::config::{ProblemConfig, EngineConfig, ScalarConfig, ScenarioConfig};
pub use configuration::form::{ParameterForm, ParameterRecord, InvalidParameter, ConfigError};

pub use visualization::chart::{run_charts, Chart, ChartLayout};
pub use visualization::table::write_csv;

pub use benchmark::benchmark::bench_solvers;
