//! Build runnable scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding:
//! - a title for the chart
//! - the sampling window (`TimeGrid`)
//! - the problem kind with its parameter record (`Problem`)
//!
//! YAML parameters and later `name=value` overrides both go through a
//! `ParameterForm`, so invalid values fall back to zero the same way.

use log::info;

use crate::configuration::config::{ProblemConfig, ScalarConfig, ScenarioConfig};
use crate::configuration::form::{parse_override, ConfigError, InvalidParameter, ParameterForm, ParameterRecord};
use crate::simulation::error::SolverError;
use crate::simulation::forcing::SinusoidalForcing;
use crate::simulation::integrator::integrate;
use crate::simulation::params::{SteadyStateParams, TimeGrid, TransientParams};
use crate::simulation::states::{peak_amplitudes, TimeSample};
use crate::simulation::steady_state::solve;

/// Which solver runs, with its inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Problem {
    SteadyState(SteadyStateParams),
    Transient(TransientParams),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub title: String,
    pub grid: TimeGrid,
    pub problem: Problem,
}

impl Scenario {
    /// A scenario with the problem's default parameters and time window
    pub fn with_defaults(kind: ProblemConfig) -> Self {
        match kind {
            ProblemConfig::SteadyState => Self {
                title: "Harmonic Excitation".to_string(),
                grid: TimeGrid::STEADY_STATE,
                problem: Problem::SteadyState(SteadyStateParams::default()),
            },
            ProblemConfig::Transient => Self {
                title: "Two Degrees of Freedom System".to_string(),
                grid: TimeGrid::TRANSIENT,
                problem: Problem::Transient(TransientParams::default()),
            },
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let mut scenario = Self::with_defaults(cfg.engine.problem);

        if let Some(title) = cfg.title {
            scenario.title = title;
        }

        // Time window overrides, validated when the scenario runs
        if let Some(t_end) = cfg.engine.t_end {
            scenario.grid.t_end = t_end;
        }
        if let Some(dt) = cfg.engine.dt {
            scenario.grid.dt = dt;
        }

        scenario.edit(|form| {
            for (name, value) in &cfg.parameters {
                match value {
                    ScalarConfig::Number(v) => form.set_number(name, *v)?,
                    ScalarConfig::Text(raw) => form.set(name, raw)?,
                }
            }
            Ok(())
        })?;

        Ok(scenario)
    }

    /// Apply `name=value` overrides on top of the current parameters
    pub fn apply_overrides<S: AsRef<str>>(&mut self, overrides: &[S]) -> Result<Vec<InvalidParameter>, ConfigError> {
        self.edit(|form| {
            for arg in overrides {
                let (name, raw) = parse_override(arg.as_ref())?;
                form.set(name, raw)?;
            }
            Ok(())
        })
    }

    /// Run a batch of edits against the active record. The record is only
    /// replaced when every edit succeeds.
    fn edit<F>(&mut self, edits: F) -> Result<Vec<InvalidParameter>, ConfigError>
    where
        F: Fn(&mut dyn FormEdit) -> Result<(), ConfigError>,
    {
        match &mut self.problem {
            Problem::SteadyState(p) => apply_edits(p, edits),
            Problem::Transient(p) => apply_edits(p, edits),
        }
    }

    /// Solve and return the sampled trajectory
    pub fn run(&self) -> Result<Vec<TimeSample>, SolverError> {
        let samples = match &self.problem {
            Problem::SteadyState(p) => solve(&p.matrices(), &p.forcing(), &self.grid)?,
            Problem::Transient(p) => integrate(&p.matrices(), &p.initial_state(), &SinusoidalForcing::default(), &self.grid)?,
        };

        let peak = peak_amplitudes(&samples);
        info!(
            "{}: {} samples, peak |x1| = {:.6e}, peak |x2| = {:.6e}",
            self.title,
            samples.len(),
            peak[0],
            peak[1]
        );
        Ok(samples)
    }
}

/// Object-safe view of a `ParameterForm` so one closure can edit either record
pub trait FormEdit {
    fn set(&mut self, name: &str, raw: &str) -> Result<(), ConfigError>;
    fn set_number(&mut self, name: &str, value: f64) -> Result<(), ConfigError>;
}

impl<R: ParameterRecord> FormEdit for ParameterForm<R> {
    fn set(&mut self, name: &str, raw: &str) -> Result<(), ConfigError> {
        ParameterForm::set(self, name, raw)
    }

    fn set_number(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        ParameterForm::set_number(self, name, value)
    }
}

fn apply_edits<R, F>(record: &mut R, edits: F) -> Result<Vec<InvalidParameter>, ConfigError>
where
    R: ParameterRecord,
    F: Fn(&mut dyn FormEdit) -> Result<(), ConfigError>,
{
    let mut form = ParameterForm::new(*record);
    edits(&mut form)?;
    *record = form.snapshot();
    Ok(form.invalid().to_vec())
}
