//! Named scalar inputs for the parameter records
//!
//! A [`ParameterForm`] wraps one record and accepts edits by field name, the
//! way a form would. Values that are not finite reals are replaced by 0.0
//! and reported as [`InvalidParameter`]; unknown names are hard errors.

use log::warn;
use thiserror::Error;

use crate::simulation::params::{SteadyStateParams, TransientParams};

/// A scalar that did not parse as a finite number and was replaced by 0.0
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parameter {name} = {raw:?} is not a finite number, using 0")]
pub struct InvalidParameter {
    pub name: String,
    pub raw: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown parameter {name:?} for {problem}, expected one of: {expected}")]
    UnknownParameter {
        name: String,
        problem: &'static str,
        expected: String,
    },

    #[error("malformed override {0:?}, expected name=value")]
    MalformedOverride(String),
}

/// A flat record of named `f64` fields
pub trait ParameterRecord: Copy {
    /// Label used in error messages
    const PROBLEM: &'static str;

    /// Accepted field names, in display order
    const NAMES: &'static [&'static str];

    fn field_mut(&mut self, name: &str) -> Option<&mut f64>;
}

impl ParameterRecord for SteadyStateParams {
    const PROBLEM: &'static str = "steady_state";
    const NAMES: &'static [&'static str] = &["m1", "m2", "c11", "c22", "k11", "k12", "k22", "F1", "F2", "omega"];

    fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "m1" => Some(&mut self.m1),
            "m2" => Some(&mut self.m2),
            "c11" => Some(&mut self.c11),
            "c22" => Some(&mut self.c22),
            "k11" => Some(&mut self.k11),
            "k12" => Some(&mut self.k12),
            "k22" => Some(&mut self.k22),
            "F1" | "f1" => Some(&mut self.f1),
            "F2" | "f2" => Some(&mut self.f2),
            "omega" => Some(&mut self.omega),
            _ => None,
        }
    }
}

impl ParameterRecord for TransientParams {
    const PROBLEM: &'static str = "transient";
    const NAMES: &'static [&'static str] = &[
        "m1", "m2", "c11", "c12", "c22", "k11", "k12", "k22", "x1_0", "x2_0", "x1_dot_0", "x2_dot_0",
    ];

    fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "m1" => Some(&mut self.m1),
            "m2" => Some(&mut self.m2),
            "c11" => Some(&mut self.c11),
            "c12" => Some(&mut self.c12),
            "c22" => Some(&mut self.c22),
            "k11" => Some(&mut self.k11),
            "k12" => Some(&mut self.k12),
            "k22" => Some(&mut self.k22),
            "x1_0" => Some(&mut self.x1_0),
            "x2_0" => Some(&mut self.x2_0),
            "x1_dot_0" => Some(&mut self.x1_dot_0),
            "x2_dot_0" => Some(&mut self.x2_dot_0),
            _ => None,
        }
    }
}

/// Parse user text as a finite real
pub fn parse_scalar(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a `name=value` override
pub fn parse_override(arg: &str) -> Result<(&str, &str), ConfigError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(ConfigError::MalformedOverride(arg.to_string())),
    }
}

pub struct ParameterForm<R: ParameterRecord> {
    record: R,
    invalid: Vec<InvalidParameter>,
}

impl<R: ParameterRecord> ParameterForm<R> {
    pub fn new(record: R) -> Self {
        Self {
            record,
            invalid: Vec::new(),
        }
    }

    /// Set a field from text input
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), ConfigError> {
        let value = parse_scalar(raw);
        self.store(name, value, raw)
    }

    /// Set a field from an already-numeric input (still checked for finiteness)
    pub fn set_number(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        let checked = Some(value).filter(|v| v.is_finite());
        self.store(name, checked, &value.to_string())
    }

    fn store(&mut self, name: &str, value: Option<f64>, raw: &str) -> Result<(), ConfigError> {
        let field = self.record.field_mut(name).ok_or_else(|| ConfigError::UnknownParameter {
            name: name.to_string(),
            problem: R::PROBLEM,
            expected: R::NAMES.join(", "),
        })?;

        match value {
            Some(v) => *field = v,
            None => {
                *field = 0.0;
                let notice = InvalidParameter {
                    name: name.to_string(),
                    raw: raw.to_string(),
                };
                warn!("{notice}");
                self.invalid.push(notice);
            }
        }
        Ok(())
    }

    /// Read-only copy of the current record, handed to a solver
    pub fn snapshot(&self) -> R {
        self.record
    }

    /// Fields that fell back to zero so far
    pub fn invalid(&self) -> &[InvalidParameter] {
        &self.invalid
    }
}
