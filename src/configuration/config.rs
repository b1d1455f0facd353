//! Configuration types for loading vibration scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – which problem to solve and an optional time window
//! - `parameters`       – named scalar inputs, merged over the problem defaults
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example transient scenario:
//!
//! ```yaml
//! title: "Two Degrees of Freedom System"
//!
//! engine:
//!   problem: "transient"    # or "steady_state"
//!   t_end: 50.0             # optional, last sample time
//!   dt: 0.1                 # optional, fixed step
//!
//! parameters:               # any subset, the rest keep their defaults
//!   m1: 2
//!   m2: 10
//!   c12: -5
//!   k12: "-10"              # strings are parsed like form input
//!   x1_0: 1
//! ```
//!
//! Parameter names follow the input records: `m1 m2 c11 c22 k11 k12 k22 F1
//! F2 omega` for `steady_state` and `m1 m2 c11 c12 c22 k11 k12 k22 x1_0 x2_0
//! x1_dot_0 x2_dot_0` for `transient`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Which solver a scenario drives
/// problem: "steady_state"` or `problem: "transient"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemConfig {
    #[serde(rename = "steady_state")] // Harmonic excitation, solved in the frequency domain
    SteadyState,

    #[serde(rename = "transient")] // Initial value problem, integrated with semi-implicit Euler
    Transient,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub problem: ProblemConfig, // solver to run
    pub t_end: Option<f64>,     // last sample time, default per problem
    pub dt: Option<f64>,        // sample step, default per problem
}

/// A scalar as written in YAML: a number, or text parsed like form input
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ScalarConfig {
    Number(f64),
    Text(String),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub title: Option<String>, // chart title, default per problem
    pub engine: EngineConfig,  // problem kind and time window
    #[serde(default)]
    pub parameters: BTreeMap<String, ScalarConfig>, // named inputs
}
