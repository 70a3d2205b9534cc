//! Configuration types for loading arena scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! session. A scenario consists of:
//!
//! - [`EnvironmentConfig`] – arena bounds and physics constants
//! - [`ParametersConfig`]  – step count, thrust, speed limit, seed
//! - [`BodyConfig`]        – one explicitly placed body
//! - [`SpawnConfig`]       – a group of bodies placed at random
//! - [`RuleConfig`]        – what happens between two kinds of bodies
//! - [`Scoring`]           – survival / boundary rewards for bots
//! - [`ScenarioConfig`]    – top-level wrapper
//!
//! # YAML format
//! An avoidance game: bots must keep away from the player and the
//! obstacles, the player pulls bots in.
//!
//! ```yaml
//! environment:
//!   width: 1440.0
//!   height: 900.0
//!   air_mass: 0.02          # drag coefficient
//!   elasticity: 0.75        # wall elasticity
//!
//! parameters:
//!   steps: 2000
//!   thrust: 2.0             # size of one directional impulse
//!   speed_limit: 20.0
//!   seed: 7
//!
//! bodies:
//!   - kind: player
//!     name: "John Titor"
//!     x: [100.0, 450.0]
//!     radius: 20.0
//!     mass: 100.0
//!     controller: idle
//!
//! spawns:
//!   - kind: obstacle
//!     count: 30
//!     radius: [10.0, 20.0]
//!     mass: 50.0
//!   - kind: bot
//!     count: 20
//!     radius: [10.0, 10.0]
//!     mass: 50.0
//!     controller: flee
//!
//! rules:
//!   - between: [player, bot]
//!     effect: attract
//!   - between: [player, bot]
//!     effect: touch
//!     reward: -5.0
//!     evict: true
//!   - between: [obstacle, bot]
//!     effect: bounce
//!     reward: -5.0
//!     evict: true
//!   - between: [obstacle, player]
//!     effect: bounce
//! ```
//!
//! Every physics constant has the default the arena game ships with, so a
//! scenario only needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::environment::{
    DEFAULT_AIR_MASS, DEFAULT_ATTRACTION, DEFAULT_GRAVITY, DEFAULT_WALL_ELASTICITY,
};
use crate::simulation::interactions::Effect;
use crate::simulation::params::Parameters;
use crate::simulation::scoring::Scoring;
use crate::simulation::states::{BodyKind, Rgb};

/// Arena bounds and physics constants
#[derive(Deserialize, Debug, Clone)]
pub struct EnvironmentConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_air_mass")]
    pub air_mass: f64, // drag coefficient
    #[serde(default = "default_wall_elasticity")]
    pub elasticity: f64, // wall elasticity
    #[serde(default = "default_gravity")]
    pub gravity: PolarConfig, // impulse added per step when enabled
    #[serde(default = "default_attraction")]
    pub attraction: f64, // k in k*m1*m2/d^2
    pub color: Option<Rgb>, // presentation only
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolarConfig {
    pub angle: f64,
    pub magnitude: f64,
}

/// Driver settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub steps: u64,
    pub dt: f64,
    pub thrust: f64,
    pub speed_limit: Option<f64>,
    pub apply_gravity: bool,
    pub stop_when_no_bots: bool,
    pub seed: u64,
}

// defaults live on `Parameters`
impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            steps: p.steps,
            dt: p.dt,
            thrust: p.thrust,
            speed_limit: p.speed_limit,
            apply_gravity: p.apply_gravity,
            stop_when_no_bots: p.stop_when_no_bots,
            seed: p.seed,
        }
    }
}

/// Which decision source steers a body
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControllerConfig {
    #[default]
    None,
    Idle,
    Pursue,
    Flee,
}

/// One explicitly placed body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKind,
    pub name: Option<String>,
    pub x: [f64; 2], // [x, y] in pixels
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub elasticity: Option<f64>,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub speed: f64,
    pub color: Option<Rgb>,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// A group of bodies placed uniformly at random inside the arena
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub kind: BodyKind,
    pub count: usize,
    pub radius: [f64; 2], // [min, max]
    pub mass: Option<f64>,
    pub elasticity: Option<f64>,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// One pair rule
#[derive(Deserialize, Debug, Clone)]
pub struct RuleConfig {
    pub between: [BodyKind; 2],
    pub effect: Effect,
    #[serde(default)]
    pub reward: f64,
    #[serde(default)]
    pub evict: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub scoring: Scoring,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

fn default_air_mass() -> f64 {
    DEFAULT_AIR_MASS
}

fn default_wall_elasticity() -> f64 {
    DEFAULT_WALL_ELASTICITY
}

fn default_attraction() -> f64 {
    DEFAULT_ATTRACTION
}

fn default_gravity() -> PolarConfig {
    PolarConfig {
        angle: DEFAULT_GRAVITY.angle,
        magnitude: DEFAULT_GRAVITY.magnitude,
    }
}
