//! Fitness ledger for bots
//!
//! Mirrors what a neuroevolution driver needs back from a generation: a
//! score per bot, including bots that were evicted mid-run.

use std::collections::HashMap;

use serde::Deserialize;

use crate::simulation::registry::BodyId;

/// Per-step and per-bounce rewards
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Scoring {
    pub survival_reward: f64, // every step a bot is still registered
    pub boundary_reward: f64, // every wall hit
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            survival_reward: 0.1,
            boundary_reward: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    fitness: HashMap<BodyId, f64>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a bot at zero fitness
    pub fn enroll(&mut self, id: BodyId) {
        self.fitness.entry(id).or_insert(0.0);
    }

    pub fn add(&mut self, id: BodyId, delta: f64) {
        *self.fitness.entry(id).or_insert(0.0) += delta;
    }

    pub fn fitness(&self, id: BodyId) -> Option<f64> {
        self.fitness.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fitness.is_empty()
    }

    /// Best first; ties broken by id
    pub fn standings(&self) -> Vec<(BodyId, f64)> {
        let mut rows: Vec<(BodyId, f64)> = self.fitness.iter().map(|(id, f)| (*id, *f)).collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        rows
    }

    pub fn best(&self) -> Option<(BodyId, f64)> {
        self.standings().into_iter().next()
    }
}
