//! Per-step driver around the physics operators
//!
//! A `Session` owns everything the physics core deliberately does not:
//! the active set of bodies, who steers which body, the pair rules of the
//! game being played and the bots' fitness. One call to [`Session::step`]
//! runs, in order:
//!
//! 1. decisions: every steered body gets its thrust impulses (plus gravity
//!    when enabled), then every speed is clamped to the limit
//! 2. move every body
//! 3. drag on every body
//! 4. pair rules over every unordered pair
//! 5. wall bounce for every body
//! 6. survival reward, contact rewards, then evictions

use std::collections::HashMap;

use log::{debug, info, trace};

use crate::simulation::decision::{DecisionSource, Observation};
use crate::simulation::environment::Environment;
use crate::simulation::integrator::move_body_dt;
use crate::simulation::interactions::{Contact, InteractionSet};
use crate::simulation::params::Parameters;
use crate::simulation::registry::{BodyId, BodyRegistry};
use crate::simulation::scoring::{ScoreBoard, Scoring};
use crate::simulation::states::{Body, BodyKind};

/// What happened during one step
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub step: u64,
    pub contacts: Vec<Contact>,
    pub bounced: Vec<BodyId>,
    pub evicted: Vec<BodyId>,
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub contacts: usize,
    pub bounces: usize,
    pub evicted: usize,
    pub bots_left: usize,
}

pub struct Session {
    pub environment: Environment,
    pub parameters: Parameters,
    pub bodies: BodyRegistry,
    pub interactions: InteractionSet,
    pub scoring: Scoring,
    scores: ScoreBoard,
    controllers: HashMap<BodyId, Box<dyn DecisionSource>>,
    step: u64,
}

impl Session {
    pub fn new(environment: Environment, parameters: Parameters) -> Self {
        Self {
            environment,
            parameters,
            bodies: BodyRegistry::new(),
            interactions: InteractionSet::new(),
            scoring: Scoring::default(),
            scores: ScoreBoard::new(),
            controllers: HashMap::new(),
            step: 0,
        }
    }

    pub fn with_interactions(mut self, interactions: InteractionSet) -> Self {
        self.interactions = interactions;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Register a body; bots start on the score board at zero
    pub fn spawn(&mut self, body: Body) -> BodyId {
        let is_bot = body.kind == BodyKind::Bot;
        let id = self.bodies.insert(body);
        if is_bot {
            self.scores.enroll(id);
        }
        id
    }

    /// Register a body steered by `source`
    pub fn spawn_controlled(&mut self, body: Body, source: Box<dyn DecisionSource>) -> BodyId {
        let id = self.spawn(body);
        self.controllers.insert(id, source);
        id
    }

    /// Attach or replace the decision source of a registered body
    pub fn set_controller(&mut self, id: BodyId, source: Box<dyn DecisionSource>) -> bool {
        if !self.bodies.contains(id) {
            return false;
        }
        self.controllers.insert(id, source);
        true
    }

    /// Take a body out of the session. Its fitness stays on the board.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.controllers.remove(&id);
        self.bodies.remove(id)
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn bots_left(&self) -> usize {
        self.bodies.count(BodyKind::Bot)
    }

    /// True once the configured steps ran out, or every bot is gone
    pub fn is_finished(&self) -> bool {
        if self.step >= self.parameters.steps {
            return true;
        }
        self.parameters.stop_when_no_bots
            && !self.scores.is_empty()
            && self.bots_left() == 0
    }

    pub fn step(&mut self) -> StepReport {
        self.apply_decisions();

        let dt = self.parameters.dt;
        for (_, body) in self.bodies.iter_mut() {
            move_body_dt(body, dt);
            self.environment.add_air_resistance(body);
        }

        let contacts = self.interactions.apply(&self.environment, &mut self.bodies);

        let mut bounced = Vec::new();
        for (id, body) in self.bodies.iter_mut() {
            if self.environment.bounce(body) {
                bounced.push(id);
            }
        }

        let evicted = self.settle_scores(&contacts, &bounced);
        for id in &evicted {
            if let Some(body) = self.remove(*id) {
                debug!(
                    "step {}: evicted {} with fitness {:.2}",
                    self.step,
                    body.name,
                    self.scores.fitness(*id).unwrap_or_default()
                );
            }
        }

        self.step += 1;
        trace!(
            "step {}: {} contacts, {} bounces, {} bodies",
            self.step,
            contacts.len(),
            bounced.len(),
            self.bodies.len()
        );

        StepReport {
            step: self.step,
            contacts,
            bounced,
            evicted,
        }
    }

    /// Step until [`Session::is_finished`]
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();
        while !self.is_finished() {
            let report = self.step();
            summary.steps += 1;
            summary.contacts += report.contacts.len();
            summary.bounces += report.bounced.len();
            summary.evicted += report.evicted.len();
        }
        summary.bots_left = self.bots_left();

        info!(
            "run finished after {} steps: {} contacts, {} bounces, {} evicted, {} bots left",
            summary.steps, summary.contacts, summary.bounces, summary.evicted, summary.bots_left
        );
        summary
    }

    fn apply_decisions(&mut self) {
        let thrust = self.parameters.thrust;
        for id in self.bodies.ids() {
            let impulses = match self.controllers.get_mut(&id) {
                Some(source) => match Observation::of(&self.bodies, id) {
                    Some(obs) => source.decide(&obs).impulses(thrust),
                    None => continue,
                },
                None => Vec::new(),
            };

            let Some(body) = self.bodies.get_mut(id) else {
                continue;
            };
            for impulse in impulses {
                self.environment.accelerate(body, impulse);
            }
            if self.parameters.apply_gravity {
                self.environment.apply_gravity(body);
            }
            if let Some(limit) = self.parameters.speed_limit {
                body.speed = body.speed.min(limit);
            }
        }
    }

    // rewards for this step; returns the bots to evict
    fn settle_scores(&mut self, contacts: &[Contact], bounced: &[BodyId]) -> Vec<BodyId> {
        for id in self.bodies.ids_of(BodyKind::Bot) {
            self.scores.add(id, self.scoring.survival_reward);
        }

        if self.scoring.boundary_reward != 0.0 {
            for id in bounced {
                if self.is_bot(*id) {
                    self.scores.add(*id, self.scoring.boundary_reward);
                }
            }
        }

        let mut evicted = Vec::new();
        for contact in contacts {
            for id in [contact.a, contact.b] {
                if !self.is_bot(id) {
                    continue;
                }
                self.scores.add(id, contact.reward);
                if contact.evict && !evicted.contains(&id) {
                    evicted.push(id);
                }
            }
        }
        evicted
    }

    fn is_bot(&self, id: BodyId) -> bool {
        self.bodies.get(id).is_some_and(|b| b.kind == BodyKind::Bot)
    }
}
