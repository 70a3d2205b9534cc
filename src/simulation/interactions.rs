//! Pairwise interaction rules for a session
//!
//! Which pairs attract, which bounce and which merely get detected depends on
//! the game being played, not on the physics. An [`InteractionSet`] holds
//! those rules keyed by [`BodyKind`] pairs and turns them into calls on the
//! [`Environment`] operators.

use log::debug;
use serde::Deserialize;

use crate::simulation::environment::Environment;
use crate::simulation::registry::{BodyId, BodyRegistry};
use crate::simulation::states::{Body, BodyKind};

/// Which environment operator a rule runs
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// inverse-square pull; already overlapping counts as contact
    Attract,
    /// elastic collision response
    Bounce,
    /// overlap test only
    Touch,
}

impl Effect {
    /// Run the effect on a pair, returning true on contact
    pub fn apply(self, env: &Environment, a: &mut Body, b: &mut Body) -> bool {
        match self {
            Effect::Attract => env.attraction(a, b).is_colliding(),
            Effect::Bounce => env.resolve_collision(a, b),
            Effect::Touch => env.overlaps(a, b),
        }
    }
}

/// One rule: what happens between two kinds of bodies
#[derive(Debug, Clone, PartialEq)]
pub struct PairRule {
    pub between: (BodyKind, BodyKind),
    pub effect: Effect,
    pub reward: f64, // fitness delta for each bot in the pair on contact
    pub evict: bool, // remove the bots in the pair on contact
}

impl PairRule {
    pub fn new(a: BodyKind, b: BodyKind, effect: Effect) -> Self {
        Self {
            between: (a, b),
            effect,
            reward: 0.0,
            evict: false,
        }
    }

    pub fn reward(mut self, reward: f64) -> Self {
        self.reward = reward;
        self
    }

    pub fn evict(mut self, evict: bool) -> Self {
        self.evict = evict;
        self
    }

    /// Whether the rule applies to these kinds, in either order
    pub fn matches(&self, a: BodyKind, b: BodyKind) -> bool {
        let (x, y) = self.between;
        (x == a && y == b) || (x == b && y == a)
    }
}

/// A contact produced by a rule during one step
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
    pub effect: Effect,
    pub reward: f64,
    pub evict: bool,
}

/// Ordered collection of pair rules
#[derive(Debug, Clone, Default)]
pub struct InteractionSet {
    rules: Vec<PairRule>,
}

impl InteractionSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule
    pub fn with(mut self, rule: PairRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[PairRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every matching rule over every unordered pair of bodies
    /// Pairs are visited in registry order, rules in insertion order.
    pub fn apply(&self, env: &Environment, bodies: &mut BodyRegistry) -> Vec<Contact> {
        let mut contacts = Vec::new();
        if self.rules.is_empty() {
            return contacts;
        }

        let ids = bodies.ids();
        for (i, &id_a) in ids.iter().enumerate() {
            for &id_b in &ids[i + 1..] {
                let Some((a, b)) = bodies.pair_mut(id_a, id_b) else {
                    continue;
                };
                for rule in &self.rules {
                    if !rule.matches(a.kind, b.kind) {
                        continue;
                    }
                    if rule.effect.apply(env, a, b) {
                        debug!("{:?} contact between {} and {}", rule.effect, a.name, b.name);
                        contacts.push(Contact {
                            a: id_a,
                            b: id_b,
                            effect: rule.effect,
                            reward: rule.reward,
                            evict: rule.evict,
                        });
                    }
                }
            }
        }
        contacts
    }
}
