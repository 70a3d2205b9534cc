//! Decision sources: whatever steers a body each step
//!
//! A human at a keyboard and an evolved network look the same to the
//! session: both turn an [`Observation`] into a [`Thrust`], which becomes up
//! to four fixed-size impulses. The network itself is opaque here; any
//! `FnMut(&[f64]) -> Vec<f64>` can stand in for one.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::simulation::polar::PolarVec;
use crate::simulation::registry::{BodyId, BodyRegistry};
use crate::simulation::states::{BodyKind, NVec2};

/// Network outputs above this fire their direction
pub const OUTPUT_THRESHOLD: f64 = 0.5;

/// Which of the four directional impulses to apply this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thrust {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Thrust {
    pub const NONE: Thrust = Thrust { left: false, right: false, up: false, down: false };

    /// Keyboard-style thrust: left beats right, up beats down
    pub fn keyboard(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self {
            left,
            right: right && !left,
            up,
            down: down && !up,
        }
    }

    /// Threshold raw outputs ordered `[left, right, up, down]`
    /// Missing outputs count as not fired.
    pub fn from_outputs(outputs: &[f64]) -> Self {
        let fired = |k: usize| outputs.get(k).is_some_and(|o| *o > OUTPUT_THRESHOLD);
        Self {
            left: fired(0),
            right: fired(1),
            up: fired(2),
            down: fired(3),
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Thrust::NONE
    }

    /// The fired directions as impulses of `magnitude`
    pub fn impulses(&self, magnitude: f64) -> Vec<PolarVec> {
        let mut out = Vec::with_capacity(4);
        if self.left {
            out.push(PolarVec::new(-FRAC_PI_2, magnitude));
        }
        if self.right {
            out.push(PolarVec::new(FRAC_PI_2, magnitude));
        }
        if self.up {
            out.push(PolarVec::new(0.0, magnitude));
        }
        if self.down {
            out.push(PolarVec::new(PI, magnitude));
        }
        out
    }
}

/// What a decision source gets to look at
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub position: NVec2,
    pub nearest_player: Option<NVec2>,
    /// `[x, y, |dx|, |dy|]` to the nearest player, then `|dx|, |dy|` per obstacle
    pub inputs: Vec<f64>,
}

impl Observation {
    /// Build the observation for `id`, or `None` if it is not registered
    pub fn of(registry: &BodyRegistry, id: BodyId) -> Option<Self> {
        let me = registry.get(id)?;
        let position = me.x;

        let nearest_player = registry
            .iter()
            .filter(|(other, b)| *other != id && b.kind == BodyKind::Player)
            .map(|(_, b)| b.x)
            .min_by(|p, q| {
                (p - position).norm_squared().total_cmp(&(q - position).norm_squared())
            });

        let mut inputs = vec![position.x, position.y];
        let to_player = nearest_player.map(|p| p - position).unwrap_or_else(NVec2::zeros);
        inputs.extend([to_player.x.abs(), to_player.y.abs()]);

        for (other, b) in registry.iter() {
            if other != id && b.kind == BodyKind::Obstacle {
                inputs.extend([(position.x - b.x.x).abs(), (position.y - b.x.y).abs()]);
            }
        }

        Some(Self { position, nearest_player, inputs })
    }
}

pub trait DecisionSource {
    fn decide(&mut self, obs: &Observation) -> Thrust;
}

/// Never thrusts
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl DecisionSource for Idle {
    fn decide(&mut self, _obs: &Observation) -> Thrust {
        Thrust::NONE
    }
}

/// Replays a fixed thrust sequence, wrapping around at the end
#[derive(Debug, Clone)]
pub struct Scripted {
    script: Vec<Thrust>,
    cursor: usize,
}

impl Scripted {
    pub fn new(script: Vec<Thrust>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl DecisionSource for Scripted {
    fn decide(&mut self, _obs: &Observation) -> Thrust {
        if self.script.is_empty() {
            return Thrust::NONE;
        }
        let t = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        t
    }
}

/// Steers toward the nearest player
#[derive(Debug, Clone, Copy)]
pub struct Pursue {
    pub dead_zone: f64,
}

/// Steers away from the nearest player
#[derive(Debug, Clone, Copy)]
pub struct Flee {
    pub dead_zone: f64,
}

impl Default for Pursue {
    fn default() -> Self {
        Self { dead_zone: 1.0 }
    }
}

impl Default for Flee {
    fn default() -> Self {
        Self { dead_zone: 1.0 }
    }
}

// thrust toward `delta` on each axis outside the dead zone
fn steer(delta: NVec2, dead_zone: f64) -> Thrust {
    Thrust::keyboard(
        delta.x < -dead_zone,
        delta.x > dead_zone,
        delta.y < -dead_zone,
        delta.y > dead_zone,
    )
}

impl DecisionSource for Pursue {
    fn decide(&mut self, obs: &Observation) -> Thrust {
        match obs.nearest_player {
            Some(p) => steer(p - obs.position, self.dead_zone),
            None => Thrust::NONE,
        }
    }
}

impl DecisionSource for Flee {
    fn decide(&mut self, obs: &Observation) -> Thrust {
        match obs.nearest_player {
            Some(p) => steer(obs.position - p, self.dead_zone),
            None => Thrust::NONE,
        }
    }
}

/// Opaque network: feeds `inputs` to a function and thresholds its outputs
pub struct NetworkOutputs<F> {
    net: F,
}

impl<F> NetworkOutputs<F>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    pub fn new(net: F) -> Self {
        Self { net }
    }
}

impl<F> DecisionSource for NetworkOutputs<F>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn decide(&mut self, obs: &Observation) -> Thrust {
        let outputs = (self.net)(&obs.inputs);
        Thrust::from_outputs(&outputs)
    }
}
