//! Core state types for the circle physics.
//!
//! - `Body`     one circular object (player, bot or obstacle)
//! - `BodyKind` tag used for construction presets and by the session driver
//! - `Rgb`      presentation colour carried along for an external renderer
//!
//! Positions are pixel-space `NVec2` with `y` growing downward. Velocity is
//! polar: `angle` (0 = up) and a non-negative `speed` in pixels per step.

use nalgebra::Vector2;
use serde::Deserialize;

use crate::error::PhysicsError;
use crate::simulation::polar::PolarVec;

pub type NVec2 = Vector2<f64>;

pub const DEFAULT_RADIUS: f64 = 50.0;
pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_ELASTICITY: f64 = 0.9;

/// Which role a body plays in a session
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Player,
    Bot,
    Obstacle,
}

impl BodyKind {
    pub fn default_color(self) -> Rgb {
        match self {
            BodyKind::Player => Rgb(0, 0, 255),
            BodyKind::Bot => Rgb(255, 0, 0),
            BodyKind::Obstacle => Rgb(128, 128, 128),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Player => "player",
            BodyKind::Bot => "bot",
            BodyKind::Obstacle => "obstacle",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A movable circle
///
/// `radius`, `mass` and `elasticity` are fixed at creation and validated by
/// [`BodyBuilder::build`]; read them through the accessors.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub color: Rgb,
    pub x: NVec2,    // position (circle centre)
    pub angle: f64,  // heading, radians
    pub speed: f64,  // pixels per step, >= 0
    radius: f64,
    m: f64,
    elasticity: f64,
}

impl Body {
    pub fn builder(kind: BodyKind, position: NVec2, radius: f64) -> BodyBuilder {
        BodyBuilder {
            kind,
            position,
            radius,
            name: None,
            mass: DEFAULT_MASS,
            elasticity: DEFAULT_ELASTICITY,
            color: None,
            velocity: PolarVec::ZERO,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    pub fn velocity(&self) -> PolarVec {
        PolarVec::new(self.angle, self.speed)
    }

    pub fn set_velocity(&mut self, v: PolarVec) {
        self.angle = v.angle;
        self.speed = v.magnitude;
    }

    /// Distance between the two centres
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }
}

/// Collects optional body settings before validating them
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    kind: BodyKind,
    position: NVec2,
    radius: f64,
    name: Option<String>,
    mass: f64,
    elasticity: f64,
    color: Option<Rgb>,
    velocity: PolarVec,
}

impl BodyBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn velocity(mut self, angle: f64, speed: f64) -> Self {
        self.velocity = PolarVec::new(angle, speed);
        self
    }

    pub fn build(self) -> Result<Body, PhysicsError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(self.radius));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidMass(self.mass));
        }
        if !(self.elasticity > 0.0 && self.elasticity <= 1.0) {
            return Err(PhysicsError::InvalidElasticity(self.elasticity));
        }
        let speed = self.velocity.magnitude;
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(PhysicsError::InvalidSpeed(speed));
        }

        Ok(Body {
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            color: self.color.unwrap_or_else(|| self.kind.default_color()),
            x: self.position,
            angle: self.velocity.angle,
            speed,
            radius: self.radius,
            m: self.mass,
            elasticity: self.elasticity,
        })
    }
}
