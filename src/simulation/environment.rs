//! Physics operators over circular bodies
//!
//! `Environment` owns only configuration (bounds, drag, wall elasticity,
//! gravity, attraction constant). Every operator mutates the bodies passed to
//! it and keeps no per-body state.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::PhysicsError;
use crate::simulation::polar::{add_vectors, PolarVec};
use crate::simulation::states::{Body, Rgb};

pub const DEFAULT_AIR_MASS: f64 = 0.02;
pub const DEFAULT_WALL_ELASTICITY: f64 = 0.75;
pub const DEFAULT_ATTRACTION: f64 = 0.1;
/// Straight down, small
pub const DEFAULT_GRAVITY: PolarVec = PolarVec { angle: PI, magnitude: 0.01 };

/// Outcome of [`Environment::attraction`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attraction {
    /// Bodies already overlap; nothing was applied
    Colliding,
    /// Inverse-square pull applied with this force
    Attracted { force: f64 },
}

impl Attraction {
    pub fn is_colliding(self) -> bool {
        matches!(self, Attraction::Colliding)
    }
}

#[derive(Debug, Clone)]
pub struct Environment {
    width: f64,
    height: f64,
    air_mass: f64,     // drag coefficient
    elasticity: f64,   // wall elasticity
    pub gravity: PolarVec,
    pub attraction: f64, // constant k in k*m1*m2/d^2
    pub color: Rgb,
}

impl Environment {
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        check_bounds(width, height)?;
        Ok(Self {
            width,
            height,
            air_mass: DEFAULT_AIR_MASS,
            elasticity: DEFAULT_WALL_ELASTICITY,
            gravity: DEFAULT_GRAVITY,
            attraction: DEFAULT_ATTRACTION,
            color: Rgb(255, 255, 255),
        })
    }

    pub fn with_air_mass(mut self, air_mass: f64) -> Result<Self, PhysicsError> {
        if !(air_mass.is_finite() && air_mass > 0.0) {
            return Err(PhysicsError::InvalidAirMass(air_mass));
        }
        self.air_mass = air_mass;
        Ok(self)
    }

    pub fn with_elasticity(mut self, elasticity: f64) -> Result<Self, PhysicsError> {
        if !(elasticity > 0.0 && elasticity <= 1.0) {
            return Err(PhysicsError::InvalidElasticity(elasticity));
        }
        self.elasticity = elasticity;
        Ok(self)
    }

    pub fn with_gravity(mut self, gravity: PolarVec) -> Result<Self, PhysicsError> {
        if !gravity.angle.is_finite() {
            return Err(PhysicsError::InvalidParameter {
                name: "gravity.angle",
                value: gravity.angle,
            });
        }
        if !(gravity.magnitude.is_finite() && gravity.magnitude >= 0.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "gravity.magnitude",
                value: gravity.magnitude,
            });
        }
        self.gravity = gravity;
        Ok(self)
    }

    pub fn with_attraction(mut self, k: f64) -> Result<Self, PhysicsError> {
        if !(k.is_finite() && k >= 0.0) {
            return Err(PhysicsError::InvalidParameter { name: "attraction", value: k });
        }
        self.attraction = k;
        Ok(self)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn air_mass(&self) -> f64 {
        self.air_mass
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Change the bounds, e.g. after the window was resized
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), PhysicsError> {
        check_bounds(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Add an impulse to the body's velocity
    pub fn accelerate(&self, body: &mut Body, impulse: PolarVec) {
        body.set_velocity(add_vectors(body.velocity(), impulse));
    }

    /// Add the environment's gravity as an impulse
    pub fn apply_gravity(&self, body: &mut Body) {
        self.accelerate(body, self.gravity);
    }

    /// Scale speed by `(m / (m + air_mass)) ^ radius`
    ///
    /// The radius exponent makes large bodies lose speed faster.
    pub fn add_air_resistance(&self, body: &mut Body) {
        let m = body.mass();
        body.speed *= (m / (m + self.air_mass)).powf(body.radius());
    }

    /// Pull two bodies toward each other with an inverse-square force
    ///
    /// Overlapping bodies are left untouched and reported as
    /// [`Attraction::Colliding`]; that guard is what keeps the distance away
    /// from zero.
    pub fn attraction(&self, a: &mut Body, b: &mut Body) -> Attraction {
        let dx = a.x.x - b.x.x;
        let dy = a.x.y - b.x.y;
        let distance = dx.hypot(dy);

        if distance < a.radius() + b.radius() {
            return Attraction::Colliding;
        }

        let theta = dy.atan2(dx);
        let force = self.attraction * a.mass() * b.mass() / (distance * distance);
        let pull_a = PolarVec::new(theta - FRAC_PI_2, force / a.mass());
        let pull_b = PolarVec::new(theta + FRAC_PI_2, force / b.mass());
        self.accelerate(a, pull_a);
        self.accelerate(b, pull_b);

        Attraction::Attracted { force }
    }

    /// True when the two circles overlap. Pure and symmetric.
    pub fn overlaps(&self, a: &Body, b: &Body) -> bool {
        a.distance_to(b) < a.radius() + b.radius()
    }

    /// Bounce two overlapping bodies off each other
    ///
    /// Each body keeps a mass-weighted share of its own velocity and receives
    /// a share of the other's speed along the contact angle
    /// `atan2(dy, dx) + π/2`. `a` is updated first and `b`'s received share is
    /// computed from `a`'s updated speed. Both speeds are then scaled by the
    /// product of the elasticities and the bodies are pushed apart until they
    /// sit one pixel past tangency.
    ///
    /// Returns false (and changes nothing) when the bodies do not overlap.
    pub fn resolve_collision(&self, a: &mut Body, b: &mut Body) -> bool {
        let dx = a.x.x - b.x.x;
        let dy = a.x.y - b.x.y;
        let distance = dx.hypot(dy);

        if distance >= a.radius() + b.radius() {
            return false;
        }

        let contact = dy.atan2(dx) + FRAC_PI_2;
        let (ma, mb) = (a.mass(), b.mass());
        let total_mass = ma + mb;

        let kept_a = PolarVec::new(a.angle, a.speed * (ma - mb) / total_mass);
        let given_a = PolarVec::new(contact, 2.0 * b.speed * mb / total_mass);
        a.set_velocity(add_vectors(kept_a, given_a));

        let kept_b = PolarVec::new(b.angle, b.speed * (mb - ma) / total_mass);
        let given_b = PolarVec::new(contact + PI, 2.0 * a.speed * ma / total_mass);
        b.set_velocity(add_vectors(kept_b, given_b));

        let elasticity = a.elasticity() * b.elasticity();
        a.speed *= elasticity;
        b.speed *= elasticity;

        // +1 pushes past exact tangency so the pair is not re-detected
        let overlap = 0.5 * (a.radius() + b.radius() - distance + 1.0);
        let push = PolarVec::new(contact, overlap).screen_offset();
        a.x += push;
        b.x -= push;

        true
    }

    /// Reflect a body that crossed a wall back into the arena
    ///
    /// Horizontal and vertical walls are handled independently, so a body
    /// past a corner is corrected on both axes in one call. The reflected
    /// coordinate is clamped to `[radius, bound - radius]`.
    ///
    /// Returns true if any wall was hit.
    pub fn bounce(&self, body: &mut Body) -> bool {
        let r = body.radius();
        let mut hit = false;

        let (left, right) = (r, self.width - r);
        if body.x.x < left {
            body.x.x = clamp_axis(2.0 * left - body.x.x, left, right);
            body.angle = -body.angle;
            body.speed *= self.elasticity;
            hit = true;
        } else if body.x.x > right {
            body.x.x = clamp_axis(2.0 * right - body.x.x, left, right);
            body.angle = -body.angle;
            body.speed *= self.elasticity;
            hit = true;
        }

        let (top, bottom) = (r, self.height - r);
        if body.x.y < top {
            body.x.y = clamp_axis(2.0 * top - body.x.y, top, bottom);
            body.angle = PI - body.angle;
            body.speed *= self.elasticity;
            hit = true;
        } else if body.x.y > bottom {
            body.x.y = clamp_axis(2.0 * bottom - body.x.y, top, bottom);
            body.angle = PI - body.angle;
            body.speed *= self.elasticity;
            hit = true;
        }

        hit
    }
}

fn check_bounds(width: f64, height: f64) -> Result<(), PhysicsError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidBounds { width, height })
    }
}

// a body wider than the arena sits in the middle of it
fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        0.5 * (lo + hi)
    } else {
        v.clamp(lo, hi)
    }
}
