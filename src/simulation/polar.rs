//! Polar vectors and their composition
//!
//! Velocities and impulses are kept as (angle, magnitude) so drag and
//! collision response can scale speed directly. Only addition goes through
//! Cartesian space.
//!
//! Angle convention: 0 points "up" (screen -y) and positive angles rotate
//! toward +x. For composition a vector decomposes as
//! `x = sin(angle) * magnitude`, `y = cos(angle) * magnitude`.

use std::f64::consts::FRAC_PI_2;
use std::ops::Add;

use super::states::NVec2;

/// A vector expressed as a direction and a non-negative length
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarVec {
    pub angle: f64,     // radians, 0 = up
    pub magnitude: f64, // length
}

impl PolarVec {
    pub const ZERO: PolarVec = PolarVec { angle: 0.0, magnitude: 0.0 };

    pub fn new(angle: f64, magnitude: f64) -> Self {
        Self { angle, magnitude }
    }

    /// Components in the composition frame (`y` grows "up")
    pub fn components(self) -> NVec2 {
        NVec2::new(
            self.angle.sin() * self.magnitude,
            self.angle.cos() * self.magnitude,
        )
    }

    /// Inverse of [`PolarVec::components`]
    ///
    /// The angle of a zero vector comes out as `π/2` (from `atan2(0, 0) = 0`);
    /// callers must not read meaning into it.
    pub fn from_components(c: NVec2) -> Self {
        Self {
            angle: FRAC_PI_2 - c.y.atan2(c.x),
            magnitude: c.x.hypot(c.y),
        }
    }

    /// Displacement on screen, where `y` grows downward
    pub fn screen_offset(self) -> NVec2 {
        NVec2::new(
            self.angle.sin() * self.magnitude,
            -self.angle.cos() * self.magnitude,
        )
    }
}

impl Add for PolarVec {
    type Output = PolarVec;

    fn add(self, rhs: PolarVec) -> PolarVec {
        add_vectors(self, rhs)
    }
}

/// Sum two polar vectors
pub fn add_vectors(a: PolarVec, b: PolarVec) -> PolarVec {
    PolarVec::from_components(a.components() + b.components())
}
