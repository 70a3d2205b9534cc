//! Runtime parameters for a session
//!
//! `Parameters` holds the driver settings:
//! - step count and step size,
//! - impulse size for a fired thrust and the speed limit,
//! - whether gravity is added each step,
//! - random seed for spawn groups

use crate::error::PhysicsError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub steps: u64,               // steps to run
    pub dt: f64,                  // step size, 1.0 = one tick
    pub thrust: f64,              // magnitude of one directional impulse
    pub speed_limit: Option<f64>, // clamp applied to every body after decisions
    pub apply_gravity: bool,      // add Environment::gravity to every body
    pub stop_when_no_bots: bool,  // end the run once every bot is gone
    pub seed: u64,                // spawn placement
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            steps: 1000,
            dt: 1.0,
            thrust: 2.0,
            speed_limit: Some(20.0),
            apply_gravity: false,
            stop_when_no_bots: true,
            seed: 42,
        }
    }
}

impl Parameters {
    /// Reject values that would make speeds negative or positions non-finite
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(PhysicsError::InvalidParameter { name: "dt", value: self.dt });
        }
        if !(self.thrust.is_finite() && self.thrust >= 0.0) {
            return Err(PhysicsError::InvalidParameter { name: "thrust", value: self.thrust });
        }
        if let Some(limit) = self.speed_limit {
            // +inf is allowed and means "no limit"
            if limit.is_nan() || limit < 0.0 {
                return Err(PhysicsError::InvalidParameter { name: "speed_limit", value: limit });
            }
        }
        Ok(())
    }
}
