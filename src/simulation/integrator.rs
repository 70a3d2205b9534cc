//! Position integration for circle bodies
//!
//! Explicit Euler in the module's angle convention. Speeds and impulses are
//! tuned in "pixels per step", so one call with `dt = 1` is one tick.

use super::states::Body;

/// Advance a body by exactly one step of its current velocity
pub fn move_body(body: &mut Body) {
    move_body_dt(body, 1.0);
}

/// Advance a body by `dt` steps of its current velocity
///
/// x += sin(angle) * speed * dt
/// y -= cos(angle) * speed * dt
pub fn move_body_dt(body: &mut Body, dt: f64) {
    let travel = body.speed * dt;
    body.x.x += body.angle.sin() * travel;
    body.x.y -= body.angle.cos() * travel;
}
