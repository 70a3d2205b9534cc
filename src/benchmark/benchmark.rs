use std::time::Instant;

use crate::error::PhysicsError;
use crate::simulation::decision::Flee;
use crate::simulation::environment::Environment;
use crate::simulation::interactions::{Effect, InteractionSet, PairRule};
use crate::simulation::params::Parameters;
use crate::simulation::session::Session;
use crate::simulation::states::{Body, BodyKind, NVec2};

const WIDTH: f64 = 1440.0;
const HEIGHT: f64 = 900.0;

/// Deterministic spread of `n` bodies over the arena, no rand needed
fn place(i: usize) -> NVec2 {
    let i_f = i as f64;
    NVec2::new(
        WIDTH * 0.5 + (i_f * 0.37).sin() * WIDTH * 0.45,
        HEIGHT * 0.5 + (i_f * 0.13).cos() * HEIGHT * 0.45,
    )
}

/// Helper to build a session with one player, `n / 2` obstacles and
/// `n / 2` fleeing bots
fn make_session(n: usize) -> Result<Session, PhysicsError> {
    let env = Environment::new(WIDTH, HEIGHT)?;
    let params = Parameters {
        steps: u64::MAX,
        stop_when_no_bots: false,
        ..Parameters::default()
    };
    let rules = InteractionSet::new()
        .with(PairRule::new(BodyKind::Player, BodyKind::Bot, Effect::Attract))
        .with(PairRule::new(BodyKind::Obstacle, BodyKind::Bot, Effect::Bounce))
        .with(PairRule::new(BodyKind::Obstacle, BodyKind::Obstacle, Effect::Bounce));

    let mut session = Session::new(env, params).with_interactions(rules);
    let player = Body::builder(BodyKind::Player, NVec2::new(100.0, HEIGHT / 2.0), 20.0)
        .mass(100.0)
        .build()?;
    session.spawn(player);

    for i in 0..n {
        if i % 2 == 0 {
            session.spawn(Body::builder(BodyKind::Obstacle, place(i), 15.0).mass(50.0).build()?);
        } else {
            let bot = Body::builder(BodyKind::Bot, place(i), 10.0).mass(50.0).build()?;
            session.spawn_controlled(bot, Box::new(Flee::default()));
        }
    }
    Ok(session)
}

/// Time one pass of the pair rules for growing body counts
pub fn bench_pairs() -> Result<(), PhysicsError> {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let mut session = make_session(n)?;

        // Warm up
        session.interactions.apply(&session.environment, &mut session.bodies);

        let t0 = Instant::now();
        let contacts = session.interactions.apply(&session.environment, &mut session.bodies);
        let dt_pairs = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, pairs = {:8.6} s, contacts = {}", dt_pairs, contacts.len());
    }
    Ok(())
}

/// Time full session steps for growing body counts
/// Prints CSV so it can be pasted straight into a spreadsheet
pub fn bench_session() -> Result<(), PhysicsError> {
    println!("N,step_ms");

    for n in (100..=1600).step_by(100) {
        // small n: average over more steps to smooth noise
        let steps = if n <= 400 { 20 } else { 5 };
        let mut session = make_session(n)?;

        // Warm-up one step
        session.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            session.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
