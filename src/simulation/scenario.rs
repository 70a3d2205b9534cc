//! Build ready-to-run sessions from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Session` containing:
//! - the environment (bounds and physics constants)
//! - runtime parameters (`Parameters`)
//! - the explicitly placed bodies, then every spawn group, in file order
//! - decision sources for the bodies that name one
//! - pair rules and scoring
//!
//! Spawn groups draw positions and radii from a `StdRng` seeded with
//! `parameters.seed`, so a scenario file always produces the same session.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{
    BodyConfig, ControllerConfig, EnvironmentConfig, ParametersConfig, ScenarioConfig, SpawnConfig,
};
use crate::error::ConfigError;
use crate::simulation::decision::{DecisionSource, Flee, Idle, Pursue};
use crate::simulation::environment::Environment;
use crate::simulation::interactions::{InteractionSet, PairRule};
use crate::simulation::params::Parameters;
use crate::simulation::polar::PolarVec;
use crate::simulation::session::Session;
use crate::simulation::states::{Body, NVec2, DEFAULT_MASS, DEFAULT_RADIUS};

pub fn build_session(cfg: &ScenarioConfig) -> Result<Session, ConfigError> {
    let environment = build_environment(&cfg.environment)?;
    let parameters = build_parameters(&cfg.parameters)?;
    let mut rng = StdRng::seed_from_u64(parameters.seed);

    // Rules: one PairRule per config entry, order preserved
    let interactions = cfg.rules.iter().fold(InteractionSet::new(), |set, r| {
        set.with(
            PairRule::new(r.between[0], r.between[1], r.effect)
                .reward(r.reward)
                .evict(r.evict),
        )
    });

    let mut session = Session::new(environment, parameters)
        .with_interactions(interactions)
        .with_scoring(cfg.scoring);

    for bc in &cfg.bodies {
        let body = build_body(bc)?;
        spawn(&mut session, body, bc.controller);
    }

    for sc in &cfg.spawns {
        spawn_group(&mut session, sc, &mut rng)?;
    }

    info!(
        "built session: {}x{} arena, {} bodies, {} rules",
        session.environment.width(),
        session.environment.height(),
        session.bodies.len(),
        session.interactions.rules().len()
    );

    Ok(session)
}

pub fn build_environment(cfg: &EnvironmentConfig) -> Result<Environment, ConfigError> {
    let mut env = Environment::new(cfg.width, cfg.height)?
        .with_air_mass(cfg.air_mass)?
        .with_elasticity(cfg.elasticity)?
        .with_gravity(PolarVec::new(cfg.gravity.angle, cfg.gravity.magnitude))?
        .with_attraction(cfg.attraction)?;
    if let Some(color) = cfg.color {
        env.color = color;
    }
    Ok(env)
}

pub fn build_parameters(cfg: &ParametersConfig) -> Result<Parameters, ConfigError> {
    let params = Parameters {
        steps: cfg.steps,
        dt: cfg.dt,
        thrust: cfg.thrust,
        speed_limit: cfg.speed_limit,
        apply_gravity: cfg.apply_gravity,
        stop_when_no_bots: cfg.stop_when_no_bots,
        seed: cfg.seed,
    };
    params.validate()?;
    Ok(params)
}

/// Map `BodyConfig` -> runtime `Body`
pub fn build_body(bc: &BodyConfig) -> Result<Body, ConfigError> {
    let mut builder = Body::builder(
        bc.kind,
        NVec2::new(bc.x[0], bc.x[1]),
        bc.radius.unwrap_or(DEFAULT_RADIUS),
    )
    .mass(bc.mass.unwrap_or(DEFAULT_MASS))
    .velocity(bc.angle, bc.speed);

    if let Some(name) = &bc.name {
        builder = builder.name(name.clone());
    }
    if let Some(e) = bc.elasticity {
        builder = builder.elasticity(e);
    }
    if let Some(color) = bc.color {
        builder = builder.color(color);
    }
    Ok(builder.build()?)
}

pub fn controller_for(cfg: ControllerConfig) -> Option<Box<dyn DecisionSource>> {
    match cfg {
        ControllerConfig::None => None,
        ControllerConfig::Idle => Some(Box::new(Idle)),
        ControllerConfig::Pursue => Some(Box::new(Pursue::default())),
        ControllerConfig::Flee => Some(Box::new(Flee::default())),
    }
}

fn spawn(session: &mut Session, body: Body, controller: ControllerConfig) {
    match controller_for(controller) {
        Some(source) => session.spawn_controlled(body, source),
        None => session.spawn(body),
    };
}

fn spawn_group(
    session: &mut Session,
    sc: &SpawnConfig,
    rng: &mut StdRng,
) -> Result<(), ConfigError> {
    let [min_r, max_r] = sc.radius;
    if !(min_r > 0.0 && min_r <= max_r && max_r.is_finite()) {
        return Err(ConfigError::InvalidRadiusRange { min: min_r, max: max_r });
    }

    let (width, height) = (session.environment.width(), session.environment.height());
    for _ in 0..sc.count {
        let radius = rng.random_range(min_r..=max_r);
        let x = uniform_inside(rng, radius, width);
        let y = uniform_inside(rng, radius, height);

        let mut builder = Body::builder(sc.kind, NVec2::new(x, y), radius)
            .mass(sc.mass.unwrap_or(DEFAULT_MASS));
        if let Some(e) = sc.elasticity {
            builder = builder.elasticity(e);
        }
        spawn(session, builder.build()?, sc.controller);
    }
    Ok(())
}

// uniform in [radius, bound - radius]; centre if the body does not fit
fn uniform_inside(rng: &mut StdRng, radius: f64, bound: f64) -> f64 {
    let (lo, hi) = (radius, bound - radius);
    if lo >= hi {
        0.5 * bound
    } else {
        rng.random_range(lo..=hi)
    }
}
