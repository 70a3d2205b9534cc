pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{ConfigError, PhysicsError};

pub use simulation::polar::{add_vectors, PolarVec};
pub use simulation::states::{Body, BodyBuilder, BodyKind, NVec2, Rgb};
pub use simulation::environment::{Attraction, Environment};
pub use simulation::integrator::{move_body, move_body_dt};
pub use simulation::params::Parameters;
pub use simulation::registry::{BodyId, BodyRegistry};
pub use simulation::decision::{
    DecisionSource, Flee, Idle, NetworkOutputs, Observation, Pursue, Scripted, Thrust,
};
pub use simulation::interactions::{Contact, Effect, InteractionSet, PairRule};
pub use simulation::scoring::{ScoreBoard, Scoring};
pub use simulation::session::{RunSummary, Session, StepReport};
pub use simulation::scenario::build_session;

pub use configuration::config::{
    BodyConfig, ControllerConfig, EnvironmentConfig, ParametersConfig, RuleConfig,
    ScenarioConfig, SpawnConfig,
};

pub use benchmark::benchmark::{bench_pairs, bench_session};
