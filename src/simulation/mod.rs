pub mod polar;
pub mod states;
pub mod params;
pub mod environment;
pub mod integrator;
pub mod registry;
pub mod decision;
pub mod interactions;
pub mod scoring;
pub mod session;
pub mod scenario;
