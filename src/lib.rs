//! Reinforcement-learning arena: a circular robot travels at constant speed through a
//! rectangular arena with static circular obstacles and tries to reach a goal. A controller
//! steers it one tick at a time through [`Environment::step`].


pub mod config;
pub mod domain;
pub mod environment;
pub mod policy;

pub use config::{ConfigError, EnvironmentConfig, ObservationKind, RewardConfig};
pub use domain::{Layout, Status};
pub use environment::{
    Action, BodySnapshot, Environment, EnvironmentError, Observation, RenderSnapshot, StepResult,
};
pub use policy::{Policy, RandomPolicy};
