//! Step/reset/observe interface consumed by controllers and trainers.
//!
//! The environment exclusively owns the world of the current episode. Every change of the
//! simulation state goes through [`Environment::step`]; each call either completes a whole tick
//! or fails before touching any state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::{ConfigError, EnvironmentConfig, ObservationKind},
    domain::{
        classify, physics, reward, Angle, BodyKind, LineSegment, Position, Status, Velocity,
        World,
    },
};

/// Minimum distance the robot has to travel before a new point is added to the path trail.
const PATH_RESOLUTION: f64 = 0.1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("invalid action token {0}")]
    InvalidAction(i64),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    TurnRight,
    TurnLeft,
    NoOp,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::TurnRight, Action::TurnLeft, Action::NoOp];

    /// Rotation applied to the robot's velocity for a turn angle of `angle`.
    pub fn rotation(&self, angle: Angle) -> Angle {
        match self {
            Action::TurnRight => -angle,
            Action::TurnLeft => angle,
            Action::NoOp => Angle::new(0.0),
        }
    }
}

/// Action tokens as used by learners: 0 turns right, 1 turns left, 2 keeps the direction.
impl TryFrom<i64> for Action {
    type Error = EnvironmentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::TurnRight),
            1 => Ok(Action::TurnLeft),
            2 => Ok(Action::NoOp),
            _ => Err(EnvironmentError::InvalidAction(value)),
        }
    }
}

impl From<Action> for i64 {
    fn from(value: Action) -> Self {
        match value {
            Action::TurnRight => 0,
            Action::TurnLeft => 1,
            Action::NoOp => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    Pose { x: f64, y: f64, heading: f64 },
    ObstacleDistances(Vec<f64>),
}

impl Observation {
    /// Flat feature vector for a learner.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Observation::Pose { x, y, heading } => vec![*x, *y, *heading],
            Observation::ObstacleDistances(distances) => distances.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub reward: f64,
    pub observation: Observation,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodySnapshot {
    pub position: Position,
    pub radius: f64,
    pub heading: Angle,
    pub kind: BodyKind,
    pub color: [u8; 3],
}

/// Read-only view of the arena for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub width: f64,
    pub height: f64,
    /// Obstacles in sensor order, then the goal, then the robot.
    pub bodies: Vec<BodySnapshot>,
    pub walls: Vec<LineSegment>,
    pub path: Vec<Position>,
    pub status: Status,
    pub steps: u64,
}

#[derive(Clone, Debug)]
pub struct Environment {
    config: EnvironmentConfig,
    rng: ChaCha8Rng,
    world: World,
    status: Status,
    steps: u64,
    path: Vec<Position>,
    exit_requested: bool,
}

impl Environment {
    pub fn new(config: EnvironmentConfig) -> Result<Self, EnvironmentError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = World::generate(&config, &mut rng);
        let mut environment = Self {
            config,
            rng,
            world,
            status: Status::Normal,
            steps: 0,
            path: vec![],
            exit_requested: false,
        };
        environment.record_path();

        info!(
            obstacles = environment.world.obstacles().len(),
            seed = environment.config.seed,
            "created environment"
        );

        Ok(environment)
    }

    /// Start a new episode with a freshly generated world.
    pub fn reset(&mut self) -> Observation {
        self.world = World::generate(&self.config, &mut self.rng);
        self.status = Status::Normal;
        self.steps = 0;
        self.path.clear();
        self.exit_requested = false;
        self.record_path();

        debug!(
            x = self.world.robot().position().x(),
            y = self.world.robot().position().y(),
            "reset episode"
        );

        self.observe()
    }

    /// Advance the episode by one tick.
    ///
    /// Once the episode is done, further calls leave the world untouched and return a zero
    /// reward with `done` set.
    pub fn step(&mut self, action: Action) -> StepResult {
        // An exit request also ends an episode that already reached the goal.
        if self.exit_requested && self.status != Status::Exited {
            self.status = Status::Exited;
            info!(steps = self.steps, "episode exited on request");
        }

        if self.status.is_terminal() {
            return StepResult {
                reward: 0.0,
                observation: self.observe(),
                done: true,
            };
        }

        self.steps += 1;
        physics::advance(
            &mut self.world,
            action.rotation(self.config.turn_angle),
            self.config.dt(),
            self.config.robot_speed,
        );

        self.status = classify(&self.world);
        match self.status {
            Status::HitObstacle => debug!(step = self.steps, "robot hit an obstacle"),
            Status::HitWall => debug!(step = self.steps, "robot hit the wall"),
            Status::ReachedGoal => {
                self.world.robot_mut().set_velocity(Velocity::ZERO);
                info!(steps = self.steps, "robot reached the goal");
            }
            Status::Normal | Status::Exited => {}
        }

        let reward = reward(
            self.status,
            self.steps,
            self.config.fps,
            &self.config.rewards,
        );
        self.record_path();

        if !self.status.is_terminal()
            && self
                .config
                .max_steps
                .is_some_and(|max_steps| self.steps >= max_steps)
        {
            self.status = Status::Exited;
            info!(steps = self.steps, "episode reached the step cap");
        }

        StepResult {
            reward,
            observation: self.observe(),
            done: self.status.is_terminal(),
        }
    }

    /// Advance the episode by one tick given a raw action token.
    pub fn step_token(&mut self, token: i64) -> Result<StepResult, EnvironmentError> {
        let action = Action::try_from(token)?;
        Ok(self.step(action))
    }

    pub fn observe(&self) -> Observation {
        let robot = self.world.robot();
        match self.config.observation {
            ObservationKind::Pose => Observation::Pose {
                x: robot.position().x(),
                y: robot.position().y(),
                heading: robot.heading().into(),
            },
            ObservationKind::ObstacleDistances => {
                Observation::ObstacleDistances(self.world.obstacle_distances())
            }
        }
    }

    /// Ask the episode to end. The request takes effect at the start of the next step.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let bodies = self
            .world
            .obstacles()
            .iter()
            .chain([self.world.goal(), self.world.robot()])
            .map(|body| BodySnapshot {
                position: body.position(),
                radius: body.radius(),
                heading: body.heading(),
                kind: body.kind(),
                color: body.kind().color(),
            })
            .collect();

        RenderSnapshot {
            width: self.world.width(),
            height: self.world.height(),
            bodies,
            walls: self.world.walls().iter().map(|w| w.segment()).collect(),
            path: self.path.clone(),
            status: self.status,
            steps: self.steps,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    fn record_path(&mut self) {
        if !self.config.record_path {
            return;
        }

        let position = self.world.robot().position();
        let moved = self
            .path
            .last()
            .map_or(true, |last| last.distance(position) >= PATH_RESOLUTION);
        if moved {
            self.path.push(position);
        }
    }
}
