//! Configuration of the arena, its bodies and the reward scheme.
//!
//! A configuration is validated once when an [`Environment`](crate::Environment) is created and
//! stays immutable for the lifetime of that environment.

use thiserror::Error;

use crate::domain::{Angle, BodyKind, Layout, Position, Velocity, FIXED_OBSTACLE_POSITIONS};

#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentConfig {
    pub width: f64,
    pub height: f64,
    pub robot_radius: f64,
    pub obstacle_radius: f64,
    pub goal_radius: f64,
    pub robot_speed: f64,
    pub fps: f64,
    pub layout: Layout,
    /// Number of obstacles for [`Layout::Random`]. The fixed layout always has ten.
    pub obstacle_count: usize,
    pub observation: ObservationKind,
    pub robot_start: Position,
    /// Initial direction of travel. If unset, every reset picks `(1, 10)` or `(-1, 10)`.
    pub initial_direction: Option<Velocity>,
    pub goal_position: Position,
    /// Episode step cap. The episode ends with [`Status::Exited`](crate::Status::Exited) once
    /// reached.
    pub max_steps: Option<u64>,
    pub turn_angle: Angle,
    pub rewards: RewardConfig,
    pub seed: u64,
    pub record_path: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        const WIDTH: f64 = 1200.0;
        const HEIGHT: f64 = 900.0;

        Self {
            width: WIDTH,
            height: HEIGHT,
            robot_radius: 30.0,
            obstacle_radius: 30.0,
            goal_radius: 10.0,
            robot_speed: 200.0,
            fps: 30.0,
            layout: Layout::Fixed,
            obstacle_count: FIXED_OBSTACLE_POSITIONS.len(),
            observation: ObservationKind::Pose,
            robot_start: Position::new(100.0, 100.0),
            initial_direction: None,
            goal_position: Position::new(WIDTH - 100.0, HEIGHT - 100.0),
            max_steps: None,
            turn_angle: Angle::from_deg(5.0),
            rewards: RewardConfig::default(),
            seed: 0,
            record_path: true,
        }
    }
}

impl EnvironmentConfig {
    /// Resize the arena. The goal keeps its distance to the upper right corner.
    pub fn with_arena(self, width: f64, height: f64) -> Self {
        let goal_position = Position::new(
            width - (self.width - self.goal_position.x()),
            height - (self.height - self.goal_position.y()),
        );
        Self {
            width,
            height,
            goal_position,
            ..self
        }
    }

    pub fn with_fps(self, fps: f64) -> Self {
        Self { fps, ..self }
    }

    pub fn with_layout(self, layout: Layout, obstacle_count: usize) -> Self {
        Self {
            layout,
            obstacle_count,
            ..self
        }
    }

    pub fn with_observation(self, observation: ObservationKind) -> Self {
        Self {
            observation,
            ..self
        }
    }

    pub fn with_robot_start(self, position: Position, direction: Option<Velocity>) -> Self {
        Self {
            robot_start: position,
            initial_direction: direction,
            ..self
        }
    }

    pub fn with_goal(self, position: Position, radius: f64) -> Self {
        Self {
            goal_position: position,
            goal_radius: radius,
            ..self
        }
    }

    pub fn with_max_steps(self, max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn dt(&self) -> f64 {
        self.fps.recip()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.fps));
        }

        for (kind, radius) in [
            (BodyKind::Robot, self.robot_radius),
            (BodyKind::Obstacle, self.obstacle_radius),
            (BodyKind::Goal, self.goal_radius),
        ] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(ConfigError::InvalidRadius { kind, radius });
            }
        }

        if !(self.robot_speed.is_finite() && self.robot_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.robot_speed));
        }

        let min_extent = 2.0 * f64::max(self.robot_radius, self.obstacle_radius);
        if !(self.width >= min_extent && self.height >= min_extent)
            || !(self.width.is_finite() && self.height.is_finite())
        {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                min_extent,
            });
        }

        if self
            .initial_direction
            .is_some_and(|direction| direction.normalized().is_none())
        {
            return Err(ConfigError::DegenerateDirection);
        }

        self.check_inside(BodyKind::Robot, self.robot_start)?;
        self.check_inside(BodyKind::Goal, self.goal_position)?;
        if self.layout == Layout::Fixed {
            for position in FIXED_OBSTACLE_POSITIONS {
                self.check_inside(BodyKind::Obstacle, position)?;
            }
        }

        Ok(())
    }

    fn check_inside(&self, kind: BodyKind, position: Position) -> Result<(), ConfigError> {
        let inside = (0.0..=self.width).contains(&position.x())
            && (0.0..=self.height).contains(&position.y());
        if inside {
            Ok(())
        } else {
            Err(ConfigError::OutsideArena {
                kind,
                x: position.x(),
                y: position.y(),
            })
        }
    }
}

/// Reward constants per tick. Penalties are negative rewards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardConfig {
    pub obstacle_penalty: f64,
    pub wall_penalty: f64,
    pub goal_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            obstacle_penalty: -50.0,
            wall_penalty: -10.0,
            goal_reward: 10000.0,
        }
    }
}

/// Schema of the observation handed to the controller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ObservationKind {
    /// Robot position and heading.
    #[default]
    Pose,
    /// Distance between the robot's surface and each obstacle's surface.
    ObstacleDistances,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fps must be positive and finite, got {0}")]
    InvalidFps(f64),
    #[error("{kind:?} radius must be positive and finite, got {radius}")]
    InvalidRadius { kind: BodyKind, radius: f64 },
    #[error("robot speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    #[error("arena {width}x{height} is smaller than {min_extent} in at least one dimension")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        min_extent: f64,
    },
    #[error("initial direction must not be the zero vector")]
    DegenerateDirection,
    #[error("{kind:?} at ({x}, {y}) lies outside the arena")]
    OutsideArena { kind: BodyKind, x: f64, y: f64 },
}
