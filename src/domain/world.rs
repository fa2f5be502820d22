//! Arena with a robot, static obstacles, a static goal and four boundary walls.

use rand::{
    distr::{Distribution, Uniform},
    Rng,
};

use super::{Angle, HasCollision, LineSegment, Position, Shape, Velocity};
use crate::config::EnvironmentConfig;

/// Obstacle centers of the fixed layout, in sensor order.
pub const FIXED_OBSTACLE_POSITIONS: [Position; 10] = [
    Position::new(390.0, 774.0),
    Position::new(917.0, 349.0),
    Position::new(660.0, 580.0),
    Position::new(730.0, 344.0),
    Position::new(712.0, 204.0),
    Position::new(431.0, 516.0),
    Position::new(1048.0, 199.0),
    Position::new(1155.0, 689.0),
    Position::new(660.0, 134.0),
    Position::new(826.0, 589.0),
];

/// Candidate start directions when none is configured.
const START_DIRECTIONS: [Velocity; 2] = [Velocity::new(1.0, 10.0), Velocity::new(-1.0, 10.0)];

/// Walls are inset from the arena border so that they never lie on the border itself.
const WALL_INSET: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Layout {
    #[default]
    Fixed,
    /// Obstacles are placed uniformly at random. They may overlap each other or the goal.
    Random,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BodyKind {
    Robot,
    Obstacle,
    Goal,
    Wall,
}

impl BodyKind {
    /// RGB color used by renderers.
    pub fn color(&self) -> [u8; 3] {
        match self {
            BodyKind::Robot => [255, 165, 0],
            BodyKind::Obstacle => [0, 0, 255],
            BodyKind::Goal => [255, 0, 0],
            BodyKind::Wall => [165, 42, 42],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    position: Position,
    velocity: Velocity,
    radius: f64,
    heading: Angle,
    kind: BodyKind,
}

impl Body {
    pub fn new(kind: BodyKind, position: Position, radius: f64) -> Self {
        Self {
            position,
            velocity: Velocity::ZERO,
            radius,
            heading: Angle::default(),
            kind,
        }
    }

    pub fn with_velocity(self, velocity: Velocity) -> Self {
        Self {
            velocity,
            heading: velocity.angle().unwrap_or(self.heading),
            ..self
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub(crate) fn set_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }

    /// Distance between the surfaces of two bodies, negative when they overlap.
    pub fn clearance(&self, other: &Body) -> f64 {
        self.position.distance(other.position) - self.radius - other.radius
    }
}

impl HasCollision for Body {
    fn shape(&self) -> Shape {
        Shape::Circle {
            position: self.position,
            radius: self.radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    segment: LineSegment,
}

impl Wall {
    pub fn new(p1: Position, p2: Position) -> Self {
        Self {
            segment: LineSegment::new(p1, p2),
        }
    }

    pub fn segment(&self) -> LineSegment {
        self.segment
    }
}

impl HasCollision for Wall {
    fn shape(&self) -> Shape {
        Shape::Segment(self.segment)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    width: f64,
    height: f64,
    robot: Body,
    obstacles: Vec<Body>,
    goal: Body,
    walls: [Wall; 4],
}

impl World {
    /// Build a fresh world for one episode. The configuration must have been validated.
    pub fn generate<R: Rng>(config: &EnvironmentConfig, rng: &mut R) -> Self {
        let direction = config.initial_direction.unwrap_or_else(|| {
            START_DIRECTIONS[rng.random_range(0..START_DIRECTIONS.len())]
        });
        let robot = Body::new(BodyKind::Robot, config.robot_start, config.robot_radius)
            .with_velocity(direction.with_length(config.robot_speed));

        let obstacles = match config.layout {
            Layout::Fixed => FIXED_OBSTACLE_POSITIONS.to_vec(),
            Layout::Random => random_positions(config, rng),
        }
        .into_iter()
        .map(|position| Body::new(BodyKind::Obstacle, position, config.obstacle_radius))
        .collect();

        let goal = Body::new(BodyKind::Goal, config.goal_position, config.goal_radius);

        Self::new(config.width, config.height, robot, obstacles, goal)
    }

    pub fn new(width: f64, height: f64, robot: Body, obstacles: Vec<Body>, goal: Body) -> Self {
        let (x_min, y_min) = (WALL_INSET, WALL_INSET);
        let (x_max, y_max) = (width - WALL_INSET, height - WALL_INSET);
        Self {
            width,
            height,
            robot,
            obstacles,
            goal,
            walls: [
                Wall::new(Position::new(x_min, y_min), Position::new(x_max, y_min)),
                Wall::new(Position::new(x_max, y_min), Position::new(x_max, y_max)),
                Wall::new(Position::new(x_max, y_max), Position::new(x_min, y_max)),
                Wall::new(Position::new(x_min, y_max), Position::new(x_min, y_min)),
            ],
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn robot(&self) -> &Body {
        &self.robot
    }

    pub(crate) fn robot_mut(&mut self) -> &mut Body {
        &mut self.robot
    }

    pub fn obstacles(&self) -> &[Body] {
        &self.obstacles
    }

    pub fn goal(&self) -> &Body {
        &self.goal
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Surface distance between the robot and each obstacle, in obstacle order.
    pub fn obstacle_distances(&self) -> Vec<f64> {
        self.obstacles
            .iter()
            .map(|o| self.robot.clearance(o))
            .collect()
    }
}

fn random_positions<R: Rng>(config: &EnvironmentConfig, rng: &mut R) -> Vec<Position> {
    let r = config.obstacle_radius;
    let (Ok(x), Ok(y)) = (
        Uniform::try_from(r..=config.width - r),
        Uniform::try_from(r..=config.height - r),
    ) else {
        return vec![];
    };

    (0..config.obstacle_count)
        .map(|_| Position::new(x.sample(rng), y.sample(rng)))
        .collect()
}
