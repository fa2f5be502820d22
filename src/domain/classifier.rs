//! Classification of the robot's contact state after a tick.

use super::{HasCollision, World};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Status {
    #[default]
    Normal,
    HitWall,
    HitObstacle,
    ReachedGoal,
    Exited,
}

impl Status {
    /// Terminal states end the episode and are kept until the next reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::ReachedGoal | Status::Exited)
    }
}

/// Status implied by the current geometry of `world`.
///
/// Obstacles are checked before walls. Touching the goal overrides both, so a success is never
/// masked by a simultaneous bump.
pub fn classify(world: &World) -> Status {
    let robot = world.robot();

    if robot.has_collision(world.goal()) {
        return Status::ReachedGoal;
    }

    if world.obstacles().iter().any(|o| robot.has_collision(o)) {
        Status::HitObstacle
    } else if world.walls().iter().any(|w| robot.has_collision(w)) {
        Status::HitWall
    } else {
        Status::Normal
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::{Body, BodyKind, Position, Velocity};
    use super::*;
    use crate::tests::world_with;

    fn obstacle(x: f64, y: f64) -> Body {
        Body::new(BodyKind::Obstacle, Position::new(x, y), 30.0)
    }

    #[rstest]
    #[case::free(Position::new(600.0, 450.0), vec![], Status::Normal)]
    #[case::bottom_wall(Position::new(600.0, 31.0), vec![], Status::HitWall)]
    #[case::left_wall(Position::new(20.0, 450.0), vec![], Status::HitWall)]
    #[case::top_wall_touching(Position::new(600.0, 869.0), vec![], Status::HitWall)]
    #[case::near_wall(Position::new(600.0, 31.5), vec![], Status::Normal)]
    #[case::obstacle(Position::new(600.0, 450.0), vec![obstacle(650.0, 450.0)], Status::HitObstacle)]
    #[case::obstacle_touching(Position::new(600.0, 450.0), vec![obstacle(600.0, 510.0)], Status::HitObstacle)]
    #[case::obstacle_near(Position::new(600.0, 450.0), vec![obstacle(600.0, 511.0)], Status::Normal)]
    #[case::obstacle_before_wall(Position::new(25.0, 450.0), vec![obstacle(80.0, 450.0)], Status::HitObstacle)]
    #[case::goal(Position::new(1060.0, 800.0), vec![], Status::ReachedGoal)]
    #[case::goal_over_obstacle(Position::new(1060.0, 800.0), vec![obstacle(1060.0, 750.0)], Status::ReachedGoal)]
    fn test_classify(
        #[case] position: Position,
        #[case] obstacles: Vec<Body>,
        #[case] expected: Status,
    ) {
        let world = world_with(position, Velocity::new(0.0, 200.0), obstacles);
        assert_eq!(classify(&world), expected);
    }

    #[test]
    fn test_classify_every_wall_contact() {
        for x in (0..=1200).step_by(50) {
            for y in (0..=900).step_by(50) {
                let position = Position::new(x as f64, y as f64);
                let world = world_with(position, Velocity::new(0.0, 200.0), vec![]);
                let touches_wall = world
                    .walls()
                    .iter()
                    .any(|w| w.segment().distance(position) <= 30.0);
                let touches_goal = position.distance(world.goal().position()) <= 40.0;
                if touches_wall && !touches_goal {
                    assert_eq!(classify(&world), Status::HitWall, "{position:?}");
                }
            }
        }
    }

    #[rstest]
    #[case(Status::Normal, false)]
    #[case(Status::HitWall, false)]
    #[case(Status::HitObstacle, false)]
    #[case(Status::ReachedGoal, true)]
    #[case(Status::Exited, true)]
    fn test_status_is_terminal(#[case] status: Status, #[case] expected: bool) {
        assert_eq!(status.is_terminal(), expected);
    }
}
