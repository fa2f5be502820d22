//! Constant-speed kinematics of the robot with elastic bounces off walls and obstacles.
//!
//! The robot only controls its direction of travel. Its speed is restored after every change of
//! the velocity vector, so turning and bouncing never change how fast it moves.

use super::{Angle, HasCollision, World};

/// Advance the world by one tick of length `dt` after turning the robot by `turn`.
pub fn advance(world: &mut World, turn: Angle, dt: f64, speed: f64) {
    let robot = world.robot_mut();
    robot.set_velocity(robot.velocity().rotate_vector(turn).with_length(speed));
    robot.set_position(robot.position() + robot.velocity() * dt);

    bounce(world, speed);

    let robot = world.robot_mut();
    if let Some(heading) = robot.velocity().angle() {
        robot.set_heading(heading);
    }
}

/// Reflect the robot's velocity off every obstacle and wall it touches while moving towards it.
fn bounce(world: &mut World, speed: f64) {
    let contacts = world
        .obstacles()
        .iter()
        .filter(|o| o.has_collision(world.robot()))
        .map(|o| o.shape())
        .chain(
            world
                .walls()
                .iter()
                .filter(|w| w.has_collision(world.robot()))
                .map(|w| w.shape()),
        )
        .collect::<Vec<_>>();

    let robot = world.robot_mut();
    for shape in contacts {
        let Some(normal) = shape.normal_towards(robot.position()) else {
            continue;
        };
        if robot.velocity().dot(normal) < 0.0 {
            robot.set_velocity(robot.velocity().reflect(normal).with_length(speed));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::super::{Body, BodyKind, Position, Velocity};
    use super::*;
    use crate::tests::world_with;

    const EPSILON: f64 = 1e-9;
    const DT: f64 = 1.0 / 30.0;
    const SPEED: f64 = 200.0;

    #[test]
    fn test_advance_integrates_position() {
        let velocity = Velocity::new(1.0, 10.0).with_length(SPEED);
        let mut world = world_with(Position::new(100.0, 100.0), velocity, vec![]);

        advance(&mut world, Angle::new(0.0), DT, SPEED);

        assert_abs_diff_eq!(
            world.robot().position(),
            Position::new(100.0, 100.0) + velocity * DT,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(world.robot().velocity(), velocity, epsilon = EPSILON);
    }

    #[rstest]
    #[case::left(5.0)]
    #[case::right(-5.0)]
    #[case::none(0.0)]
    fn test_advance_turns_before_integration(#[case] degrees: f64) {
        let mut world = world_with(
            Position::new(600.0, 450.0),
            Velocity::new(SPEED, 0.0),
            vec![],
        );

        advance(&mut world, Angle::from_deg(degrees), DT, SPEED);

        let expected = Velocity::new(SPEED, 0.0).rotate_vector(Angle::from_deg(degrees));
        assert_abs_diff_eq!(world.robot().velocity(), expected, epsilon = EPSILON);
        assert_abs_diff_eq!(
            world.robot().position(),
            Position::new(600.0, 450.0) + expected * DT,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            f64::from(world.robot().heading()),
            degrees * PI / 180.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_advance_restores_speed() {
        let mut world = world_with(
            Position::new(600.0, 450.0),
            Velocity::new(3.0, 4.0),
            vec![],
        );

        advance(&mut world, Angle::from_deg(5.0), DT, SPEED);

        assert_abs_diff_eq!(world.robot().velocity().length(), SPEED, epsilon = EPSILON);
    }

    #[rstest]
    #[case::bottom(Position::new(600.0, 32.0), Velocity::new(0.0, -SPEED), Velocity::new(0.0, SPEED))]
    #[case::top(Position::new(600.0, 868.0), Velocity::new(0.0, SPEED), Velocity::new(0.0, -SPEED))]
    #[case::left(Position::new(32.0, 450.0), Velocity::new(-SPEED, 0.0), Velocity::new(SPEED, 0.0))]
    #[case::right(Position::new(1168.0, 450.0), Velocity::new(SPEED, 0.0), Velocity::new(-SPEED, 0.0))]
    fn test_advance_bounces_off_wall(
        #[case] position: Position,
        #[case] velocity: Velocity,
        #[case] expected: Velocity,
    ) {
        let mut world = world_with(position, velocity, vec![]);

        advance(&mut world, Angle::new(0.0), DT, SPEED);

        assert_abs_diff_eq!(world.robot().velocity(), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_advance_bounce_keeps_angle_of_incidence() {
        let velocity = Velocity::new(1.0, -1.0).with_length(SPEED);
        let mut world = world_with(Position::new(600.0, 33.0), velocity, vec![]);

        advance(&mut world, Angle::new(0.0), DT, SPEED);

        assert_abs_diff_eq!(
            world.robot().velocity(),
            Velocity::new(1.0, 1.0).with_length(SPEED),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_advance_bounces_off_obstacle() {
        let obstacle = Body::new(BodyKind::Obstacle, Position::new(665.0, 450.0), 30.0);
        let mut world = world_with(
            Position::new(600.0, 450.0),
            Velocity::new(SPEED, 0.0),
            vec![obstacle],
        );

        advance(&mut world, Angle::new(0.0), DT, SPEED);

        assert_abs_diff_eq!(world.robot().velocity(), Velocity::new(-SPEED, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(f64::from(world.robot().heading()), PI, epsilon = EPSILON);
    }

    #[test]
    fn test_advance_does_not_bounce_when_moving_away() {
        let obstacle = Body::new(BodyKind::Obstacle, Position::new(550.0, 450.0), 30.0);
        let mut world = world_with(
            Position::new(600.0, 450.0),
            Velocity::new(SPEED, 0.0),
            vec![obstacle],
        );

        advance(&mut world, Angle::new(0.0), DT, SPEED);

        assert_abs_diff_eq!(world.robot().velocity(), Velocity::new(SPEED, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_advance_keeps_heading_of_frozen_robot() {
        let mut world = world_with(Position::new(600.0, 450.0), Velocity::new(0.0, SPEED), vec![]);
        world.robot_mut().set_velocity(Velocity::ZERO);

        advance(&mut world, Angle::from_deg(5.0), DT, SPEED);

        assert_eq!(world.robot().velocity(), Velocity::ZERO);
        assert_eq!(world.robot().position(), Position::new(600.0, 450.0));
        assert_abs_diff_eq!(f64::from(world.robot().heading()), 0.5 * PI, epsilon = EPSILON);
    }

    #[test]
    fn test_speed_is_invariant_over_many_ticks() {
        let obstacles = vec![
            Body::new(BodyKind::Obstacle, Position::new(300.0, 300.0), 30.0),
            Body::new(BodyKind::Obstacle, Position::new(500.0, 200.0), 30.0),
        ];
        let mut world = world_with(
            Position::new(100.0, 100.0),
            Velocity::new(1.0, 10.0).with_length(SPEED),
            obstacles,
        );

        for i in 0..2000 {
            let turn = Angle::from_deg([5.0, -5.0, 0.0][i % 3]);
            advance(&mut world, turn, DT, SPEED);
            assert_abs_diff_eq!(world.robot().velocity().length(), SPEED, epsilon = EPSILON);
        }
    }
}
