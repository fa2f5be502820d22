//! Simulation of the arena on Bevy's fixed timestep.
//!
//! One tick of the environment is advanced per fixed update, so the simulation runs at the
//! configured fps independently of the frame rate. The application quits once the episode is
//! done, either at the goal or on an exit request.

use bevy::{app::AppExit, prelude::*};

use crate::{controller::ControllerRes, resource::EnvironmentRes};

pub struct Simulator {
    pub fps: f64,
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.fps))
            .add_systems(FixedUpdate, simulate);
    }
}

fn simulate(
    mut environment: ResMut<EnvironmentRes>,
    mut controller: ResMut<ControllerRes>,
    mut exit: EventWriter<AppExit>,
) {
    let action = controller.action(&environment.observe());
    let result = environment.step(action);

    if result.done {
        info!(
            status = ?environment.status(),
            steps = environment.steps(),
            "episode finished"
        );
        exit.send(AppExit);
    }
}

#[cfg(test)]
mod tests {
    use robot_arena::{
        domain::{Position, Velocity},
        Environment, EnvironmentConfig, Layout, Status,
    };

    use super::*;

    fn app_with(config: EnvironmentConfig) -> App {
        let mut app = App::new();
        app.add_event::<AppExit>()
            .insert_resource(EnvironmentRes::from(Environment::new(config).unwrap()))
            .insert_resource(ControllerRes::new(0))
            .add_systems(Update, simulate);
        app
    }

    fn open_arena() -> EnvironmentConfig {
        EnvironmentConfig::default().with_layout(Layout::Random, 0)
    }

    #[test]
    fn test_app_exits_when_goal_is_reached() {
        let mut app = app_with(
            open_arena()
                .with_robot_start(Position::new(1100.0, 760.0), Some(Velocity::new(0.0, 1.0))),
        );

        app.update();

        assert_eq!(
            app.world.resource::<EnvironmentRes>().status(),
            Status::ReachedGoal
        );
        assert!(!app.world.resource::<Events<AppExit>>().is_empty());
    }

    #[test]
    fn test_app_exits_on_request() {
        let mut app = app_with(open_arena());
        app.world.resource_mut::<EnvironmentRes>().request_exit();

        app.update();

        assert_eq!(
            app.world.resource::<EnvironmentRes>().status(),
            Status::Exited
        );
        assert!(!app.world.resource::<Events<AppExit>>().is_empty());
    }

    #[test]
    fn test_app_keeps_running_while_episode_is_open() {
        let mut app = app_with(open_arena());

        app.update();

        assert_eq!(app.world.resource::<EnvironmentRes>().steps(), 1);
        assert!(app.world.resource::<Events<AppExit>>().is_empty());
    }
}
