//! Controller steering the robot.
//!
//! The robot is steered by a random policy by default. While an arrow key is held, the keyboard
//! takes over. Escape or Q ends the episode.

use bevy::prelude::*;

use robot_arena::{Action, Observation, Policy, RandomPolicy};

use crate::resource::EnvironmentRes;

pub struct Controller {
    pub seed: u64,
}

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.insert_resource(ControllerRes::new(self.seed))
            .add_systems(Update, control);
    }
}

#[derive(Resource)]
pub struct ControllerRes {
    policy: RandomPolicy,
    manual: Option<Action>,
}

impl ControllerRes {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            policy: RandomPolicy::new(seed),
            manual: None,
        }
    }

    /// Action for the next tick. Keyboard input takes precedence over the policy.
    pub fn action(&mut self, observation: &Observation) -> Action {
        match self.manual {
            Some(action) => action,
            None => self.policy.act(observation),
        }
    }
}

fn control(
    keys: Res<ButtonInput<KeyCode>>,
    mut controller: ResMut<ControllerRes>,
    mut environment: ResMut<EnvironmentRes>,
) {
    controller.manual = if keys.pressed(KeyCode::ArrowLeft) {
        Some(Action::TurnLeft)
    } else if keys.pressed(KeyCode::ArrowRight) {
        Some(Action::TurnRight)
    } else {
        None
    };

    if keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        environment.request_exit();
    }
}
