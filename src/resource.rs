//! The resource module encapsulates the environment for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use robot_arena::Environment;

#[derive(Resource)]
pub struct EnvironmentRes(Environment);

impl Deref for EnvironmentRes {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for EnvironmentRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Environment> for EnvironmentRes {
    fn from(value: Environment) -> Self {
        Self(value)
    }
}
