use bevy::{prelude::*, window::WindowResolution};

use robot_arena::{Environment, EnvironmentConfig, EnvironmentError};

mod controller;
mod resource;
mod simulator;
mod visualizer;

const RNG_SEED: u64 = 19878367467712;

fn main() -> Result<(), EnvironmentError> {
    let config = EnvironmentConfig::default().with_seed(RNG_SEED);
    let environment = Environment::new(config.clone())?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Robot arena".into(),
                resolution: WindowResolution::new(config.width as f32, config.height as f32),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(resource::EnvironmentRes::from(environment))
        .add_plugins(controller::Controller { seed: config.seed })
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator { fps: config.fps })
        .run();

    Ok(())
}
