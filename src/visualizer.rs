//! 2D visualization.
//!
//! The arena is drawn with gizmos from the environment's world and path trail every frame. The
//! camera is centered on the arena so that world coordinates map one-to-one to pixels.

use bevy::prelude::*;

use robot_arena::{
    domain::{Body, BodyKind, Position},
    Environment, RenderSnapshot,
};

use crate::resource::EnvironmentRes;

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .init_resource::<Scene>()
            .add_systems(Startup, set_up)
            .add_systems(Update, (handle_keyboard_input, draw_arena, update_text));
    }
}

#[derive(Resource)]
pub struct Scene {
    show_text: bool,
    show_path: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            show_text: true,
            show_path: true,
        }
    }
}

const PATH_COLOR: Color = Color::RED;
const TEXT_COLOR: Color = Color::BLACK;

fn set_up(mut commands: Commands, environment: Res<EnvironmentRes>) {
    create_camera(&mut commands, &environment.snapshot());
    create_text(&mut commands);
}

fn create_camera(commands: &mut Commands, snapshot: &RenderSnapshot) {
    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = (snapshot.width / 2.0) as f32;
    camera.transform.translation.y = (snapshot.height / 2.0) as f32;
    commands.spawn(camera);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        color: TEXT_COLOR,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style)]).with_style(
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            },
        ),
    );
}

fn draw_arena(mut gizmos: Gizmos, scene: Res<Scene>, environment: Res<EnvironmentRes>) {
    let world = environment.world();

    for wall in world.walls() {
        let segment = wall.segment();
        gizmos.line_2d(
            to_bevy_position(segment.start()),
            to_bevy_position(segment.end()),
            to_bevy_color(BodyKind::Wall.color()),
        );
    }

    if scene.show_path && environment.path().len() > 1 {
        gizmos.linestrip_2d(trail(&environment), PATH_COLOR);
    }

    for body in world.obstacles().iter().chain([world.goal(), world.robot()]) {
        draw_body(&mut gizmos, body);
    }
}

/// Path trail in Bevy coordinates, borrowed from the environment.
fn trail(environment: &Environment) -> impl Iterator<Item = Vec2> + '_ {
    environment.path().iter().copied().map(to_bevy_position)
}

fn draw_body(gizmos: &mut Gizmos, body: &Body) {
    let center = to_bevy_position(body.position());
    let color = to_bevy_color(body.kind().color());
    gizmos
        .circle_2d(center, body.radius() as f32, color)
        .segments(64);

    if body.kind() == BodyKind::Robot {
        let heading: f32 = body.heading().into();
        let tip = center + Vec2::new(heading.cos(), heading.sin()) * body.radius() as f32;
        gizmos.line_2d(center, tip, color);
    }
}

fn update_text(
    mut text: Query<&mut Text>,
    scene: Res<Scene>,
    environment: Res<EnvironmentRes>,
) {
    let mut text = text.single_mut();
    if scene.show_text {
        let robot = environment.world().robot();
        let position = robot.position();
        text.sections[0].value = format!(
            "STEP: {:5}   STATUS: {:?}   POS: {:6.1} {:6.1}   HDG: {:3.0} deg",
            environment.steps(),
            environment.status(),
            position.x(),
            position.y(),
            robot.heading().to_deg(),
        );
    } else {
        text.sections[0].value = String::new();
    }
}

fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<Scene>,
    mut environment: ResMut<EnvironmentRes>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        environment.reset();
        info!("episode reset from keyboard");
    }

    if keys.just_pressed(KeyCode::KeyT) {
        scene.show_text = !scene.show_text;
    }

    if keys.just_pressed(KeyCode::KeyP) {
        scene.show_path = !scene.show_path;
    }
}

fn to_bevy_position(position: Position) -> Vec2 {
    Vec2::new(position.x() as f32, position.y() as f32)
}

fn to_bevy_color([r, g, b]: [u8; 3]) -> Color {
    Color::rgb_u8(r, g, b)
}
