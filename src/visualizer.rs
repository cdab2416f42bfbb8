//! 2D visualization.
//!
//! Drawing only reads the scene. Nothing in here feeds back into the simulation.

use bevy::prelude::*;

use crate::{
    domain::{Angle, Position, Rgb, Shape},
    resource::{ConfigRes, SceneRes},
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (draw_scene, update_text))
            .init_resource::<Overlay>();
    }
}

/// Optional debug output, toggled from the keyboard.
#[derive(Resource, Default)]
pub struct Overlay {
    pub show_rays: bool,
    pub show_text: bool,
}

fn set_up(mut commands: Commands, mut clear_color: ResMut<ClearColor>, scene: Res<SceneRes>) {
    clear_color.0 = to_bevy_color(scene.background());
    commands.spawn(Camera2dBundle::default());
    create_text(&mut commands);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        color: Color::BLACK,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style.clone())]).with_style(
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            },
        ),
    );
}

fn draw_scene(
    mut gizmos: Gizmos,
    scene: Res<SceneRes>,
    config: Res<ConfigRes>,
    overlay: Res<Overlay>,
) {
    for (_, object) in scene.enumerate() {
        match object.shape() {
            Shape::Circle {
                position,
                radius,
                color,
            } => {
                gizmos.circle_2d(
                    to_bevy_position(position, &config),
                    radius as f32,
                    to_bevy_color(color),
                );
            }
            Shape::Ship {
                position,
                rotation,
                desired_rotation,
                width,
                height,
                color,
                ..
            } => {
                let center = to_bevy_position(position, &config);
                let outline = ship_outline(width as f32, height as f32, rotation);
                gizmos.linestrip_2d(outline.map(|p| center + p), to_bevy_color(color));

                if overlay.show_rays {
                    let range = config.steering.avoidance_distance as f32;
                    gizmos.line_2d(
                        center,
                        center + heading(rotation) * range,
                        Color::rgb(1.0, 0.0, 0.0),
                    );
                    if let Some(desired_rotation) = desired_rotation {
                        gizmos.line_2d(
                            center,
                            center + heading(desired_rotation) * range,
                            Color::rgba(1.0, 0.0, 0.0, 0.3),
                        );
                    }
                }
            }
        }
    }
}

/// Closed outline of the ship around its center: a triangle pointing forward with a narrow body
/// along the middle.
fn ship_outline(width: f32, height: f32, rotation: Angle) -> [Vec2; 8] {
    let (w, h) = (width / 2.0, height / 2.0);
    let wing = -0.3 * h;
    let points = [
        Vec2::new(0.0, h),
        Vec2::new(w, wing),
        Vec2::new(0.3 * w, wing),
        Vec2::new(0.3 * w, -h),
        Vec2::new(-0.3 * w, -h),
        Vec2::new(-0.3 * w, wing),
        Vec2::new(-w, wing),
        Vec2::new(0.0, h),
    ];

    if rotation.normalized_deg() == 0.0 {
        return points;
    }
    let rotation = Vec2::from_angle(rotation.rad() as f32);
    points.map(|p| rotation.rotate(p))
}

fn heading(rotation: Angle) -> Vec2 {
    Vec2::from_angle(rotation.rad() as f32).rotate(Vec2::Y)
}

fn update_text(mut text: Query<&mut Text>, scene: Res<SceneRes>, overlay: Res<Overlay>) {
    let mut text = text.single_mut();
    if !overlay.show_text {
        text.sections[0].value = String::new();
        return;
    }

    let status = scene
        .enumerate()
        .filter_map(|(id, object)| match object.shape() {
            Shape::Ship {
                position,
                rotation,
                desired_rotation,
                state,
                ..
            } => {
                let target = desired_rotation
                    .map_or("---".to_string(), |a| format!("{:5.1}", a.normalized_deg()));
                Some(format!(
                    "SHIP {id}: POS {:4.0} {:4.0}   ROT {:5.1} deg   TARGET {target} deg   {state:?}",
                    position.x(),
                    position.y(),
                    rotation.normalized_deg(),
                ))
            }
            Shape::Circle { .. } => None,
        })
        .collect::<Vec<_>>();
    text.sections[0].value = status.join("\n");
}

/// Arena coordinates have their origin in the top left corner with y pointing down, the camera
/// looks at the arena center with y pointing up.
fn to_bevy_position(position: Position, config: &ConfigRes) -> Vec2 {
    Vec2::new(
        (position.x() - config.arena.width / 2.0) as f32,
        (config.arena.height / 2.0 - position.y()) as f32,
    )
}

fn to_bevy_color(color: Rgb) -> Color {
    Color::rgb_u8(color.0, color.1, color.2)
}
