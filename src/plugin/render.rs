use bevy::prelude::*;
use bevy_prototype_debug_lines::DebugLines;
use bevy_prototype_lyon::prelude::*;

use super::util::world_to_screen;
use crate::simulation::canvas::{Shape, ShapeBuffer};
use crate::simulation::Simulation;

/// Lines this thin go through the debug line renderer instead of lyon.
const HAIRLINE_WIDTH: f32 = 1.0;
const Z_STEP: f32 = 0.01;
const MAX_Z: f32 = 900.0;

/// Marks entities that only live until the next presented frame.
#[derive(Component)]
pub struct FrameShape;

/// Replaces the shapes on screen with the latest presented frame.
pub fn draw_shapes(
    mut commands: Commands,
    mut buffer: ResMut<ShapeBuffer>,
    mut clear_color: ResMut<ClearColor>,
    mut lines: ResMut<DebugLines>,
    simulation: Res<Simulation>,
    drawn: Query<Entity, With<FrameShape>>,
) {
    let frame = match buffer.take_presented() {
        Some(frame) => frame,
        None => return,
    };

    if let Some(background) = buffer.background() {
        if clear_color.0 != background {
            clear_color.0 = background;
        }
    }

    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    let bounds = simulation.params.bounds();
    let hold = (1.0 / simulation.params.fps) as f32;

    for (i, shape) in frame.iter().enumerate() {
        // later shapes on top
        let z = (i as f32 * Z_STEP).min(MAX_Z);

        match *shape {
            Shape::Circle { center, radius, color } => {
                let circle = shapes::Circle {
                    radius: radius as f32,
                    center: Vec2::ZERO,
                };
                commands
                    .spawn_bundle(GeometryBuilder::build_as(
                        &circle,
                        DrawMode::Fill(FillMode::color(color)),
                        Transform::from_translation(world_to_screen(center, bounds).extend(z)),
                    ))
                    .insert(FrameShape);
            }
            Shape::Line { start, end, width, color } if width <= HAIRLINE_WIDTH => {
                lines.line_colored(
                    world_to_screen(start, bounds).extend(z),
                    world_to_screen(end, bounds).extend(z),
                    hold,
                    color,
                );
            }
            Shape::Line { start, end, width, color } => {
                let line = shapes::Line(world_to_screen(start, bounds), world_to_screen(end, bounds));
                commands
                    .spawn_bundle(GeometryBuilder::build_as(
                        &line,
                        DrawMode::Stroke(StrokeMode::new(color, width)),
                        Transform::from_xyz(0.0, 0.0, z),
                    ))
                    .insert(FrameShape);
            }
        }
    }
}
