use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::time::FixedTimestep;

use crate::config::Params;
use crate::simulation::canvas::ShapeBuffer;
use crate::simulation::Simulation;

pub mod render;
pub mod ui;
pub mod util;

use ui::{Cursor, MainCamera, PendingEvents};

#[derive(Debug, Hash, PartialEq, Eq, Clone, StageLabel)]
struct FixedUpdateStage;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemLabel)]
enum FrameSystem {
    Step,
}

/// Runs a [`Simulation`] inside a bevy app: one simulation frame per fixed
/// tick at `params.fps`.
pub struct GravityPlugin {
    pub params: Params,
}

impl GravityPlugin {
    pub fn new(params: Params) -> Self {
        GravityPlugin { params }
    }
}

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        let mut simulation = Simulation::new(self.params.clone());
        simulation.spawn_central_body();

        app.insert_resource(simulation)
            .init_resource::<ShapeBuffer>()
            .init_resource::<PendingEvents>()
            .init_resource::<Cursor>()
            .add_startup_system(setup)
            .add_system(ui::collect_input)
            .add_stage_after(
                CoreStage::Update,
                FixedUpdateStage,
                SystemStage::parallel()
                    .with_run_criteria(FixedTimestep::step(1.0 / self.params.fps))
                    .with_system(run_frame.label(FrameSystem::Step))
                    .with_system(render::draw_shapes.after(FrameSystem::Step)),
            );
    }
}

fn setup(mut commands: Commands, simulation: Res<Simulation>) {
    commands
        .spawn_bundle(Camera2dBundle::default())
        .insert(MainCamera);

    let params = &simulation.params;
    info!(
        "gravity simulation {}x{} at {} fps, {} bodies",
        params.width,
        params.height,
        params.fps,
        simulation.world().len()
    );
}

/// One tick of the simulation loop.
fn run_frame(
    mut simulation: ResMut<Simulation>,
    mut shapes: ResMut<ShapeBuffer>,
    mut pending: ResMut<PendingEvents>,
    cursor: Res<Cursor>,
    mut exit: EventWriter<AppExit>,
) {
    let events = std::mem::take(&mut pending.0);
    simulation.frame(&mut *shapes, cursor.0, events);

    if !simulation.is_running() {
        exit.send(AppExit);
    }
}
