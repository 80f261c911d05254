use bevy::prelude::*;
use bevy_prototype_debug_lines::DebugLinesPlugin;
use bevy_prototype_lyon::prelude::*;
use gravity_simulation::{GravityPlugin, Params};

fn main() {
    let params = Params::default();

    App::new()
        .insert_resource(WindowDescriptor {
            title: params.title.clone(),
            width: params.width as f32,
            height: params.height as f32,
            resizable: false,
            ..default()
        })
        .insert_resource(ClearColor(params.style.background))
        .insert_resource(Msaa { samples: 4 })
        .add_plugins(DefaultPlugins)
        .add_plugin(ShapePlugin)
        .add_plugin(DebugLinesPlugin::default())
        .add_plugin(GravityPlugin::new(params))
        .run();
}
