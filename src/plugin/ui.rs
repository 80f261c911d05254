use bevy::input::Input;
use bevy::math::DVec2;
use bevy::prelude::{KeyCode, MouseButton};
use bevy::window::{WindowCloseRequested, Windows};
use bevy_ecs::prelude::*;

use super::util;
use crate::simulation::event::{Action, Event};

#[derive(Component)]
pub struct MainCamera;

/// Input gathered since the last simulation frame.
#[derive(Default)]
pub struct PendingEvents(pub Vec<Event>);

/// Last known cursor position in world coordinates.
#[derive(Default)]
pub struct Cursor(pub DVec2);

/// Binding of keyboard keys to simulation events.
pub fn key_event(key: KeyCode) -> Option<Event> {
    let action = match key {
        KeyCode::Escape => return Some(Event::Quit),
        KeyCode::T => Action::SmallMass,
        KeyCode::Y => Action::DefaultMass,
        KeyCode::U => Action::BigMass,
        KeyCode::C => Action::Clear,
        KeyCode::V => Action::ToggleVectors,
        KeyCode::A => Action::SpawnParticles,
        _ => return None,
    };
    Some(Event::KeyDown(action))
}

/// Turns this frame's bevy input into simulation events.
pub fn collect_input(
    keys: Res<Input<KeyCode>>,
    buttons: Res<Input<MouseButton>>,
    windows: Res<Windows>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut cursor: ResMut<Cursor>,
    mut pending: ResMut<PendingEvents>,
) {
    if let Some(position) = util::primary_cursor_position(&windows) {
        cursor.0 = position;
    }

    if close_requests.iter().next().is_some() {
        pending.0.push(Event::Quit);
    }

    if buttons.just_pressed(MouseButton::Left) {
        pending.0.push(Event::MouseDown { position: cursor.0 });
    }
    if buttons.just_released(MouseButton::Left) {
        pending.0.push(Event::MouseUp { position: cursor.0 });
    }

    pending.0.extend(keys.get_just_pressed().filter_map(|key| key_event(*key)));
}
