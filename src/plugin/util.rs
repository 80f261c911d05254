use bevy::math::DVec2;
use bevy::prelude::*;

/// Cursor position in world coordinates, if the cursor is over the primary window.
///
/// Bevy reports the cursor from the bottom left corner with y up; the world
/// uses the top left corner with y down.
pub fn primary_cursor_position(windows: &Windows) -> Option<DVec2> {
    let window = windows.get_primary()?;
    let cursor = window.cursor_position()?;
    Some(screen_to_world(cursor, window.height()))
}

pub fn screen_to_world(cursor: Vec2, window_height: f32) -> DVec2 {
    DVec2::new(cursor.x as f64, (window_height - cursor.y) as f64)
}

/// Maps a world point onto the 2D camera, which is centered on the window
/// with y up.
pub fn world_to_screen(point: DVec2, bounds: DVec2) -> Vec2 {
    Vec2::new(
        (point.x - bounds.x / 2.0) as f32,
        (bounds.y / 2.0 - point.y) as f32,
    )
}
