use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::simulation::physics::IntegrationOrder;

// --- Window ---
pub const WIDTH: f64 = 1000.0;
pub const HEIGHT: f64 = 1000.0;
pub const FPS: f64 = 120.0;
pub const WINDOW_TITLE: &str = "t-tiny, y-small, u-big, a-particles, v-vectors";

// --- Physics ---
pub const GRAVITATIONAL_CONSTANT: f64 = 0.1;
pub const MIN_PLANET_RADIUS: f64 = 2.0;
pub const MAX_PLANET_RADIUS: f64 = 100.0;
pub const DEFAULT_PLANET_DENSITY: f64 = 1.0;
pub const VELOCITY_LOSS_FACTOR: f64 = 0.9;

// --- Spawning ---
pub const SMALL_MASS: f64 = 10.0;
pub const DEFAULT_MASS: f64 = 200.0;
pub const BIG_MASS: f64 = 10_000.0;
pub const SPAWN_VECTOR_DIVIDER: f64 = 50.0;
pub const PARTICLES_PER_CLICK: usize = 100;
pub const PARTICLE_MASS: f64 = 1.0;
pub const PARTICLE_VELOCITY: DVec2 = DVec2::new(1.0, 1.0);
pub const CENTRAL_BODY_MASS: f64 = 100_000.0;

// --- Drawing ---
pub const VECTOR_LENGTH_MULTI: f64 = 10.0;
pub const VECTOR_WIDTH: f32 = 2.0;
pub const DRAG_LINE_WIDTH: f32 = 1.0;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const PLANET_COLOR: Color = Color::Rgba {
    red: 168.0 / 255.0,
    green: 13.0 / 255.0,
    blue: 21.0 / 255.0,
    alpha: 1.0,
};
pub const VELOCITY_VECTORS_COLOR: Color = Color::BLUE;
pub const DRAG_LINE_COLOR: Color = Color::GREEN;

/// Physical constants a [`World`](crate::simulation::physics::World) steps with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub g: f64,             // gravitational constant
    pub min_radius: f64,    // radius clamp, lower end
    pub max_radius: f64,    // radius clamp, upper end
    pub density: f64,       // density new bodies are spawned with
    pub velocity_loss: f64, // fraction of speed kept after a wall bounce
    pub integration: IntegrationOrder,
}

impl Default for Physics {
    fn default() -> Self {
        Physics {
            g: GRAVITATIONAL_CONSTANT,
            min_radius: MIN_PLANET_RADIUS,
            max_radius: MAX_PLANET_RADIUS,
            density: DEFAULT_PLANET_DENSITY,
            velocity_loss: VELOCITY_LOSS_FACTOR,
            integration: IntegrationOrder::default(),
        }
    }
}

/// Colors and line settings used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Color,
    pub planet: Color,
    pub vector: Color,
    pub drag_line: Color,
    pub vector_length_multi: f64,
    pub vector_width: f32,
    pub drag_line_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            background: BACKGROUND_COLOR,
            planet: PLANET_COLOR,
            vector: VELOCITY_VECTORS_COLOR,
            drag_line: DRAG_LINE_COLOR,
            vector_length_multi: VECTOR_LENGTH_MULTI,
            vector_width: VECTOR_WIDTH,
            drag_line_width: DRAG_LINE_WIDTH,
        }
    }
}

/// The three masses a user can pick for drag-to-spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPresets {
    pub small: f64,
    pub default: f64,
    pub big: f64,
}

impl Default for MassPresets {
    fn default() -> Self {
        MassPresets {
            small: SMALL_MASS,
            default: DEFAULT_MASS,
            big: BIG_MASS,
        }
    }
}

/// All tunables of the simulation, grouped once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub width: f64,
    pub height: f64,
    pub fps: f64,
    pub title: String,
    pub physics: Physics,
    pub masses: MassPresets,
    pub spawn_vector_divider: f64, // drag length to launch speed
    pub particles_per_click: usize,
    pub particle_mass: f64,
    pub particle_velocity: DVec2,
    pub central_body_mass: f64,
    pub style: Style,
}

impl Params {
    /// Size of the simulated area, which is also the window size.
    pub fn bounds(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Center of the simulated area.
    pub fn center(&self) -> DVec2 {
        self.bounds() / 2.0
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            title: WINDOW_TITLE.to_string(),
            physics: Physics::default(),
            masses: MassPresets::default(),
            spawn_vector_divider: SPAWN_VECTOR_DIVIDER,
            particles_per_click: PARTICLES_PER_CLICK,
            particle_mass: PARTICLE_MASS,
            particle_velocity: PARTICLE_VELOCITY,
            central_body_mass: CENTRAL_BODY_MASS,
            style: Style::default(),
        }
    }
}
