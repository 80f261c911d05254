use bevy::log::{debug, info, warn};
use bevy::math::DVec2;

use crate::config::Params;

pub mod body;
pub mod canvas;
pub mod event;
pub mod physics;

use canvas::Canvas;
use event::{Action, Event};
use physics::World;

/// Whether a drag-to-spawn gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { origin: DVec2 },
}

/// The world plus everything the user is doing to it.
pub struct Simulation {
    pub params: Params,
    world: World,
    selected_mass: f64,
    drag: DragState,
    running: bool,
}

impl Simulation {
    pub fn new(params: Params) -> Self {
        Simulation {
            world: World::new(params.physics),
            selected_mass: params.masses.default,
            drag: DragState::Idle,
            running: true,
            params,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn selected_mass(&self) -> f64 {
        self.selected_mass
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn show_vectors(&self) -> bool {
        self.world.show_vectors()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds the fixed heavy body in the middle of the window.
    pub fn spawn_central_body(&mut self) {
        let center = self.params.center();
        let mass = self.params.central_body_mass;
        if let Err(e) = self.world.add_body(mass, center, DVec2::ZERO, true, false) {
            warn!("could not place central body: {}", e);
        }
    }

    /// Runs one frame: physics, drawing, then the input that arrived.
    pub fn frame<C, I>(&mut self, canvas: &mut C, cursor: DVec2, events: I)
    where
        C: Canvas,
        I: IntoIterator<Item = Event>,
    {
        let style = self.params.style;

        canvas.clear(style.background);
        self.world.step(self.params.bounds());

        if let DragState::Dragging { origin } = self.drag {
            canvas.draw_line(origin, cursor, style.drag_line_width, style.drag_line);
        }
        self.world.render_all(canvas, &style);

        for event in events {
            self.handle_event(event, cursor);
        }

        canvas.present();
    }

    /// Applies one input event.
    ///
    /// While a drag is in progress only the release and quitting are
    /// handled; keys and further presses are dropped.
    pub fn handle_event(&mut self, event: Event, cursor: DVec2) {
        match (self.drag, event) {
            (_, Event::Quit) => {
                info!("quit requested");
                self.running = false;
            }
            (DragState::Idle, Event::MouseDown { position }) => {
                self.drag = DragState::Dragging { origin: position };
            }
            (DragState::Dragging { origin }, Event::MouseUp { position }) => {
                self.drag = DragState::Idle;
                let velocity = (position - origin) / self.params.spawn_vector_divider;
                self.spawn(self.selected_mass, origin, velocity);
            }
            (DragState::Idle, Event::KeyDown(action)) => self.apply(action, cursor),
            _ => {}
        }
    }

    fn apply(&mut self, action: Action, cursor: DVec2) {
        match action {
            Action::SmallMass => self.select_mass(self.params.masses.small),
            Action::DefaultMass => self.select_mass(self.params.masses.default),
            Action::BigMass => self.select_mass(self.params.masses.big),
            Action::Clear => {
                info!("clearing {} bodies", self.world.len());
                self.world.clear();
            }
            Action::ToggleVectors => {
                self.world.toggle_vector_display();
                info!("velocity vectors {}", if self.world.show_vectors() { "on" } else { "off" });
            }
            Action::SpawnParticles => self.spawn_particles(cursor),
        }
    }

    fn select_mass(&mut self, mass: f64) {
        info!("selected mass {}", mass);
        self.selected_mass = mass;
    }

    fn spawn(&mut self, mass: f64, position: DVec2, velocity: DVec2) {
        if let Err(e) = self.world.add_body(mass, position, velocity, false, false) {
            warn!("spawn at ({:.0}, {:.0}) rejected: {}", position.x, position.y, e);
        }
    }

    /// Drops a column of particles below the cursor.
    fn spawn_particles(&mut self, cursor: DVec2) {
        let count = self.params.particles_per_click;
        let mass = self.params.particle_mass;
        let velocity = self.params.particle_velocity;

        for i in 0..count {
            let position = cursor + DVec2::new(0.0, i as f64);
            if let Err(e) = self.world.add_body(mass, position, velocity, false, true) {
                warn!("particle burst rejected: {}", e);
                return;
            }
        }
        debug!("spawned {} particles at ({:.0}, {:.0})", count, cursor.x, cursor.y);
    }
}
