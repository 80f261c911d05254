use bevy::log::debug;
use bevy::math::DVec2;

use super::body::Body;
use super::canvas::Canvas;
use crate::config::{Physics, Style};
use crate::error::BodyError;

/// Order in which a step applies forces and moves bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationOrder {
    /// Each body sums forces from all others and moves right away, before
    /// the next body is looked at. Later bodies see earlier bodies already
    /// moved, so results depend on insertion order.
    #[default]
    Interleaved,
    /// Every body sums forces against the positions at the start of the
    /// step, then all bodies move.
    Batched,
}

/// Index of a body inside a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Owns every body and advances them one step at a time.
#[derive(Debug, Default)]
pub struct World {
    physics: Physics,
    bodies: Vec<Body>,
    show_vectors: bool,
}

impl World {
    pub fn new(physics: Physics) -> Self {
        World {
            physics,
            bodies: Vec::new(),
            show_vectors: false,
        }
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Creates a body with the world's density and appends it.
    pub fn add_body(
        &mut self,
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        is_stationary: bool,
        is_particle: bool,
    ) -> Result<BodyId, BodyError> {
        let mut body = Body::new(mass, position, velocity, self.physics.density, &self.physics)?;
        if is_stationary {
            body = body.stationary();
        }
        if is_particle {
            body = body.particle();
        }
        Ok(self.add(body))
    }

    pub fn add(&mut self, body: Body) -> BodyId {
        debug!(
            "spawned body of mass {} at ({:.1}, {:.1}), radius {:.2}",
            body.mass(),
            body.position.x,
            body.position.y,
            body.radius()
        );
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    /// Removes every body.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn show_vectors(&self) -> bool {
        self.show_vectors
    }

    pub fn toggle_vector_display(&mut self) {
        self.show_vectors = !self.show_vectors;
    }

    /// Advances the world by one frame inside a `bounds` sized box.
    pub fn step(&mut self, bounds: DVec2) {
        match self.physics.integration {
            IntegrationOrder::Interleaved => self.step_interleaved(bounds),
            IntegrationOrder::Batched => self.step_batched(bounds),
        }
    }

    fn step_interleaved(&mut self, bounds: DVec2) {
        let Physics { g, velocity_loss, .. } = self.physics;

        for i in 0..self.bodies.len() {
            for j in 0..self.bodies.len() {
                if i == j {
                    continue;
                }
                let other = self.bodies[j];
                self.bodies[i].apply_force_from(&other, g);
            }

            self.bodies[i].integrate_and_bounce(bounds, velocity_loss);
        }
    }

    fn step_batched(&mut self, bounds: DVec2) {
        let Physics { g, velocity_loss, .. } = self.physics;

        // Forces only read positions, which stay put until every body is done.
        let snapshot = self.bodies.clone();
        for (i, body) in self.bodies.iter_mut().enumerate() {
            for (j, other) in snapshot.iter().enumerate() {
                if i != j {
                    body.apply_force_from(other, g);
                }
            }
        }

        for body in self.bodies.iter_mut() {
            body.integrate_and_bounce(bounds, velocity_loss);
        }
    }

    pub fn render_all(&self, canvas: &mut impl Canvas, style: &Style) {
        for body in &self.bodies {
            body.render(canvas, self.show_vectors, style);
        }
    }
}
