use std::f64::consts::PI;

use bevy::math::DVec2;

use super::canvas::Canvas;
use crate::config::{Physics, Style};
use crate::error::BodyError;

/// A point mass with a radius derived from its mass and density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,

    mass: f64,
    radius: f64,

    is_stationary: bool,
    is_particle: bool,
}

impl Body {
    pub fn new(
        mass: f64,
        position: DVec2,
        velocity: DVec2,
        density: f64,
        physics: &Physics,
    ) -> Result<Body, BodyError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BodyError::InvalidMass(mass));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(BodyError::InvalidDensity(density));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(BodyError::NonFinite);
        }

        Ok(Body {
            position,
            velocity,
            mass,
            radius: radius_for(mass, density, physics),
            is_stationary: false,
            is_particle: false,
        })
    }

    /// Makes the body a fixed attractor.
    pub fn stationary(mut self) -> Self {
        self.is_stationary = true;
        self
    }

    /// Makes the body ignore other particles.
    pub fn particle(mut self) -> Self {
        self.is_particle = true;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_stationary(&self) -> bool {
        self.is_stationary
    }

    pub fn is_particle(&self) -> bool {
        self.is_particle
    }

    /// Accelerates `self` towards `other`. Only the velocity changes.
    ///
    /// Nothing happens when `self` is stationary, when both are particles, or
    /// when the two circles touch or overlap; the last rule also keeps a
    /// body from attracting itself.
    pub fn apply_force_from(&mut self, other: &Body, g: f64) {
        if self.is_stationary || (self.is_particle && other.is_particle) {
            return;
        }

        let delta = self.position - other.position;
        let d = delta.length();
        if d <= self.radius + other.radius {
            return;
        }

        // F = G * M * m / d^2, pointing from self towards other
        let force = g * self.mass * other.mass / (d * d);
        let f = force * delta / d;

        self.velocity += -f / self.mass;
    }

    /// Moves the body by its velocity and bounces it off the walls of `bounds`.
    pub fn integrate_and_bounce(&mut self, bounds: DVec2, velocity_loss: f64) {
        if self.is_stationary {
            return;
        }

        self.position += self.velocity;

        let (x, vx) = bounce(self.position.x, self.velocity.x, self.radius, bounds.x, velocity_loss);
        let (y, vy) = bounce(self.position.y, self.velocity.y, self.radius, bounds.y, velocity_loss);
        self.position = DVec2::new(x, y);
        self.velocity = DVec2::new(vx, vy);
    }

    pub fn render(&self, canvas: &mut impl Canvas, show_vector: bool, style: &Style) {
        canvas.draw_circle(self.position, self.radius, style.planet);

        if show_vector {
            let tip = self.position + self.velocity * style.vector_length_multi;
            canvas.draw_line(self.position, tip, style.vector_width, style.vector);
        }
    }
}

/// r = (3/(4π) * m/ρ)^(1/3), clamped to the configured range.
fn radius_for(mass: f64, density: f64, physics: &Physics) -> f64 {
    let radius = (3.0 / (4.0 * PI) * mass / density).cbrt();
    radius.clamp(physics.min_radius, physics.max_radius)
}

/// Keeps one axis inside [radius, limit - radius], reflecting and damping
/// the velocity when a wall is hit.
fn bounce(pos: f64, vel: f64, radius: f64, limit: f64, velocity_loss: f64) -> (f64, f64) {
    if pos < radius {
        (radius + 1.0, -velocity_loss * vel)
    } else if pos > limit - radius {
        (limit - radius, -velocity_loss * vel)
    } else {
        (pos, vel)
    }
}
