use bevy::math::DVec2;
use bevy::prelude::Color;

/// Drawing surface the simulation renders a frame onto.
///
/// Coordinates are world coordinates: origin in the top left corner, y
/// pointing down.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color);
    fn draw_line(&mut self, start: DVec2, end: DVec2, width: f32, color: Color);
    /// Marks the end of a frame.
    fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Line {
        start: DVec2,
        end: DVec2,
        width: f32,
        color: Color,
    },
}

/// A [`Canvas`] that records what was drawn.
///
/// Shapes drawn since the last `present` are pending; `present` publishes
/// them as the latest frame, which the renderer picks up with
/// [`ShapeBuffer::take_presented`].
#[derive(Debug, Default)]
pub struct ShapeBuffer {
    background: Option<Color>,
    pending: Vec<Shape>,
    presented: Option<Vec<Shape>>,
}

impl ShapeBuffer {
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Shapes drawn so far in the current frame.
    pub fn pending(&self) -> &[Shape] {
        &self.pending
    }

    /// Takes the latest presented frame, if a new one was presented since
    /// the last call.
    pub fn take_presented(&mut self) -> Option<Vec<Shape>> {
        self.presented.take()
    }
}

impl Canvas for ShapeBuffer {
    fn clear(&mut self, color: Color) {
        self.background = Some(color);
        self.pending.clear();
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.pending.push(Shape::Circle { center, radius, color });
    }

    fn draw_line(&mut self, start: DVec2, end: DVec2, width: f32, color: Color) {
        self.pending.push(Shape::Line { start, end, width, color });
    }

    fn present(&mut self) {
        self.presented = Some(std::mem::take(&mut self.pending));
    }
}
