#![forbid(unsafe_code)]

//! Drawing surface seam.
//!
//! [`DrawSurface`] is the subset of an immediate-mode 2D raster context the
//! field needs. The browser implements it over `CanvasRenderingContext2d`;
//! [`RecordingSurface`] captures the calls so draw passes can be asserted
//! without a display.

use crate::color::{Paint, Rgba};
use crate::geometry::{Point, RectF};

/// Line segment style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    /// Global opacity applied on top of `color.a`.
    pub alpha: f64,
    pub width: f64,
}

/// Disc fill style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Paint,
    /// Blur radius of a halo in the fill colour; `0.0` draws no glow.
    pub glow: f64,
}

/// Immediate-mode 2D raster target.
///
/// Implementations must accept any finite coordinates, including ones outside
/// the target, and zero radii.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: RectF, color: Rgba);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Fill);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    #[inline]
    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        (**self).fill_rect(rect, color);
    }

    #[inline]
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        (**self).stroke_line(from, to, stroke);
    }

    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f64, fill: Fill) {
        (**self).fill_circle(center, radius, fill);
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: RectF,
        color: Rgba,
    },
    StrokeLine {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    FillCircle {
        center: Point,
        radius: f64,
        fill: Fill,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, keeping the allocation.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands
            .push(DrawCommand::StrokeLine { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Fill) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_through<S: DrawSurface>(mut surface: S) {
        surface.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0), Rgba::new(0, 0, 0, 1.0));
        surface.fill_circle(
            Point::new(0.5, 0.5),
            0.0,
            Fill {
                color: Rgba::new(255, 255, 255, 1.0).into(),
                glow: 0.0,
            },
        );
    }

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        draw_through(&mut surface);
        surface.stroke_line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Stroke {
                color: Rgba::new(1, 2, 3, 0.1),
                alpha: 0.5,
                width: 1.0,
            },
        );
        let commands = surface.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[1], DrawCommand::FillCircle { radius, .. } if radius == 0.0));
        assert!(matches!(commands[2], DrawCommand::StrokeLine { .. }));
        assert_eq!(surface.line_count(), 1);
        assert_eq!(surface.circle_count(), 1);
    }

    #[test]
    fn take_empties_the_log() {
        let mut surface = RecordingSurface::new();
        draw_through(&mut surface);
        let taken = surface.take();
        assert_eq!(taken.len(), 2);
        assert!(surface.commands().is_empty());
    }
}
