#![forbid(unsafe_code)]

//! [`DrawSurface`] over a canvas 2D context.

use std::f64::consts::TAU;

use driftfield_core::{DrawSurface, Fill, Point, RectF, Rgba, Stroke};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::WebError;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| WebError::ContextUnavailable)?
            .ok_or(WebError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::ContextUnavailable)?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&stroke.color.to_string());
        ctx.set_line_width(stroke.width);
        ctx.set_global_alpha(stroke.alpha);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Fill) {
        let ctx = &self.ctx;
        let css = fill.color.to_string();
        ctx.set_shadow_blur(fill.glow);
        ctx.set_shadow_color(&css);
        ctx.set_fill_style_str(&css);
        ctx.begin_path();
        // `arc` throws on a negative radius; skip rather than abort the pass.
        if ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU).is_ok() {
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);
    }
}
