use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::host::{DrawCommand, DrawSurface};

const SPARKLE_COLOR: &str = "rgba(255, 255, 255, 0.9)";

/// `<canvas>` 2D context as a [`DrawSurface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn fill_arc(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.ctx.save();
        match command {
            DrawCommand::Circle { center, radius, color, alpha, glow } => {
                self.ctx.set_global_alpha(*alpha);
                self.ctx.set_fill_style_str(color);
                if *glow > 0.0 {
                    self.ctx.set_shadow_blur(*glow);
                    self.ctx.set_shadow_color(color);
                }
                self.fill_arc(center.x, center.y, *radius);
            }
            DrawCommand::Line { from, to, color, alpha, width } => {
                self.ctx.set_global_alpha(*alpha);
                self.ctx.set_stroke_style_str(color);
                self.ctx.set_line_width(*width);
                self.ctx.begin_path();
                self.ctx.move_to(from.x, from.y);
                self.ctx.line_to(to.x, to.y);
                self.ctx.stroke();
            }
            DrawCommand::Sparkle { center, radius, alpha } => {
                self.ctx.set_global_alpha(*alpha);
                self.ctx.set_fill_style_str(SPARKLE_COLOR);
                self.ctx.set_shadow_blur(radius * 4.0);
                self.ctx.set_shadow_color(SPARKLE_COLOR);
                self.fill_arc(center.x, center.y, *radius);
            }
        }
        self.ctx.restore();
    }
}
