use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MAX_DPR;
use crate::field::Field;
use crate::palette::Palette;
use crate::pointer::Pointer;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `FieldEngine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct FieldCore {
    pub field: Field,
    pub pointer: Pointer,
    pub palette: Palette,
    pub dpr: f64,
}

impl Default for FieldCore {
    fn default() -> Self {
        Self { field: Field::default(), pointer: Pointer::Idle, palette: Palette::default(), dpr: 1.0 }
    }
}

impl FieldCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Rebuild the field for a new CSS size. Any motion in flight is discarded.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.field = Field::new(width, height);
        self.dpr = clamp_dpr(dpr);
    }

    // --- Input ---

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    // --- Frame ---

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) {
        self.field.step(self.pointer);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

/// Device pixel ratio used for the backing store: at least 1, at most [`MAX_DPR`].
#[must_use]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() { raw.clamp(1.0, MAX_DPR) } else { 1.0 }
}

/// Backing-store size in device pixels for a CSS length.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_size(css: f64, dpr: f64) -> u32 {
    (css.max(0.0) * dpr).round() as u32
}

/// The full field engine. Wraps `FieldCore` and owns the canvas and its 2D context.
pub struct FieldEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: FieldCore,
}

impl FieldEngine {
    /// Bind to `canvas`. Returns `None` when a 2D context is unavailable.
    #[must_use]
    pub fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
        let raw = match canvas.get_context("2d") {
            Ok(Some(raw)) => raw,
            _ => return None,
        };
        let ctx = match raw.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return None,
        };
        let mut core = FieldCore::new();
        core.set_palette(Palette::from_document());
        Some(Self { canvas, ctx, core })
    }

    // --- Viewport ---

    /// Size the backing store for `width` x `height` CSS pixels and rebuild the field.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style or transform update fails.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.resize(width, height, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width(backing_size(width, dpr));
        self.canvas.set_height(backing_size(height, dpr));
        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
    }

    // --- Delegated input ---

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Re-read theme colours after a theme change.
    pub fn refresh_palette(&mut self) {
        self.core.set_palette(Palette::from_document());
    }

    // --- Render ---

    /// Step the simulation and draw the result.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        render::draw_frame(&self.ctx, &self.core.field, self.core.pointer, &self.core.palette)
    }

    /// Draw the motionless reduced-motion frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn draw_static(&self) -> Result<(), JsValue> {
        render::draw_static(&self.ctx, &self.core.field, &self.core.palette)
    }
}
