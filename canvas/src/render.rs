//! Rendering: draws a field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the field, pointer, and palette and produces
//! pixels. It does not mutate any simulation state.
//!
//! The context is expected to already carry the device-pixel-ratio transform,
//! so all coordinates here are CSS pixels.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CONNECTION_LINE_WIDTH_PX, DOT_RADIUS_PX, FALLOFF_RADIUS_PX, GLOW_ALPHA, STATIC_ALPHA};
use crate::field::Field;
use crate::palette::Palette;
use crate::point::Point;
use crate::pointer::Pointer;

/// Draw one animated frame: connections, dots, then the pointer glow.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    field: &Field,
    pointer: Pointer,
    palette: &Palette,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    ctx.set_line_width(CONNECTION_LINE_WIDTH_PX);
    ctx.set_stroke_style_str(&palette.line);
    for link in field.connections() {
        ctx.set_global_alpha(link.opacity);
        ctx.begin_path();
        ctx.move_to(link.from.x, link.from.y);
        ctx.line_to(link.to.x, link.to.y);
        ctx.stroke();
    }

    for dot in field.dots() {
        let look = Field::appearance(dot, pointer);
        ctx.set_fill_style_str(if look.accent { &palette.accent } else { &palette.dot });
        ctx.set_global_alpha(look.alpha);
        fill_circle(ctx, dot.pos, look.radius)?;
    }

    if let Some(at) = pointer.position() {
        draw_glow(ctx, at, palette)?;
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Draw the reduced-motion frame: every dot on its anchor in the base colour.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_static(ctx: &CanvasRenderingContext2d, field: &Field, palette: &Palette) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_fill_style_str(&palette.dot);
    ctx.set_global_alpha(STATIC_ALPHA);
    for dot in field.dots() {
        fill_circle(ctx, dot.anchor, DOT_RADIUS_PX)?;
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_glow(ctx: &CanvasRenderingContext2d, at: Point, palette: &Palette) -> Result<(), JsValue> {
    let gradient = ctx.create_radial_gradient(at.x, at.y, 0.0, at.x, at.y, FALLOFF_RADIUS_PX)?;
    gradient.add_color_stop(0.0, &palette.accent)?;
    gradient.add_color_stop(1.0, "transparent")?;
    ctx.set_global_alpha(GLOW_ALPHA);
    ctx.set_fill_style_canvas_gradient(&gradient);
    fill_circle(ctx, at, FALLOFF_RADIUS_PX)
}

fn fill_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
