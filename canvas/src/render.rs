//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels; it does
//! not mutate any simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Animator::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::PARTICLE_RGB;
use crate::field::{Particle, ParticleField};

/// Clear the canvas and draw every particle as a filled circle.
///
/// Coordinates are CSS pixels; `dpr` scales them onto the backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, dpr: f64) -> Result<(), JsValue> {
    let bounds = field.bounds();

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);

    for particle in field.particles() {
        draw_particle(ctx, particle)?;
    }
    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&fill_style(p.opacity));
    ctx.fill();
    Ok(())
}

/// CSS colour string for a particle of the given opacity.
#[must_use]
pub fn fill_style(opacity: f64) -> String {
    let (r, g, b) = PARTICLE_RGB;
    format!("rgba({r}, {g}, {b}, {:.3})", opacity.clamp(0.0, 1.0))
}
