use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{Bounds, ParticleField};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core animator state: everything that does not depend on the canvas element.
///
/// Separated from `Animator` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct AnimatorCore {
    pub field: ParticleField,
    rng: SmallRng,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    measured: bool,
    frames: u64,
}

impl AnimatorCore {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            field: ParticleField::new(),
            rng: SmallRng::seed_from_u64(seed),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            measured: false,
            frames: 0,
        }
    }

    /// Record a new measurement of the content area.
    ///
    /// Respawns the particle set only when the size actually changed, so a
    /// burst of identical observer callbacks doesn't reshuffle the scene.
    /// Returns `true` if the field was re-initialised.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let bounds = Bounds::new(width, height);
        let unchanged = self.measured && bounds == self.field.bounds();
        self.viewport_width = bounds.width;
        self.viewport_height = bounds.height;
        if unchanged {
            return false;
        }
        self.measured = true;
        self.field.reset(bounds, &mut self.rng);
        log::debug!(
            "particle field reset: {}x{} -> {} particles",
            bounds.width,
            bounds.height,
            self.field.len()
        );
        true
    }

    /// Update the device pixel ratio used for the backing store.
    pub fn set_dpr(&mut self, dpr: f64) {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Canvas backing-store size in device pixels for the current viewport
    /// and pixel ratio.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = |css: f64| (css * self.dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32;
        (scale(self.viewport_width), scale(self.viewport_height))
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) {
        self.field.step();
        self.frames += 1;
    }

    /// Frames simulated since construction.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// The full animator. Wraps `AnimatorCore` and owns the browser canvas element.
pub struct Animator {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: AnimatorCore,
}

impl Animator {
    /// Create an animator bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: AnimatorCore::new(seed) })
    }

    /// Re-measure the viewport: respawn particles if the CSS size changed and
    /// resize the backing store whenever its device-pixel size no longer
    /// matches (CSS size or pixel ratio changed). Returns whether anything
    /// changed.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> bool {
        self.core.set_dpr(dpr);
        let respawned = self.core.resize(width_css, height_css);
        let (width, height) = self.core.backing_size();
        let stale = self.canvas.width() != width || self.canvas.height() != height;
        if stale {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        respawned || stale
    }

    /// Advance one frame and repaint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.field, self.core.dpr)
    }
}
