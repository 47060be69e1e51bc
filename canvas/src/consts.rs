//! Shared numeric constants for the canvas crate.

// ── Density ─────────────────────────────────────────────────────

/// Canvas area (CSS px²) covered by a single particle.
pub const AREA_PER_PARTICLE: f64 = 8000.0;

// ── Motion ──────────────────────────────────────────────────────

/// Maximum absolute velocity per axis, in CSS pixels per frame.
pub const MAX_SPEED: f64 = 0.4;

// ── Appearance ──────────────────────────────────────────────────

/// Smallest particle radius in CSS pixels.
pub const MIN_RADIUS: f64 = 0.6;

/// Largest particle radius in CSS pixels.
pub const MAX_RADIUS: f64 = 2.4;

/// Faintest particle opacity.
pub const MIN_OPACITY: f64 = 0.15;

/// Brightest particle opacity.
pub const MAX_OPACITY: f64 = 0.75;

/// Particle fill colour as an `r, g, b` triple (brand pink).
pub const PARTICLE_RGB: (u8, u8, u8) = (236, 72, 153);
