//! Particle field: the in-memory arena of background particles.
//!
//! The field is a flat `Vec<Particle>` that is filled once per (re)size and
//! then mutated in place every frame. Nothing here touches the browser, so
//! the whole simulation is testable natively.

use rand::Rng;

use crate::consts::{AREA_PER_PARTICLE, MAX_OPACITY, MAX_RADIUS, MAX_SPEED, MIN_OPACITY, MIN_RADIUS};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Canvas extent in CSS pixels. Particles live in `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Build bounds, treating negative or NaN extents as zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// A single background particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Spawn a particle at a random position inside `bounds`.
    pub fn random<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..=bounds.width),
            y: rng.random_range(0.0..=bounds.height),
            vx: rng.random_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.random_range(-MAX_SPEED..=MAX_SPEED),
            radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
            opacity: rng.random_range(MIN_OPACITY..=MAX_OPACITY),
        }
    }

    /// Move one frame and reflect off any edge that was crossed.
    ///
    /// A crossed axis has its velocity pointed back inward and its position
    /// clamped to the edge, so the particle never ends a frame outside.
    pub fn advance(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;
        (self.x, self.vx) = reflect(self.x, self.vx, bounds.width);
        (self.y, self.vy) = reflect(self.y, self.vy, bounds.height);
    }
}

fn reflect(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
    if pos < 0.0 {
        (0.0, vel.abs())
    } else if pos > extent {
        (extent, -vel.abs())
    } else {
        (pos, vel)
    }
}

/// Number of particles for a canvas of the given size: one per
/// [`AREA_PER_PARTICLE`] square pixels, rounded down.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(bounds: Bounds) -> usize {
    let count = (bounds.area() / AREA_PER_PARTICLE).floor();
    if count.is_finite() && count > 0.0 { count as usize } else { 0 }
}

/// The particle arena.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from explicit particles (used by tests and replays).
    #[must_use]
    pub fn from_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self { bounds, particles }
    }

    /// Discard all particles and respawn [`particle_count`] of them for `bounds`.
    ///
    /// The backing buffer is reused, so repeated resizes only allocate when
    /// the canvas grows past its previous peak.
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let count = particle_count(bounds);
        self.bounds = bounds;
        self.particles.clear();
        self.particles.reserve(count);
        self.particles.extend((0..count).map(|_| Particle::random(bounds, rng)));
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
