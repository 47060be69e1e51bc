#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5eed)
}

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, vx, vy, radius: 1.0, opacity: 0.5 }
}

// --- Bounds ---

#[test]
fn bounds_new_clamps_negative_extents() {
    let b = Bounds::new(-10.0, 20.0);
    assert_eq!(b.width, 0.0);
    assert_eq!(b.height, 20.0);
}

#[test]
fn bounds_new_treats_nan_as_zero() {
    let b = Bounds::new(f64::NAN, 5.0);
    assert_eq!(b.width, 0.0);
}

#[test]
fn bounds_contains_edges() {
    let b = Bounds::new(100.0, 50.0);
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(100.0, 50.0));
    assert!(!b.contains(100.1, 10.0));
    assert!(!b.contains(10.0, -0.1));
}

// --- particle_count ---

#[test]
fn particle_count_one_per_unit_area() {
    assert_eq!(particle_count(Bounds::new(80.0, 100.0)), 1);
    assert_eq!(particle_count(Bounds::new(800.0, 1000.0)), 100);
}

#[test]
fn particle_count_rounds_down() {
    assert_eq!(particle_count(Bounds::new(79.0, 100.0)), 0);
    assert_eq!(particle_count(Bounds::new(159.0, 100.0)), 1);
}

#[test]
fn particle_count_zero_for_empty_bounds() {
    assert_eq!(particle_count(Bounds::default()), 0);
    assert_eq!(particle_count(Bounds::new(1920.0, 0.0)), 0);
}

#[test]
fn particle_count_is_monotone_in_area() {
    let mut last = 0;
    for step in 0..200 {
        let side = f64::from(step) * 37.5;
        let count = particle_count(Bounds::new(side, side * 0.75));
        assert!(count >= last, "count dropped from {last} to {count} at side {side}");
        last = count;
    }
    assert!(last > 0);
}

// --- reset ---

#[test]
fn reset_creates_exact_count() {
    let mut field = ParticleField::new();
    let bounds = Bounds::new(1280.0, 2400.0);
    field.reset(bounds, &mut rng());
    assert_eq!(field.len(), particle_count(bounds));
    assert_eq!(field.bounds(), bounds);
}

#[test]
fn reset_places_particles_inside_with_configured_ranges() {
    let mut field = ParticleField::new();
    let bounds = Bounds::new(640.0, 480.0);
    field.reset(bounds, &mut rng());
    for p in field.particles() {
        assert!(bounds.contains(p.x, p.y));
        assert!(p.vx.abs() <= MAX_SPEED);
        assert!(p.vy.abs() <= MAX_SPEED);
        assert!((MIN_RADIUS..=MAX_RADIUS).contains(&p.radius));
        assert!((MIN_OPACITY..=MAX_OPACITY).contains(&p.opacity));
    }
}

#[test]
fn reset_replaces_previous_particles() {
    let mut field = ParticleField::new();
    let mut r = rng();
    field.reset(Bounds::new(1000.0, 1000.0), &mut r);
    assert_eq!(field.len(), 125);
    field.reset(Bounds::new(400.0, 400.0), &mut r);
    assert_eq!(field.len(), 20);
}

#[test]
fn reset_to_empty_bounds_yields_empty_field() {
    let mut field = ParticleField::new();
    field.reset(Bounds::new(0.0, 900.0), &mut rng());
    assert!(field.is_empty());
}

// --- advance / step ---

#[test]
fn advance_moves_by_velocity_inside_bounds() {
    let mut p = particle(10.0, 20.0, 1.5, -2.0);
    p.advance(Bounds::new(100.0, 100.0));
    assert_eq!((p.x, p.y), (11.5, 18.0));
    assert_eq!((p.vx, p.vy), (1.5, -2.0));
}

#[test]
fn advance_reflects_right_edge() {
    let mut p = particle(99.5, 50.0, 1.0, 0.0);
    p.advance(Bounds::new(100.0, 100.0));
    assert_eq!(p.vx, -1.0);
    assert_eq!(p.x, 100.0);
}

#[test]
fn advance_reflects_left_edge() {
    let mut p = particle(0.2, 50.0, -0.5, 0.0);
    p.advance(Bounds::new(100.0, 100.0));
    assert_eq!(p.vx, 0.5);
    assert_eq!(p.x, 0.0);
}

#[test]
fn advance_reflects_top_and_bottom_independently() {
    let bounds = Bounds::new(100.0, 100.0);
    let mut top = particle(50.0, 0.1, 0.3, -0.4);
    top.advance(bounds);
    assert_eq!(top.vy, 0.4);
    assert_eq!(top.vx, 0.3);

    let mut bottom = particle(50.0, 99.9, 0.3, 0.4);
    bottom.advance(bounds);
    assert_eq!(bottom.vy, -0.4);
}

#[test]
fn advance_reflects_corner_on_both_axes() {
    let mut p = particle(99.9, 99.9, 0.4, 0.4);
    p.advance(Bounds::new(100.0, 100.0));
    assert_eq!((p.vx, p.vy), (-0.4, -0.4));
}

#[test]
fn reflected_particle_stays_inside_on_following_tick() {
    let bounds = Bounds::new(100.0, 100.0);
    let mut p = particle(99.8, 0.2, 0.4, -0.4);
    p.advance(bounds);
    assert!(bounds.contains(p.x, p.y));
    p.advance(bounds);
    assert!(bounds.contains(p.x, p.y));
    assert!(p.x < 100.0);
    assert!(p.y > 0.0);
}

#[test]
fn reflection_conserves_speed() {
    let mut p = particle(99.9, 50.0, 0.37, 0.11);
    p.advance(Bounds::new(100.0, 100.0));
    assert_eq!(p.vx.abs(), 0.37);
    assert_eq!(p.vy.abs(), 0.11);
}

#[test]
fn step_never_lets_particles_escape() {
    let mut field = ParticleField::new();
    let bounds = Bounds::new(300.0, 200.0);
    field.reset(bounds, &mut rng());
    for _ in 0..5_000 {
        field.step();
        for p in field.particles() {
            assert!(bounds.contains(p.x, p.y), "escaped: {p:?}");
        }
    }
}

#[test]
fn step_keeps_particle_count() {
    let mut field = ParticleField::new();
    field.reset(Bounds::new(640.0, 480.0), &mut rng());
    let before = field.len();
    field.step();
    assert_eq!(field.len(), before);
}

#[test]
fn from_particles_steps_in_place() {
    let bounds = Bounds::new(10.0, 10.0);
    let mut field = ParticleField::from_particles(bounds, vec![particle(9.9, 5.0, 0.5, 0.0)]);
    field.step();
    assert_eq!(field.particles()[0].x, 10.0);
    assert_eq!(field.particles()[0].vx, -0.5);
    field.step();
    assert_eq!(field.particles()[0].x, 9.5);
}
