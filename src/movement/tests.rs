//! Movement domain: tests for the axis-separated resolver and input mapping.

use bevy::prelude::*;

use super::resolver::{Aabb, MapBounds, resolve_step};
use super::systems::input::direction_for;

const STEP: f32 = 0.16;
const SLIDE: f32 = 1.0 / 3.0;

fn room_bounds() -> MapBounds {
    MapBounds {
        width: 19.0,
        height: 19.0,
    }
}

// -----------------------------------------------------------------------------
// Aabb tests
// -----------------------------------------------------------------------------

#[test]
fn test_aabb_overlap() {
    let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
    assert!(a.overlaps(&Aabb::new(0.5, 0.5, 1.0, 1.0)));
    assert!(a.overlaps(&Aabb::new(-0.5, -0.5, 1.0, 1.0)));
    assert!(!a.overlaps(&Aabb::new(2.0, 0.0, 1.0, 1.0)));
    assert!(!a.overlaps(&Aabb::new(0.0, -1.5, 1.0, 1.0)));
}

#[test]
fn test_aabb_touching_edges_do_not_overlap() {
    let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
    assert!(!a.overlaps(&Aabb::new(1.0, 0.0, 1.0, 1.0)));
    assert!(!a.overlaps(&Aabb::new(0.0, 1.0, 1.0, 1.0)));
}

// -----------------------------------------------------------------------------
// Resolver tests
// -----------------------------------------------------------------------------

#[test]
fn test_free_movement_is_normalized() {
    let next = resolve_step(
        Vec2::new(9.0, 9.0),
        Vec2::new(1.0, 1.0),
        STEP,
        SLIDE,
        &[],
        room_bounds(),
    );
    // Diagonal input moves step_size total, not step_size per axis.
    let per_axis = STEP * std::f32::consts::FRAC_1_SQRT_2;
    assert!((next.x - (9.0 + per_axis)).abs() < 1e-5);
    assert!((next.y - (9.0 + per_axis)).abs() < 1e-5);
    assert!((next.distance(Vec2::new(9.0, 9.0)) - STEP).abs() < 1e-5);
}

#[test]
fn test_resolver_is_deterministic() {
    let obstacles = [Aabb::new(9.1, 9.1, 0.5, 0.5), Aabb::new(4.0, 4.0, 0.5, 0.5)];
    let first = resolve_step(
        Vec2::new(8.7, 9.2),
        Vec2::new(1.0, -1.0),
        STEP,
        SLIDE,
        &obstacles,
        room_bounds(),
    );
    let second = resolve_step(
        Vec2::new(8.7, 9.2),
        Vec2::new(1.0, -1.0),
        STEP,
        SLIDE,
        &obstacles,
        room_bounds(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_both_axes_blocked_holds_position() {
    // Player at (9,9) against a box at (9.1,9.1): the X step collides, and
    // the reduced Y step still lands inside the box, so neither axis moves.
    let obstacles = [Aabb::new(9.1, 9.1, 0.5, 0.5)];
    let next = resolve_step(
        Vec2::new(9.0, 9.0),
        Vec2::new(1.0, 1.0),
        STEP,
        SLIDE,
        &obstacles,
        room_bounds(),
    );
    assert_eq!(next, Vec2::new(9.0, 9.0));
}

#[test]
fn test_blocked_x_slides_y_at_one_third() {
    // The box blocks movement to the right, but the player is walking
    // diagonally up-right; Y escapes the box at the reduced step.
    let obstacles = [Aabb::new(9.55, 9.49, 0.5, 0.5)];
    let pos = Vec2::new(9.0, 9.0);
    let next = resolve_step(
        pos,
        Vec2::new(1.0, -1.0),
        STEP,
        SLIDE,
        &obstacles,
        room_bounds(),
    );

    let per_axis = STEP * std::f32::consts::FRAC_1_SQRT_2;
    assert_eq!(next.x, 9.0, "X must hold against the box");
    assert!(
        (next.y - (9.0 - per_axis * SLIDE)).abs() < 1e-5,
        "Y must glide at one third of the step, got {}",
        next.y
    );
    // The glide is strictly slower than a free Y step.
    assert!(next.y > 9.0 - per_axis);
}

#[test]
fn test_blocked_y_does_not_reduce_x() {
    // Only the Y move collides; X applies at full magnitude.
    let obstacles = [Aabb::new(8.6, 9.55, 0.8, 0.5)];
    let pos = Vec2::new(9.0, 9.0);
    let next = resolve_step(
        pos,
        Vec2::new(1.0, 1.0),
        STEP,
        SLIDE,
        &obstacles,
        room_bounds(),
    );

    let per_axis = STEP * std::f32::consts::FRAC_1_SQRT_2;
    assert!((next.x - (9.0 + per_axis)).abs() < 1e-5);
    assert_eq!(next.y, 9.0);
}

#[test]
fn test_clamp_to_lower_bound() {
    let next = resolve_step(
        Vec2::new(0.05, 0.05),
        Vec2::new(-1.0, -1.0),
        STEP,
        SLIDE,
        &[],
        room_bounds(),
    );
    assert_eq!(next, Vec2::ZERO);
}

#[test]
fn test_clamp_to_upper_bound() {
    // Upper bound reserves a one-tile margin: 19 - 2 = 17.
    let next = resolve_step(
        Vec2::new(16.95, 16.95),
        Vec2::new(1.0, 1.0),
        STEP,
        SLIDE,
        &[],
        room_bounds(),
    );
    assert_eq!(next, Vec2::new(17.0, 17.0));
}

#[test]
fn test_clamp_applies_after_collision_resolution() {
    for x in [-0.4_f32, 0.3, 9.0, 16.8, 17.4] {
        for y in [-0.2_f32, 8.9, 17.2] {
            let next = resolve_step(
                Vec2::new(x, y),
                Vec2::new(1.0, 1.0),
                STEP,
                SLIDE,
                &[Aabb::new(9.1, 9.1, 0.5, 0.5)],
                room_bounds(),
            );
            assert!((0.0..=17.0).contains(&next.x), "x escaped bounds: {}", next.x);
            assert!((0.0..=17.0).contains(&next.y), "y escaped bounds: {}", next.y);
        }
    }
}

#[test]
fn test_zero_direction_holds_position() {
    let pos = Vec2::new(5.5, 7.25);
    let next = resolve_step(pos, Vec2::ZERO, STEP, SLIDE, &[], room_bounds());
    assert_eq!(next, pos);
}

// -----------------------------------------------------------------------------
// Input mapping tests
// -----------------------------------------------------------------------------

#[test]
fn test_cardinal_key_mapping() {
    assert_eq!(direction_for(true, false, false, false), Vec2::new(-1.0, -1.0));
    assert_eq!(direction_for(false, true, false, false), Vec2::new(1.0, 1.0));
    assert_eq!(direction_for(false, false, true, false), Vec2::new(-1.0, 1.0));
    assert_eq!(direction_for(false, false, false, true), Vec2::new(1.0, -1.0));
}

#[test]
fn test_combined_keys_form_eight_directions() {
    // Adjacent key pairs collapse onto a single grid axis.
    assert_eq!(direction_for(true, false, false, true), Vec2::new(0.0, -2.0));
    assert_eq!(direction_for(true, false, true, false), Vec2::new(-2.0, 0.0));
    assert_eq!(direction_for(false, true, false, true), Vec2::new(2.0, 0.0));
    assert_eq!(direction_for(false, true, true, false), Vec2::new(0.0, 2.0));
    // Opposite keys cancel.
    assert_eq!(direction_for(true, true, false, false), Vec2::ZERO);
    assert_eq!(direction_for(false, false, true, true), Vec2::ZERO);
}
