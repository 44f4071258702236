//! Movement domain: axis-separated collision resolution.
//!
//! The resolver is a pure function of its inputs: identical position,
//! direction, obstacles, and bounds always produce the identical result.

use bevy::prelude::*;

/// Corner-anchored axis-aligned box in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Walkable surface dimensions in tiles.
#[derive(Debug, Clone, Copy)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    /// Positions clamp to `[0, dimension - 2]`: one tile of margin plus
    /// the sprite footprint.
    fn max_x(&self) -> f32 {
        self.width - 2.0
    }

    fn max_y(&self) -> f32 {
        self.height - 2.0
    }
}

/// The player's collision box: unit size, centered on its position.
fn player_box(pos: Vec2) -> Aabb {
    Aabb::new(pos.x - 0.5, pos.y - 0.5, 1.0, 1.0)
}

fn blocked(pos: Vec2, obstacles: &[Aabb]) -> bool {
    let body = player_box(pos);
    obstacles.iter().any(|obstacle| body.overlaps(obstacle))
}

/// Advance `pos` one step along `direction`, resolving each axis
/// independently: X first, then Y. A blocked axis holds its previous
/// value; a blocked X additionally reduces the Y step to
/// `slide_factor` of its magnitude so the player glides along walls.
/// Both coordinates finally clamp into the map bounds.
pub fn resolve_step(
    pos: Vec2,
    direction: Vec2,
    step_size: f32,
    slide_factor: f32,
    obstacles: &[Aabb],
    bounds: MapBounds,
) -> Vec2 {
    let dir = direction.normalize_or_zero();
    let mut next = pos;

    let mut x_blocked = false;
    if dir.x != 0.0 {
        let candidate = Vec2::new(pos.x + dir.x * step_size, pos.y);
        if blocked(candidate, obstacles) {
            x_blocked = true;
        } else {
            next.x = candidate.x;
        }
    }

    if dir.y != 0.0 {
        let step_y = if x_blocked {
            step_size * slide_factor
        } else {
            step_size
        };
        let candidate = Vec2::new(next.x, pos.y + dir.y * step_y);
        if !blocked(candidate, obstacles) {
            next.y = candidate.y;
        }
    }

    Vec2::new(
        next.x.clamp(0.0, bounds.max_x()),
        next.y.clamp(0.0, bounds.max_y()),
    )
}
