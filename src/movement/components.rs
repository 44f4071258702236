//! Movement domain: components for entities that live on the room grid.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Continuous position in grid units. Tile (0,0) is the far corner of the
/// isometric diamond; fractional coordinates are expected.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct GridPosition(pub Vec2);

impl GridPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}
