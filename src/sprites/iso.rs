//! Sprites domain: isometric grid-to-screen mapping and depth keys.

use bevy::prelude::*;

/// Logical footprint of one floor tile in screen units (2:1 diamond).
pub const TILE_WIDTH: f32 = 40.0;
pub const TILE_HEIGHT: f32 = 20.0;

/// Diamond projection: screen X grows along `gx - gy`, screen Y along
/// `gx + gy`. Negated here because Bevy's Y axis points up.
pub fn grid_to_screen(grid: Vec2) -> Vec2 {
    Vec2::new(
        (grid.x - grid.y) * (TILE_WIDTH / 2.0),
        -(grid.x + grid.y) * (TILE_HEIGHT / 2.0),
    )
}

/// Paint-order tier. Within a tier, entities deeper into the diamond
/// (larger `gx + gy`) draw in front.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepthTier {
    /// Floor tiles, under everything.
    Floor,
    /// Entities pinned behind the rest of their room (far-edge doors).
    Bottom,
    Normal,
    /// Entities pinned in front (near-edge doors).
    Top,
}

impl DepthTier {
    fn base(self) -> f32 {
        match self {
            DepthTier::Floor => 0.0,
            DepthTier::Bottom => 100.0,
            DepthTier::Normal => 200.0,
            DepthTier::Top => 300.0,
        }
    }
}

/// Scalar Z preserving the lexicographic `(tier, gx + gy)` order: tier
/// bases are spaced wider than any depth contribution on a 19x19 room.
pub fn depth_z(tier: DepthTier, grid: Vec2) -> f32 {
    tier.base() + (grid.x + grid.y) * 0.1
}
