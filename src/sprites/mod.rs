//! Sprites domain: isometric projection, depth ordering, and the texture
//! manifest.

mod iso;
mod manifest;


pub use iso::{DepthTier, TILE_HEIGHT, TILE_WIDTH, depth_z, grid_to_screen};
pub use manifest::SpriteManifest;
pub(crate) use manifest::load_manifest;

use bevy::prelude::*;

use crate::movement::GridPosition;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, load_manifest)
            .add_systems(PostUpdate, sync_world_sprites);
    }
}

/// Projects every grid-positioned entity into screen space each frame.
/// The Z coordinate encodes the `(tier, gx + gy)` paint order.
pub(crate) fn sync_world_sprites(
    mut query: Query<(&GridPosition, &DepthTier, &mut Transform)>,
) {
    for (pos, tier, mut transform) in &mut query {
        let screen = grid_to_screen(pos.0);
        transform.translation = screen.extend(depth_z(*tier, pos.0));
    }
}
