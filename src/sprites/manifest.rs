//! Sprites domain: logical texture keys resolved to image handles.

use bevy::prelude::*;
use std::collections::HashMap;

/// Every logical key the game references. Tile keys follow the surface
/// generator; door keys follow door slots.
const TEXTURE_KEYS: &[&str] = &[
    "grass1",
    "grass2",
    "grass3",
    "edge_left",
    "edge_right",
    "edge_top_left",
    "edge_top_right",
    "edge_center",
    "door_up",
    "door_down",
    "door_left",
    "door_right",
    "rock1",
    "rock2",
    "player",
];

/// Maps logical sprite keys to loaded image handles. The rest of the
/// game never touches asset paths.
#[derive(Resource, Debug, Default)]
pub struct SpriteManifest {
    textures: HashMap<String, Handle<Image>>,
}

impl SpriteManifest {
    pub fn get_texture(&self, key: &str) -> Option<Handle<Image>> {
        self.textures.get(key).cloned()
    }

    pub fn insert(&mut self, key: impl Into<String>, handle: Handle<Image>) {
        self.textures.insert(key.into(), handle);
    }
}

pub(crate) fn load_manifest(mut manifest: ResMut<SpriteManifest>, assets: Res<AssetServer>) {
    for key in TEXTURE_KEYS {
        manifest.insert(*key, assets.load(format!("textures/{key}.png")));
    }
    info!("[SPRITES] Manifest loaded with {} textures", TEXTURE_KEYS.len());
}
