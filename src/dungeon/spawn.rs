//! Dungeon domain: presentation of the current room and the fade overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::dungeon::events::RoomChangedEvent;
use crate::dungeon::registry::Dungeon;
use crate::dungeon::transition::TransitionEffect;
use crate::movement::GridPosition;
use crate::sprites::{DepthTier, SpriteManifest, TILE_HEIGHT, TILE_WIDTH};

/// Marker for every visual belonging to the current room; all of them
/// are torn down together on a room change.
#[derive(Component, Debug)]
pub struct RoomView;

/// Marker for the full-screen fade node.
#[derive(Component, Debug)]
pub struct FadeOverlay;

/// Rebuilds the room's tile, door, and obstacle sprites whenever the
/// current room changes. The player entity persists; only room-scoped
/// visuals are replaced.
pub(crate) fn respawn_room_visuals(
    mut commands: Commands,
    mut room_changed: MessageReader<RoomChangedEvent>,
    dungeon: Res<Dungeon>,
    manifest: Res<SpriteManifest>,
    views: Query<Entity, With<RoomView>>,
) {
    let Some(event) = room_changed.read().last() else {
        return;
    };

    for entity in &views {
        commands.entity(entity).despawn();
    }

    let Some(room) = dungeon.rooms.get(&event.room_id) else {
        warn!(
            "[DUNGEON] Room change to unknown room {}, nothing to present",
            event.room_id
        );
        return;
    };

    for (y, row) in room.surface.tiles.iter().enumerate() {
        for (x, key) in row.iter().enumerate() {
            commands.spawn((
                RoomView,
                GridPosition::new(x as f32, y as f32),
                DepthTier::Floor,
                Sprite {
                    image: manifest.get_texture(key).unwrap_or_default(),
                    custom_size: Some(Vec2::new(TILE_WIDTH, TILE_HEIGHT)),
                    ..default()
                },
                Transform::default(),
            ));
        }
    }

    for door in &room.doors {
        commands.spawn((
            RoomView,
            GridPosition(door.grid_pos),
            door.depth_tier(),
            Sprite {
                image: manifest.get_texture(door.texture_key()).unwrap_or_default(),
                custom_size: Some(Vec2::splat(64.0)),
                ..default()
            },
            Transform::default(),
        ));
    }

    for obstacle in &room.obstacles {
        commands.spawn((
            RoomView,
            GridPosition(obstacle.grid_pos),
            DepthTier::Normal,
            Sprite {
                image: manifest
                    .get_texture(obstacle.texture_key)
                    .unwrap_or_default(),
                custom_size: Some(Vec2::splat(32.0)),
                ..default()
            },
            Transform::default(),
        ));
    }
}

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        GlobalZIndex(100),
    ));
}

/// Mirrors the transition alpha onto the overlay node, composited above
/// the world.
pub(crate) fn sync_fade_overlay(
    fade: Res<TransitionEffect>,
    mut overlay: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    for mut background in &mut overlay {
        background.0 = Color::srgba(0.0, 0.0, 0.0, fade.alpha);
    }
}
