//! Debug tools for fast iteration (feature `dev-tools`).
//!
//! - `R` regenerates the dungeon with a fresh seed
//! - `F3` toggles a per-frame player position trace
//! - `F4` dumps the layout grid as an ASCII minimap

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::GameConfig;
use crate::dungeon::{
    Dungeon, PLAYER_START, RoomChangedEvent, TransitionCooldown, TransitionEffect,
};
use crate::movement::{GridPosition, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (regenerate_on_key, dump_minimap, toggle_info, trace_player),
            );
    }
}

/// Tears the whole dungeon down and regenerates it in place, exercising
/// the same pipeline as startup. The player entity survives.
fn regenerate_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut dungeon: ResMut<Dungeon>,
    mut fade: ResMut<TransitionEffect>,
    mut cooldown: ResMut<TransitionCooldown>,
    mut player_query: Query<&mut GridPosition, With<Player>>,
    mut room_changed: MessageWriter<RoomChangedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Some(player) = dungeon.player else {
        return;
    };

    let seed: u64 = rand::rng().random();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!("[DEBUG] Regenerating dungeon with seed {}", seed);

    *dungeon = Dungeon::generate(&mut rng, &config, player);
    *fade = TransitionEffect {
        duration: config.fade_duration,
        ..default()
    };
    *cooldown = TransitionCooldown::with_duration(config.door_cooldown);

    if let Ok(mut pos) = player_query.single_mut() {
        pos.0 = PLAYER_START;
    }
    room_changed.write(RoomChangedEvent {
        room_id: dungeon.current_room_id,
    });
}

/// Prints the layout grid as ASCII, current room marked with `@`.
fn dump_minimap(keyboard: Res<ButtonInput<KeyCode>>, dungeon: Res<Dungeon>) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }
    for row in &dungeon.grid {
        let line: String = row
            .iter()
            .map(|&id| {
                if id == 0 {
                    '.'
                } else if id == dungeon.current_room_id {
                    '@'
                } else {
                    '#'
                }
            })
            .collect();
        info!("[DEBUG] {}", line);
    }
}

fn toggle_info(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.show_info = !state.show_info;
        info!("[DEBUG] Position trace {}", if state.show_info { "on" } else { "off" });
    }
}

fn trace_player(
    state: Res<DebugState>,
    dungeon: Res<Dungeon>,
    player_query: Query<&GridPosition, With<Player>>,
) {
    if !state.show_info {
        return;
    }
    if let Ok(pos) = player_query.single() {
        debug!(
            "[DEBUG] room {} player ({:.2}, {:.2})",
            dungeon.current_room_id, pos.0.x, pos.0.y
        );
    }
}
