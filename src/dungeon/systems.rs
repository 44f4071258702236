//! Dungeon domain: generation bootstrap, door triggering, and the
//! transition tick.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::GameConfig;
use crate::dungeon::events::{DoorEnteredEvent, RoomChangedEvent};
use crate::dungeon::registry::{Dungeon, PLAYER_START};
use crate::dungeon::transition::{PendingSwap, TransitionCooldown, TransitionEffect};
use crate::movement::{GridPosition, Player};
use crate::sprites::{DepthTier, SpriteManifest};

/// Per-axis distance at which a door counts as entered. Deliberately a
/// different test than the obstacle overlap check: doors trigger from a
/// more forgiving region than walls block.
const DOOR_TRIGGER_RANGE: f32 = 0.8;

pub(crate) fn configure_transition(
    config: Res<GameConfig>,
    mut fade: ResMut<TransitionEffect>,
    mut cooldown: ResMut<TransitionCooldown>,
) {
    fade.duration = config.fade_duration;
    *cooldown = TransitionCooldown::with_duration(config.door_cooldown);
}

/// Spawns the player and generates the dungeon it starts in. Runs once
/// at startup; the debug tools regenerate through the same registry path.
pub(crate) fn setup_dungeon(
    mut commands: Commands,
    config: Res<GameConfig>,
    manifest: Res<SpriteManifest>,
    mut room_changed: MessageWriter<RoomChangedEvent>,
) {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!("[DUNGEON] Generating dungeon with seed {}", seed);

    let player = commands
        .spawn((
            Player,
            GridPosition(PLAYER_START),
            DepthTier::Normal,
            Sprite {
                image: manifest.get_texture("player").unwrap_or_default(),
                custom_size: Some(Vec2::new(32.0, 48.0)),
                ..default()
            },
            Transform::default(),
        ))
        .id();

    let dungeon = Dungeon::generate(&mut rng, &config, player);
    let room_id = dungeon.current_room_id;
    commands.insert_resource(dungeon);

    room_changed.write(RoomChangedEvent { room_id });
}

pub(crate) fn tick_transition_cooldown(
    mut cooldown: ResMut<TransitionCooldown>,
    time: Res<Time>,
) {
    cooldown.tick(time.delta());
}

/// Emits a door entry whenever the player stands inside a wired door's
/// trigger region. The cooldown gate lives downstream so this check
/// stays a pure proximity test.
pub(crate) fn detect_door_entry(
    dungeon: Res<Dungeon>,
    player_query: Query<&GridPosition, With<Player>>,
    mut entered: MessageWriter<DoorEnteredEvent>,
) {
    let Ok(pos) = player_query.single() else {
        return;
    };
    let Some(room) = dungeon.current_room() else {
        return;
    };

    for door in &room.doors {
        let Some(link) = door.link else {
            continue;
        };
        let dx = (pos.0.x - door.grid_pos.x).abs();
        let dy = (pos.0.y - door.grid_pos.y).abs();
        if dx <= DOOR_TRIGGER_RANGE && dy <= DOOR_TRIGGER_RANGE {
            entered.write(DoorEnteredEvent {
                target_room: link.target_room,
                target_slot: link.target_slot,
            });
        }
    }
}

/// Arms the fade for the first eligible door entry. Entries arriving
/// while a transition is in flight or the cooldown is running are
/// dropped, so one approach produces exactly one room change.
pub(crate) fn begin_transition(
    mut entered: MessageReader<DoorEnteredEvent>,
    mut cooldown: ResMut<TransitionCooldown>,
    mut fade: ResMut<TransitionEffect>,
) {
    for event in entered.read() {
        if fade.active || !cooldown.can_transition() {
            continue;
        }
        info!(
            "[TRANSITION] Door entered, fading toward room {}",
            event.target_room
        );
        cooldown.reset();
        fade.begin(PendingSwap {
            target_room: event.target_room,
            target_slot: event.target_slot,
        });
    }
}

/// Advances the fade and performs the queued room swap at the midpoint,
/// while the overlay has the screen covered.
pub(crate) fn tick_transition(
    time: Res<Time>,
    mut fade: ResMut<TransitionEffect>,
    mut dungeon: ResMut<Dungeon>,
    mut player_query: Query<&mut GridPosition, With<Player>>,
    mut room_changed: MessageWriter<RoomChangedEvent>,
) {
    let Some(swap) = fade.advance(time.delta_secs()) else {
        return;
    };

    let Some(entry) = dungeon.change_room(swap.target_room, swap.target_slot) else {
        return;
    };

    if let Ok(mut pos) = player_query.single_mut() {
        pos.0 = entry.spawn_pos;
    }
    room_changed.write(RoomChangedEvent {
        room_id: entry.room_id,
    });
}
