//! Dungeon domain: room registry, door wiring, and transitions.

mod data;
mod events;
mod factory;
mod registry;
mod spawn;
mod systems;
mod transition;


pub use data::{Door, DoorLink, Obstacle, ROOM_SIZE, Room, TileSurface};
pub use events::{DoorEnteredEvent, RoomChangedEvent};
pub use factory::build_room;
pub use registry::{Dungeon, PLAYER_START, RoomEntry};
pub use transition::{
    PendingSwap, SUSPEND_ALPHA, TransitionCooldown, TransitionEffect, gameplay_running,
};

use bevy::prelude::*;

use crate::dungeon::spawn::{respawn_room_visuals, spawn_fade_overlay, sync_fade_overlay};
use crate::dungeon::systems::{
    begin_transition, configure_transition, detect_door_entry, setup_dungeon, tick_transition,
    tick_transition_cooldown,
};
use crate::movement::apply_step;
use crate::sprites::load_manifest;

pub struct DungeonPlugin;

impl Plugin for DungeonPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransitionEffect>()
            .init_resource::<TransitionCooldown>()
            .add_message::<DoorEnteredEvent>()
            .add_message::<RoomChangedEvent>()
            .add_systems(Startup, (configure_transition, spawn_fade_overlay))
            .add_systems(Startup, setup_dungeon.after(load_manifest))
            .add_systems(Update, tick_transition_cooldown)
            .add_systems(
                Update,
                detect_door_entry.after(apply_step).run_if(gameplay_running),
            )
            .add_systems(
                Update,
                (begin_transition, tick_transition, respawn_room_visuals)
                    .chain()
                    .after(detect_door_entry),
            )
            .add_systems(Update, sync_fade_overlay.after(tick_transition));
    }
}
