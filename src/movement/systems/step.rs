//! Movement domain: the per-tick step application system.

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::dungeon::Dungeon;
use crate::movement::resolver::{Aabb, resolve_step};
use crate::movement::{GridPosition, MovementInput, MovementTuning, Player, StepTimer};

pub(crate) fn configure_tuning(config: Res<GameConfig>, mut tuning: ResMut<MovementTuning>) {
    tuning.step_size = config.movement.step_size;
    tuning.step_cooldown = config.movement.step_cooldown;
    tuning.slide_factor = config.movement.slide_factor;
}

/// Moves the player by one resolved step, at most once per cooldown
/// window. Obstacles and bounds come from the current room; the room's
/// own lists are never mutated here.
pub(crate) fn apply_step(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut step_timer: ResMut<StepTimer>,
    dungeon: Res<Dungeon>,
    mut query: Query<&mut GridPosition, With<Player>>,
) {
    if input.direction == Vec2::ZERO {
        return;
    }

    let now = time.elapsed_secs();
    if now - step_timer.last_step_secs < tuning.step_cooldown {
        return;
    }

    let Ok(mut pos) = query.single_mut() else {
        return;
    };
    let Some(room) = dungeon.current_room() else {
        return;
    };

    let obstacles: Vec<Aabb> = room.obstacles.iter().map(|o| o.bounds()).collect();
    pos.0 = resolve_step(
        pos.0,
        input.direction,
        tuning.step_size,
        tuning.slide_factor,
        &obstacles,
        room.surface.bounds(),
    );
    step_timer.last_step_secs = now;
}
