//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Maps the four visual directions onto the grid axes of the isometric
/// diamond. Up to two held keys combine into one of 8 directions.
pub(crate) fn direction_for(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if up {
        // Visual up walks toward the far corner.
        dir += Vec2::new(-1.0, -1.0);
    }
    if down {
        dir += Vec2::new(1.0, 1.0);
    }
    if left {
        dir += Vec2::new(-1.0, 1.0);
    }
    if right {
        dir += Vec2::new(1.0, -1.0);
    }
    dir
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW);
    let down = keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS);
    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);

    input.direction = direction_for(up, down, left, right);
}
