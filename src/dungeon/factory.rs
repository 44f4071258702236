//! Dungeon domain: builds a single room from its planned door slots.

use bevy::prelude::*;
use rand::Rng;

use crate::dungeon::data::{Door, Obstacle, Room, TileSurface};
use crate::layout::{Direction, RoomId};

/// Keep-out radius (per axis) around the room center and every door when
/// scattering obstacles, so the spawn point and doorways stay clear.
const KEEP_OUT: f32 = 3.0;
const ROOM_CENTER: Vec2 = Vec2::new(9.0, 9.0);
/// Obstacle candidates are drawn from the inner tile band.
const SCATTER_MIN: u32 = 2;
const SCATTER_MAX: u32 = 18;
const MAX_SCATTER_ATTEMPTS: usize = 100;

/// Assemble a room: tile surface, one door per requested slot at its
/// fixed coordinate, and 0-2 scattered obstacles. The caller registers
/// the room; nothing here touches shared state.
pub fn build_room(rng: &mut impl Rng, id: RoomId, door_slots: &[Direction]) -> Room {
    let surface = TileSurface::generate(rng);
    let doors: Vec<Door> = door_slots.iter().map(|&slot| Door::new(slot, id)).collect();
    let obstacles = scatter_obstacles(rng, &doors);

    Room {
        id,
        surface,
        doors,
        obstacles,
        occupants: Vec::new(),
    }
}

fn scatter_obstacles(rng: &mut impl Rng, doors: &[Door]) -> Vec<Obstacle> {
    let count = rng.random_range(0..3);
    let mut obstacles = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(pos) = pick_clear_cell(rng, doors) else {
            // Statistically unreachable on a 19x19 surface; dropping the
            // obstacle beats spinning forever.
            warn!("[DUNGEON] No clear cell found for obstacle, skipping");
            continue;
        };
        obstacles.push(Obstacle::new(rng, pos));
    }

    obstacles
}

fn pick_clear_cell(rng: &mut impl Rng, doors: &[Door]) -> Option<Vec2> {
    for _ in 0..MAX_SCATTER_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(SCATTER_MIN..=SCATTER_MAX) as f32,
            rng.random_range(SCATTER_MIN..=SCATTER_MAX) as f32,
        );

        let near_center = too_close(candidate, ROOM_CENTER);
        let near_door = doors.iter().any(|door| too_close(candidate, door.grid_pos));
        if !near_center && !near_door {
            return Some(candidate);
        }
    }
    None
}

fn too_close(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < KEEP_OUT && (a.y - b.y).abs() < KEEP_OUT
}
