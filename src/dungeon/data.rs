//! Dungeon domain: room, door, and obstacle data.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::layout::{Direction, RoomId};
use crate::movement::{Aabb, MapBounds};
use crate::sprites::DepthTier;

/// Interior tile span of every room, both axes.
pub const ROOM_SIZE: usize = 19;

const GRASS_KEYS: [&str; 3] = ["grass1", "grass2", "grass3"];
pub(crate) const ROCK_KEYS: [&str; 2] = ["rock1", "rock2"];

/// Where the reciprocal of a wired door lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorLink {
    pub target_room: RoomId,
    pub target_slot: Direction,
}

/// A doorway at the midpoint of one room edge. Built by the room
/// factory; its `link` is set once by the wiring pass and never again.
#[derive(Debug, Clone)]
pub struct Door {
    pub grid_pos: Vec2,
    pub slot: Direction,
    pub room_id: RoomId,
    pub link: Option<DoorLink>,
}

impl Door {
    pub fn new(slot: Direction, room_id: RoomId) -> Self {
        Self {
            grid_pos: Self::slot_coords(slot),
            slot,
            room_id,
            link: None,
        }
    }

    /// Fixed grid coordinate of each door slot on a 19x19 surface.
    pub fn slot_coords(slot: Direction) -> Vec2 {
        match slot {
            Direction::Up => Vec2::new(9.0, 0.0),
            Direction::Left => Vec2::new(0.0, 9.0),
            Direction::Right => Vec2::new(18.0, 9.0),
            Direction::Down => Vec2::new(9.0, 18.0),
        }
    }

    /// Where a player entering through this door lands: pushed past the
    /// doorway into the room so the door does not immediately re-trigger.
    pub fn spawn_position(&self) -> Vec2 {
        let offset = match self.slot {
            Direction::Up => Vec2::new(0.5, 1.5),
            Direction::Left => Vec2::new(1.5, 0.0),
            Direction::Right => Vec2::new(-1.5, 0.0),
            Direction::Down => Vec2::new(0.5, -1.5),
        };
        self.grid_pos + offset
    }

    pub fn texture_key(&self) -> &'static str {
        match self.slot {
            Direction::Up => "door_up",
            Direction::Down => "door_down",
            Direction::Left => "door_left",
            Direction::Right => "door_right",
        }
    }

    /// Far-edge doors sit behind everything in the room, near-edge doors
    /// in front, regardless of their depth coordinate.
    pub fn depth_tier(&self) -> DepthTier {
        match self.slot {
            Direction::Up | Direction::Left => DepthTier::Bottom,
            Direction::Down | Direction::Right => DepthTier::Top,
        }
    }
}

/// A static blocker the movement resolver tests against.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub grid_pos: Vec2,
    pub texture_key: &'static str,
}

impl Obstacle {
    pub fn new(rng: &mut impl Rng, grid_pos: Vec2) -> Self {
        Self {
            grid_pos,
            texture_key: ROCK_KEYS.choose(rng).copied().unwrap_or(ROCK_KEYS[0]),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.grid_pos.x, self.grid_pos.y, 0.5, 0.5)
    }
}

/// Logical tile keys for one room floor. Rendering resolves the keys
/// through the sprite manifest.
#[derive(Debug, Clone)]
pub struct TileSurface {
    pub tiles: Vec<Vec<&'static str>>,
}

impl TileSurface {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut tiles = Vec::with_capacity(ROOM_SIZE);
        for y in 0..ROOM_SIZE {
            let mut row = Vec::with_capacity(ROOM_SIZE);
            for x in 0..ROOM_SIZE {
                row.push(Self::tile_key(rng, x, y));
            }
            tiles.push(row);
        }
        Self { tiles }
    }

    /// Edge and corner tiles take fixed keys; the interior gets a random
    /// grass variant.
    fn tile_key(rng: &mut impl Rng, x: usize, y: usize) -> &'static str {
        let last = ROOM_SIZE - 1;
        if y == last && x == 0 {
            "edge_top_left"
        } else if y == 0 && x == last {
            "edge_top_right"
        } else if y == last && x == last {
            "edge_center"
        } else if y == last {
            "edge_left"
        } else if x == last {
            "edge_right"
        } else {
            GRASS_KEYS.choose(rng).copied().unwrap_or(GRASS_KEYS[0])
        }
    }

    pub fn bounds(&self) -> MapBounds {
        MapBounds {
            width: self.tiles.first().map(|row| row.len()).unwrap_or(0) as f32,
            height: self.tiles.len() as f32,
        }
    }
}

/// One generated room. Doors and obstacles are fixed at build time; only
/// `occupants` (the player, while this room is current) changes.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub surface: TileSurface,
    pub doors: Vec<Door>,
    pub obstacles: Vec<Obstacle>,
    pub occupants: Vec<Entity>,
}

impl Room {
    pub fn door_at(&self, slot: Direction) -> Option<&Door> {
        self.doors.iter().find(|door| door.slot == slot)
    }
}
