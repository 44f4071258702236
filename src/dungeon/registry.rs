//! Dungeon domain: the room registry and cross-room operations.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use crate::content::GameConfig;
use crate::dungeon::data::Room;
use crate::dungeon::factory::build_room;
use crate::layout::{Direction, DungeonLayout, RoomId, generate_layout};

/// Grid coordinate the player occupies when a dungeon is first entered.
pub const PLAYER_START: Vec2 = Vec2::new(9.0, 9.0);

/// Result of a completed room change, for the caller to apply to the
/// player entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomEntry {
    pub room_id: RoomId,
    pub spawn_pos: Vec2,
}

/// The whole live dungeon: every generated room keyed by id, the current
/// room pointer, and the player's occupancy. Replaced wholesale when a
/// new dungeon is generated.
#[derive(Resource, Debug, Default)]
pub struct Dungeon {
    pub rooms: HashMap<RoomId, Room>,
    pub current_room_id: RoomId,
    /// Raw id grid from the layout pass, kept for the minimap.
    pub grid: Vec<Vec<RoomId>>,
    pub player: Option<Entity>,
}

impl Dungeon {
    /// Run the full generation pipeline: grid layout, one factory build
    /// per planned room, door wiring, and initial player placement in
    /// the seed room.
    pub fn generate(rng: &mut impl Rng, config: &GameConfig, player: Entity) -> Self {
        let layout = generate_layout(
            rng,
            config.target_rooms,
            config.grid_rows,
            config.grid_cols,
        );

        let mut rooms = HashMap::with_capacity(layout.rooms.len());
        for plan in &layout.rooms {
            let slots: Vec<Direction> = plan.doors.iter().map(|door| door.slot).collect();
            rooms.insert(plan.id, build_room(rng, plan.id, &slots));
        }

        let mut dungeon = Self {
            rooms,
            current_room_id: 1,
            grid: layout.grid.clone(),
            player: Some(player),
        };
        dungeon.wire_doors(&layout);

        if let Some(seed_room) = dungeon.rooms.get_mut(&1) {
            seed_room.occupants.push(player);
        } else {
            warn!("[DUNGEON] Generated layout has no seed room");
        }

        info!(
            "[DUNGEON] Generated {} rooms, entering room 1",
            dungeon.rooms.len()
        );
        dungeon
    }

    /// Point every planned door at its reciprocal: the door sitting at
    /// the opposite slot of the connected room. The layout guarantees a
    /// reciprocal exists; a miss here is an upstream bug and the door is
    /// left unwired rather than panicking.
    fn wire_doors(&mut self, layout: &DungeonLayout) {
        for plan in &layout.rooms {
            for planned in &plan.doors {
                let target_slot = planned.slot.opposite();

                let reciprocal_exists = self
                    .rooms
                    .get(&planned.connects_to)
                    .is_some_and(|room| room.door_at(target_slot).is_some());
                if !reciprocal_exists {
                    warn!(
                        "[DUNGEON] No reciprocal door for room {} {:?}; leaving unwired",
                        plan.id, planned.slot
                    );
                    continue;
                }

                if let Some(door) = self
                    .rooms
                    .get_mut(&plan.id)
                    .and_then(|room| room.doors.iter_mut().find(|d| d.slot == planned.slot))
                {
                    door.link = Some(crate::dungeon::data::DoorLink {
                        target_room: planned.connects_to,
                        target_slot,
                    });
                }
            }
        }
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.current_room_id)
    }

    /// Hand the player from the current room to `target`, entering
    /// through the door at `target_slot`. The remove-insert pair runs
    /// inside this single call, so exactly one room ever holds the
    /// player. Unknown rooms, missing doors, or an unset player are
    /// invariant violations from upstream and degrade to a no-op.
    pub fn change_room(&mut self, target: RoomId, target_slot: Direction) -> Option<RoomEntry> {
        let Some(player) = self.player else {
            warn!("[DUNGEON] change_room with no player set");
            return None;
        };

        let Some(spawn_pos) = self
            .rooms
            .get(&target)
            .and_then(|room| room.door_at(target_slot))
            .map(|door| door.spawn_position())
        else {
            warn!(
                "[DUNGEON] change_room target room {} / slot {:?} not found",
                target, target_slot
            );
            return None;
        };

        if let Some(current) = self.rooms.get_mut(&self.current_room_id) {
            current.occupants.retain(|&occupant| occupant != player);
        }
        self.current_room_id = target;
        if let Some(room) = self.rooms.get_mut(&target) {
            room.occupants.push(player);
        }

        info!("[DUNGEON] Entered room {} via {:?} door", target, target_slot);
        Some(RoomEntry {
            room_id: target,
            spawn_pos,
        })
    }
}
