//! Dungeon domain: events for door entry and room changes.

use bevy::ecs::message::Message;

use crate::layout::{Direction, RoomId};

/// The player crossed into a wired door's trigger region.
#[derive(Debug)]
pub struct DoorEnteredEvent {
    pub target_room: RoomId,
    pub target_slot: Direction,
}

impl Message for DoorEnteredEvent {}

/// The current room changed; visuals and observers resync from the
/// registry. Fired for the initial room as well.
#[derive(Debug)]
pub struct RoomChangedEvent {
    pub room_id: RoomId,
}

impl Message for RoomChangedEvent {}
