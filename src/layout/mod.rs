//! Layout domain: procedural dungeon grid generation.

mod generator;

#[cfg(test)]
mod tests;

pub use generator::{DungeonLayout, PlannedDoor, RoomId, RoomPlan, generate_layout};

/// Cardinal axes of the isometric diamond. `Up` points toward the far
/// corner of the room, not screen-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The slot a reciprocal door occupies in the neighboring room.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
