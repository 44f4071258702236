//! Layout domain: room placement on a grid and door derivation.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::layout::Direction;

/// Room identifier assigned in placement order; 0 marks an empty grid cell.
pub type RoomId = u32;

/// Base chance that an eligible empty cell receives a room in a pass.
const BASE_PLACE_CHANCE: f32 = 0.1;
/// Raised chance when the cell extends a straight run of two rooms,
/// biasing growth toward corridors over blobs.
const CORRIDOR_PLACE_CHANCE: f32 = 0.7;

/// A door the generator planned for a room, pointing at the neighbor it
/// connects to. Every planned door has a reciprocal entry in the
/// neighboring room's plan at the opposite slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedDoor {
    pub slot: Direction,
    pub connects_to: RoomId,
}

#[derive(Debug, Clone)]
pub struct RoomPlan {
    pub id: RoomId,
    pub doors: Vec<PlannedDoor>,
}

/// Generator output: per-room plans sorted by id, plus the raw id grid
/// (kept around for the minimap).
#[derive(Debug, Clone)]
pub struct DungeonLayout {
    pub rooms: Vec<RoomPlan>,
    pub grid: Vec<Vec<RoomId>>,
}

/// Grow a connected set of rooms on a `rows` x `cols` grid, starting from
/// a seed room at the center, until `target_rooms` are placed or no
/// eligible cell remains. A shortfall is accepted, not an error: every
/// room that was placed is still reachable from the seed because cells
/// are only ever placed adjacent to an existing room.
pub fn generate_layout(
    rng: &mut impl Rng,
    target_rooms: usize,
    rows: usize,
    cols: usize,
) -> DungeonLayout {
    let mut grid = vec![vec![0 as RoomId; cols]; rows];
    let mut next_id: RoomId = 1;
    let mut room_count = 0usize;

    // Seed room at grid center.
    grid[rows / 2][cols / 2] = next_id;
    next_id += 1;
    room_count += 1;

    let mut all_coords: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .collect();

    while room_count < target_rooms {
        let mut added_this_pass = false;
        let mut candidates: Vec<(usize, usize)> = Vec::new();

        // Shuffled iteration order avoids directional bias.
        all_coords.shuffle(rng);
        for &(r, c) in all_coords.iter() {
            if grid[r][c] != 0 || !has_room_neighbor(&grid, r, c) {
                continue;
            }
            candidates.push((r, c));

            let probability = if extends_corridor(&grid, r, c) {
                CORRIDOR_PLACE_CHANCE
            } else {
                BASE_PLACE_CHANCE
            };

            if rng.random::<f32>() < probability {
                grid[r][c] = next_id;
                next_id += 1;
                room_count += 1;
                added_this_pass = true;
                if room_count >= target_rooms {
                    break;
                }
            }
        }

        // A dry pass with eligible cells left would otherwise stall the
        // loop; force one placement to guarantee progress.
        if !added_this_pass && !candidates.is_empty() {
            let (r, c) = candidates[rng.random_range(0..candidates.len())];
            grid[r][c] = next_id;
            next_id += 1;
            room_count += 1;
            added_this_pass = true;
        }

        if !added_this_pass {
            info!(
                "[LAYOUT] Grid exhausted at {}/{} rooms; accepting shortfall",
                room_count, target_rooms
            );
            break;
        }
    }

    let mut rooms: Vec<RoomPlan> = Vec::with_capacity(room_count);
    for r in 0..rows {
        for c in 0..cols {
            if grid[r][c] == 0 {
                continue;
            }
            rooms.push(RoomPlan {
                id: grid[r][c],
                doors: derive_doors(&grid, r, c),
            });
        }
    }
    rooms.sort_by_key(|room| room.id);

    DungeonLayout { rooms, grid }
}

fn has_room_neighbor(grid: &[Vec<RoomId>], r: usize, c: usize) -> bool {
    neighbor_cells(grid, r, c)
        .into_iter()
        .any(|cell| matches!(cell, Some((_, id)) if id != 0))
}

/// True when the cell has two consecutive placed rooms along a single
/// cardinal axis, i.e. placing here would extend a straight corridor.
fn extends_corridor(grid: &[Vec<RoomId>], r: usize, c: usize) -> bool {
    let rows = grid.len();
    let cols = grid[0].len();

    (c >= 2 && grid[r][c - 1] != 0 && grid[r][c - 2] != 0)
        || (c + 2 < cols && grid[r][c + 1] != 0 && grid[r][c + 2] != 0)
        || (r >= 2 && grid[r - 1][c] != 0 && grid[r - 2][c] != 0)
        || (r + 2 < rows && grid[r + 1][c] != 0 && grid[r + 2][c] != 0)
}

/// A door exists toward every populated cardinal neighbor in the final
/// grid, so connectivity of the placement implies connectivity of the
/// door graph.
fn derive_doors(grid: &[Vec<RoomId>], r: usize, c: usize) -> Vec<PlannedDoor> {
    neighbor_cells(grid, r, c)
        .into_iter()
        .flatten()
        .filter(|&(_, id)| id != 0)
        .map(|(slot, id)| PlannedDoor {
            slot,
            connects_to: id,
        })
        .collect()
}

fn neighbor_cells(
    grid: &[Vec<RoomId>],
    r: usize,
    c: usize,
) -> [Option<(Direction, RoomId)>; 4] {
    let rows = grid.len();
    let cols = grid[0].len();

    [
        (r > 0).then(|| (Direction::Up, grid[r - 1][c])),
        (c > 0).then(|| (Direction::Left, grid[r][c - 1])),
        (c + 1 < cols).then(|| (Direction::Right, grid[r][c + 1])),
        (r + 1 < rows).then(|| (Direction::Down, grid[r + 1][c])),
    ]
}
