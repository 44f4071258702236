//! Layout domain: tests for grid growth, door derivation, and connectivity.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{Direction, DungeonLayout, RoomId, generate_layout};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn reachable_from_seed(layout: &DungeonLayout) -> HashSet<RoomId> {
    let by_id: HashMap<RoomId, &super::RoomPlan> =
        layout.rooms.iter().map(|room| (room.id, room)).collect();

    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([1 as RoomId]);
    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        if let Some(room) = by_id.get(&id) {
            for door in &room.doors {
                queue.push_back(door.connects_to);
            }
        }
    }
    visited
}

// -----------------------------------------------------------------------------
// Direction tests
// -----------------------------------------------------------------------------

#[test]
fn test_opposite_direction() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}

#[test]
fn test_opposite_direction_is_symmetric() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

// -----------------------------------------------------------------------------
// Placement tests
// -----------------------------------------------------------------------------

#[test]
fn test_seed_room_always_present() {
    for seed in 0..30 {
        let layout = generate_layout(&mut rng(seed), 10, 9, 9);
        assert!(
            layout.rooms.iter().any(|room| room.id == 1),
            "seed room missing for rng seed {}",
            seed
        );
        assert_eq!(layout.grid[4][4], 1, "seed room not at grid center");
    }
}

#[test]
fn test_room_count_within_request() {
    for seed in 0..30 {
        let layout = generate_layout(&mut rng(seed), 10, 9, 9);
        // The seed always gains at least one neighbor: a dry pass
        // force-places a room while eligible cells remain.
        assert!(
            (2..=10).contains(&layout.rooms.len()),
            "placed {} rooms, requested 10",
            layout.rooms.len()
        );
    }
}

#[test]
fn test_ids_sequential_and_sorted() {
    let layout = generate_layout(&mut rng(7), 10, 9, 9);
    let ids: Vec<RoomId> = layout.rooms.iter().map(|room| room.id).collect();
    let expected: Vec<RoomId> = (1..=layout.rooms.len() as RoomId).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_grid_matches_room_list() {
    let layout = generate_layout(&mut rng(11), 10, 9, 9);
    let grid_ids: HashSet<RoomId> = layout
        .grid
        .iter()
        .flatten()
        .copied()
        .filter(|&id| id != 0)
        .collect();
    let room_ids: HashSet<RoomId> = layout.rooms.iter().map(|room| room.id).collect();
    assert_eq!(grid_ids, room_ids);
}

// -----------------------------------------------------------------------------
// Connectivity tests
// -----------------------------------------------------------------------------

#[test]
fn test_every_room_reachable_from_seed() {
    for seed in 0..30 {
        let layout = generate_layout(&mut rng(seed), 10, 9, 9);
        let reachable = reachable_from_seed(&layout);
        for room in &layout.rooms {
            assert!(
                reachable.contains(&room.id),
                "room {} unreachable for rng seed {}",
                room.id,
                seed
            );
        }
    }
}

#[test]
fn test_early_termination_on_full_grid() {
    // A 3x3 grid cannot hold 100 rooms; the generator must stop without
    // stalling and still produce a connected set.
    let layout = generate_layout(&mut rng(3), 100, 3, 3);
    assert!(layout.rooms.len() <= 9);
    let reachable = reachable_from_seed(&layout);
    assert_eq!(reachable.len(), layout.rooms.len());
}

// -----------------------------------------------------------------------------
// Door derivation tests
// -----------------------------------------------------------------------------

#[test]
fn test_doors_match_grid_adjacency() {
    let layout = generate_layout(&mut rng(5), 10, 9, 9);
    let rows = layout.grid.len();
    let cols = layout.grid[0].len();

    for r in 0..rows {
        for c in 0..cols {
            let id = layout.grid[r][c];
            if id == 0 {
                continue;
            }
            let plan = layout.rooms.iter().find(|room| room.id == id).unwrap();
            let expectations = [
                (Direction::Up, r.checked_sub(1).map(|nr| (nr, c))),
                (Direction::Left, c.checked_sub(1).map(|nc| (r, nc))),
                (Direction::Right, (c + 1 < cols).then_some((r, c + 1))),
                (Direction::Down, (r + 1 < rows).then_some((r + 1, c))),
            ];
            for (slot, neighbor) in expectations {
                let neighbor_id = neighbor.map(|(nr, nc)| layout.grid[nr][nc]).unwrap_or(0);
                let door = plan.doors.iter().find(|door| door.slot == slot);
                if neighbor_id != 0 {
                    let door = door.unwrap_or_else(|| {
                        panic!("room {} missing {:?} door toward {}", id, slot, neighbor_id)
                    });
                    assert_eq!(door.connects_to, neighbor_id);
                } else {
                    assert!(door.is_none(), "room {} has {:?} door into nothing", id, slot);
                }
            }
        }
    }
}

#[test]
fn test_planned_doors_are_reciprocal() {
    for seed in 0..20 {
        let layout = generate_layout(&mut rng(seed), 10, 9, 9);
        for room in &layout.rooms {
            for door in &room.doors {
                let neighbor = layout
                    .rooms
                    .iter()
                    .find(|other| other.id == door.connects_to)
                    .expect("door targets a room that was not planned");
                assert!(
                    neighbor
                        .doors
                        .iter()
                        .any(|back| back.slot == door.slot.opposite()
                            && back.connects_to == room.id),
                    "no reciprocal for room {} {:?} door",
                    room.id,
                    door.slot
                );
            }
        }
    }
}
