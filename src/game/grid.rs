//! Grid construction and placement.
//!
//! This module builds the room grid, picks the exit on the perimeter, and
//! scatters the characters over the remaining cells.

use log::warn;
use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

use crate::config::game::{GUIDE_NAMES, HAZARD_NAMES};
use crate::game::types::{Character, CharacterKind, Position, Room};

/// Build a square grid of empty rooms, indexed as `grid[y][x]`.
pub fn generate_grid(size: usize) -> Vec<Vec<Room>> {
    (0..size)
        .map(|y| (0..size).map(|x| Room::new(x, y)).collect())
        .collect()
}

/// Pick the exit uniformly at random from the perimeter cells, excluding
/// the player start. Returns `None` when that set is empty (size < 2).
pub fn place_exit(size: usize, start: Position, rng: &mut impl Rng) -> Option<Position> {
    (0..size)
        .flat_map(|y| (0..size).map(move |x| Position { x, y }))
        .filter(|pos| pos.x == 0 || pos.y == 0 || pos.x == size - 1 || pos.y == size - 1)
        .filter(|pos| *pos != start)
        .choose(rng)
}

/// Scatter the guide and hazard rosters over the free cells.
///
/// Every cell except the start and the exit is a candidate. Candidates are
/// shuffled and consumed one per character; placement stops early if the
/// grid runs out of free cells. Each guide carries a compass hint computed
/// from its own cell toward the exit.
pub fn place_characters(
    grid: &mut [Vec<Room>],
    size: usize,
    start: Position,
    exit: Position,
    rng: &mut impl Rng,
) {
    let mut positions: Vec<Position> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Position { x, y }))
        .filter(|pos| *pos != start && *pos != exit)
        .collect();
    positions.shuffle(rng);

    for name in GUIDE_NAMES {
        let Some(pos) = positions.pop() else {
            warn!("no free cell left for guide {}", name);
            break;
        };
        let hint = direction_hint(pos, exit);
        let msg = format!("Petunjuk: arah keluar kira-kira ke {}.", hint);
        grid[pos.y][pos.x].character = Some(Character::new(name, CharacterKind::Guide, msg));
    }

    for name in HAZARD_NAMES {
        let Some(pos) = positions.pop() else {
            warn!("no free cell left for hazard {}", name);
            break;
        };
        let msg = "Sebuah hawa dingin menyentuhmu...".to_owned();
        grid[pos.y][pos.x].character = Some(Character::new(name, CharacterKind::Hazard, msg));
    }
}

/// Coarse compass hint from one cell toward another.
///
/// Combines a vertical term and a horizontal term derived from the signed
/// coordinate deltas; falls back to "di sekitar sini" when both deltas are
/// zero. This is an 8-direction hint, not a distance or a path.
pub fn direction_hint(from: Position, to: Position) -> String {
    let dx = to.x as isize - from.x as isize;
    let dy = to.y as isize - from.y as isize;

    let mut parts = Vec::new();
    if dy < 0 {
        parts.push("utara");
    } else if dy > 0 {
        parts.push("selatan");
    }
    if dx < 0 {
        parts.push("barat");
    } else if dx > 0 {
        parts.push("timur");
    }

    if parts.is_empty() {
        "di sekitar sini".to_owned()
    } else {
        parts.join(" ")
    }
}

/// Whether signed coordinates fall inside the grid.
pub fn in_bounds(size: usize, x: isize, y: isize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_grid_generation_size() {
        let grid = generate_grid(4);
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_grid_rooms_start_empty_with_own_coords() {
        let grid = generate_grid(3);
        for (y, row) in grid.iter().enumerate() {
            for (x, room) in row.iter().enumerate() {
                assert_eq!(room.coords(), Position { x, y });
                assert!(room.character.is_none());
            }
        }
    }

    #[test]
    fn test_exit_on_perimeter_never_on_start() {
        let start = Position { x: 1, y: 1 };
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let exit = place_exit(3, start, &mut rng).expect("size 3 has perimeter cells");
            assert!(exit.x == 0 || exit.y == 0 || exit.x == 2 || exit.y == 2);
            assert_ne!(exit, start);
        }
    }

    #[test]
    fn test_exit_excludes_start_on_perimeter() {
        // On a 2x2 grid every cell is perimeter, including the start.
        let start = Position { x: 1, y: 1 };
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let exit = place_exit(2, start, &mut rng).expect("three candidates remain");
            assert_ne!(exit, start);
        }
    }

    #[test]
    fn test_place_exit_fails_on_degenerate_grid() {
        let start = Position { x: 0, y: 0 };
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(place_exit(1, start, &mut rng), None);
    }

    #[test]
    fn test_characters_avoid_start_and_exit() {
        let start = Position { x: 1, y: 1 };
        let exit = Position { x: 0, y: 0 };
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = generate_grid(3);
        place_characters(&mut grid, 3, start, exit, &mut rng);

        assert!(grid[start.y][start.x].character.is_none());
        assert!(grid[exit.y][exit.x].character.is_none());

        let placed = grid
            .iter()
            .flatten()
            .filter(|room| room.character.is_some())
            .count();
        assert_eq!(placed, GUIDE_NAMES.len() + HAZARD_NAMES.len());
    }

    #[test]
    fn test_guides_carry_hint_toward_exit() {
        let start = Position { x: 1, y: 1 };
        let exit = Position { x: 0, y: 0 };
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = generate_grid(3);
        place_characters(&mut grid, 3, start, exit, &mut rng);

        for room in grid.iter().flatten() {
            if let Some(ch) = &room.character {
                match ch.kind {
                    CharacterKind::Guide => {
                        let hint = direction_hint(room.coords(), exit);
                        assert_eq!(
                            ch.message,
                            format!("Petunjuk: arah keluar kira-kira ke {}.", hint)
                        );
                    }
                    CharacterKind::Hazard => {
                        assert_eq!(ch.message, "Sebuah hawa dingin menyentuhmu...");
                    }
                }
            }
        }
    }

    #[test]
    fn test_placement_stops_when_grid_is_full() {
        // A 2x2 grid has two free cells for five characters.
        let start = Position { x: 1, y: 1 };
        let exit = Position { x: 0, y: 0 };
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = generate_grid(2);
        place_characters(&mut grid, 2, start, exit, &mut rng);

        let placed = grid
            .iter()
            .flatten()
            .filter(|room| room.character.is_some())
            .count();
        assert_eq!(placed, 2);
    }

    #[test]
    fn test_direction_hint_diagonal() {
        let hint = direction_hint(Position { x: 1, y: 1 }, Position { x: 0, y: 0 });
        assert_eq!(hint, "utara barat");
    }

    #[test]
    fn test_direction_hint_single_axis() {
        assert_eq!(
            direction_hint(Position { x: 1, y: 1 }, Position { x: 1, y: 2 }),
            "selatan"
        );
        assert_eq!(
            direction_hint(Position { x: 0, y: 1 }, Position { x: 2, y: 1 }),
            "timur"
        );
    }

    #[test]
    fn test_direction_hint_fallback() {
        let here = Position { x: 1, y: 1 };
        assert_eq!(direction_hint(here, here), "di sekitar sini");
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(3, 0, 0));
        assert!(in_bounds(3, 2, 2));
        assert!(!in_bounds(3, -1, 0));
        assert!(!in_bounds(3, 0, 3));
    }
}
