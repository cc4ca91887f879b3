//! Player movement system.
//!
//! This module resolves direction tokens and moves the player on the grid.

use log::debug;
use rand::Rng;

use crate::game::error::MoveError;
use crate::game::grid::in_bounds;
use crate::game::state::GameState;
use crate::game::systems::encounter::describe_current;
use crate::game::types::{Direction, Position};

/// Move the player one cell in the direction named by `token`.
///
/// The token is matched case-insensitively against the direction table.
/// On success the position and turn counter are updated and the
/// destination cell is resolved; the returned string describes what the
/// player finds there. On failure the state is left untouched.
pub fn move_player(
    state: &mut GameState,
    token: &str,
    rng: &mut impl Rng,
) -> Result<String, MoveError> {
    let direction = Direction::parse(token).ok_or(MoveError::UnknownDirection)?;

    let (dx, dy) = direction.delta();
    let nx = state.player.x as isize + dx;
    let ny = state.player.y as isize + dy;
    if !in_bounds(state.size, nx, ny) {
        return Err(MoveError::OutOfBounds);
    }

    state.player = Position {
        x: nx as usize,
        y: ny as usize,
    };
    state.turn += 1;
    debug!(
        "turn {}: moved {:?} to ({},{})",
        state.turn, direction, state.player.x, state.player.y
    );

    Ok(describe_current(state, rng))
}
