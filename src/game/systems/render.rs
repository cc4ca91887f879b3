//! Map rendering system.
//!
//! This module renders the grid as text for the terminal.

use crate::game::state::GameState;
use crate::game::types::CharacterKind;

/// Render the grid, one line per row, one symbol per cell.
///
/// Symbol priority per cell: `P` for the player, then `E` for the exit
/// (only when `reveal_exit` is set), then `N`/`H` for an occupying guide
/// or hazard, then `.` for an empty room.
pub fn render_map(state: &GameState, reveal_exit: bool) -> String {
    state
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|room| {
                    if room.coords() == state.player {
                        "P"
                    } else if room.coords() == state.exit && reveal_exit {
                        "E"
                    } else {
                        match &room.character {
                            Some(ch) if ch.kind == CharacterKind::Guide => "N",
                            Some(_) => "H",
                            None => ".",
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
