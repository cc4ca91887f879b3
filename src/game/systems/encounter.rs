//! Encounter resolution system.
//!
//! This module describes the player's current cell and applies the effect
//! of any character standing there.

use rand::Rng;

use crate::config::game::{MAX_DAMAGE, MIN_DAMAGE};
use crate::game::state::GameState;
use crate::game::types::CharacterKind;

/// Describe the player's current cell and resolve its encounter.
///
/// Always reports the position; adds an exit sighting when the player
/// stands on the exit; and when the cell is occupied, appends the
/// encounter block. Guides only speak. Hazards speak and then subtract a
/// random amount of health in `MIN_DAMAGE..=MAX_DAMAGE`. Characters stay
/// on their cell, so revisiting re-runs the encounter in full.
pub fn describe_current(state: &mut GameState, rng: &mut impl Rng) -> String {
    let pos = state.player;
    let mut out = vec![format!("Kamu berada di posisi ({},{}).", pos.x, pos.y)];

    if pos == state.exit {
        out.push("Kamu melihat sebuah pintu keluar!".to_owned());
    }

    if let Some(ch) = state.current_room().character.clone() {
        match ch.kind {
            CharacterKind::Guide => {
                out.push(format!("{} Kamu bertemu {}. {}", ch.icon(), ch.name, ch.message));
            }
            CharacterKind::Hazard => {
                out.push(format!("{} {} muncul! {}", ch.icon(), ch.name, ch.message));
                let dmg = rng.random_range(MIN_DAMAGE..=MAX_DAMAGE);
                state.health -= dmg;
                out.push(format!(
                    "{} mengurangi nyawamu sebanyak {}. Nyawa: {}",
                    ch.name, dmg, state.health
                ));
            }
        }
    }

    out.join("\n")
}
