//! Game core: grid model, game state, turn resolution, and the terminal
//! loop that drives them.

pub mod error;
pub mod game_loop;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;
