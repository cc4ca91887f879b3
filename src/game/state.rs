use log::info;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::STARTING_HEALTH;
use crate::game::error::{MoveError, SetupError};
use crate::game::grid::{generate_grid, place_characters, place_exit};
use crate::game::systems::{describe_current, move_player, render_map};
use crate::game::types::{Position, Room};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Vec<Vec<Room>>,
    pub size: usize,
    pub player: Position,
    pub health: i32,
    pub exit: Position,
    pub turn: u32,
}

impl GameState {
    /// Create a new game on a `size` x `size` grid, placing the exit and
    /// the characters from the thread-local random source.
    pub fn new(size: usize) -> Result<Self, SetupError> {
        Self::with_rng(size, &mut rand::rng())
    }

    /// Create a new game using an injected random source, so callers can
    /// seed placement deterministically.
    ///
    /// The player starts at the grid center; the exit lands on a random
    /// perimeter cell, never the start. Grids smaller than 2x2 leave no
    /// such cell and are rejected.
    pub fn with_rng(size: usize, rng: &mut impl Rng) -> Result<Self, SetupError> {
        if size < 2 {
            return Err(SetupError::GridTooSmall { size });
        }

        let start = Position {
            x: size / 2,
            y: size / 2,
        };
        let exit = place_exit(size, start, rng).ok_or(SetupError::GridTooSmall { size })?;

        let mut grid = generate_grid(size);
        place_characters(&mut grid, size, start, exit, rng);

        info!(
            "new game: {}x{} grid, start ({},{}), exit ({},{})",
            size, size, start.x, start.y, exit.x, exit.y
        );

        Ok(Self {
            grid,
            size,
            player: start,
            health: STARTING_HEALTH,
            exit,
            turn: 0,
        })
    }

    /// Apply a direction token. See [`move_player`].
    pub fn move_player(&mut self, token: &str, rng: &mut impl Rng) -> Result<String, MoveError> {
        move_player(self, token, rng)
    }

    /// Describe the current cell and resolve its encounter. See
    /// [`describe_current`].
    pub fn describe_current(&mut self, rng: &mut impl Rng) -> String {
        describe_current(self, rng)
    }

    /// Render the grid as text. See [`render_map`].
    pub fn render_map(&self, reveal_exit: bool) -> String {
        render_map(self, reveal_exit)
    }

    pub fn current_room(&self) -> &Room {
        &self.grid[self.player.y][self.player.x]
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_at_exit(&self) -> bool {
        self.player == self.exit
    }

    /// One-line report of health, position, and turn count.
    pub fn status(&self) -> String {
        format!(
            "Nyawa: {} | Posisi: ({},{}) | Giliran: {}",
            self.health, self.player.x, self.player.y, self.turn
        )
    }
}
