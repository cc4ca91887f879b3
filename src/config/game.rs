/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid size,
/// starting health, damage bounds, and the character rosters.
pub const GRID_SIZE: usize = 3; // Side length of the square grid.

/// Health the player starts with.
pub const STARTING_HEALTH: i32 = 5;

/// Smallest amount of damage a hazard can deal in one encounter.
pub const MIN_DAMAGE: i32 = 1;

/// Largest amount of damage a hazard can deal in one encounter.
pub const MAX_DAMAGE: i32 = 3;

/// Names of the guides placed on the grid, in placement order.
pub const GUIDE_NAMES: [&str; 3] = ["Pak Joko", "Mbak Sari", "Kakek Tua"];

/// Names of the hazards placed on the grid, in placement order.
pub const HAZARD_NAMES: [&str; 2] = ["Hantu Kecil", "Bayangan"];

/// Icon shown when the player meets a guide.
pub const GUIDE_ICON: &str = "(^_^)";

/// Icon shown when a hazard appears.
pub const HAZARD_ICON: &str = "(~_~)";

/// Icon shown with the victory banner.
pub const TREASURE_ICON: &str = "✨🎁✨";
