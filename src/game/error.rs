//! Centralized error types for game construction and movement.
//!
//! The `Display` strings are the caller-facing messages, so every layer
//! reports failures with the same wording.

use std::error::Error;
use std::fmt;

/// Failure while constructing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The requested grid leaves no perimeter cell for the exit.
    GridTooSmall { size: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size } => {
                write!(
                    f,
                    "ukuran grid minimal 2 agar ada pintu keluar, diminta {}",
                    size
                )
            }
        }
    }
}

impl Error for SetupError {}

/// Recoverable failure of a move command. The game state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The direction token matched none of the known mappings.
    UnknownDirection,
    /// The destination lies outside the grid.
    OutOfBounds,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection => {
                write!(
                    f,
                    "Arah tidak dikenal. Gunakan 'utara/selatan/timur/barat' atau n/s/e/w."
                )
            }
            Self::OutOfBounds => write!(f, "Tidak bisa bergerak ke sana (batas ruangan)."),
        }
    }
}

impl Error for MoveError {}
