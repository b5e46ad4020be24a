//! Move types and move errors.

use super::{Marker, Position, Role};
use serde::{Deserialize, Serialize};

/// A committed move: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", position)]
    SquareOccupied {
        /// The occupied square.
        position: Position,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Someone other than `role` is due to move.
    #[display("It's not the {}'s turn", role)]
    WrongTurn {
        /// The role that attempted to move.
        role: Role,
    },
}
