//! Player trait and implementations.

mod human;

pub use human::HumanPlayer;

use crate::games::noughts::{Board, Marker, Position};
use anyhow::Result;

/// Source of moves for one side of the table.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position must be empty on `board`.
    fn get_move(&mut self, board: &Board, marker: Marker) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
