//! Core domain types for noughts and crosses.

use super::action::MoveError;
use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A piece marker identifying one of the two parties.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Crosses (always moves first).
    #[display("X")]
    X,
    /// Noughts.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// Which side of the table a marker belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The person at the console.
    #[display("player")]
    Human,
    /// The rule-based opponent.
    #[display("computer")]
    Computer,
}

impl Role {
    /// Returns the other role.
    pub fn other(self) -> Self {
        match self {
            Role::Human => Role::Computer,
            Role::Computer => Role::Human,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(marker) => write!(f, "{}", marker),
        }
    }
}

/// 3x3 board.
///
/// Small enough to copy, so lookahead works on hypothetical values
/// produced by [`Board::with_marker`] rather than on the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares, row-major.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Places a marker on an empty square.
    ///
    /// Squares are never overwritten once occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied { position: pos });
        }
        self.squares[pos.to_index()] = Square::Occupied(marker);
        Ok(())
    }

    /// Returns a hypothetical copy of this board with `marker` at `pos`.
    ///
    /// The receiver is left untouched.
    pub fn with_marker(&self, pos: Position, marker: Marker) -> Self {
        debug_assert!(self.is_empty(pos), "hypothetical move on occupied square");
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(marker);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders three pipe-delimited rows, e.g. `| X | O |   |`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| {} | {} | {} |", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a line for this marker.
    Won(Marker),
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
