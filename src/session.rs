//! Game session: owns the live board and enforces turn order.

use crate::games::noughts::{
    Board, ChosenMove, GameStatus, Marker, Move, MoveError, Position, Role, is_draw, select_move,
    winner,
};
use tracing::{debug, info, instrument};

/// A single game between the human and the computer.
///
/// The first mover always plays [`Marker::X`]. Once the status turns
/// terminal the board is frozen: every further move is rejected with
/// [`MoveError::GameOver`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    first: Role,
    to_move: Role,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with an empty board.
    #[instrument]
    pub fn new(first: Role) -> Self {
        info!(first = %first, "Creating new game session");
        Self {
            board: Board::new(),
            first,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Which role moved first.
    pub fn first(&self) -> Role {
        self.first
    }

    /// The marker assigned to `role`.
    pub fn marker_for(&self, role: Role) -> Marker {
        if role == self.first {
            Marker::X
        } else {
            Marker::O
        }
    }

    /// The human's marker.
    pub fn human_marker(&self) -> Marker {
        self.marker_for(Role::Human)
    }

    /// The computer's marker.
    pub fn computer_marker(&self) -> Marker {
        self.marker_for(Role::Computer)
    }

    /// The role due to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Role> {
        if self.status.is_terminal() {
            None
        } else {
            Some(self.to_move)
        }
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Commits the human's move.
    #[instrument(skip(self))]
    pub fn place_human(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.check_turn(Role::Human)?;
        let marker = self.human_marker();
        self.board.place(position, marker)?;
        self.record(Move::new(marker, position));
        Ok(self.status)
    }

    /// Lets the computer pick and commit its move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<ChosenMove, MoveError> {
        self.check_turn(Role::Computer)?;
        let own = self.computer_marker();
        let chosen = select_move(&mut self.board, own, own.opponent());
        self.record(Move::new(own, chosen.position));
        Ok(chosen)
    }

    fn check_turn(&self, role: Role) -> Result<(), MoveError> {
        match self.to_move() {
            None => Err(MoveError::GameOver),
            Some(expected) if expected != role => Err(MoveError::WrongTurn { role }),
            Some(_) => Ok(()),
        }
    }

    /// Records a committed move and re-evaluates the status, win before draw.
    fn record(&mut self, mov: Move) {
        self.history.push(mov);
        self.status = if let Some(marker) = winner(&self.board) {
            GameStatus::Won(marker)
        } else if is_draw(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        self.to_move = self.to_move.other();
        debug!(%mov, status = ?self.status, "Move recorded");
    }
}
