//! Game orchestration between the human and the computer.

use super::players::Player;
use super::ui;
use crate::games::noughts::{GameStatus, Marker, MoveError, Role};
use crate::session::GameSession;
use anyhow::Result;
use derive_more::Display;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The human completed a line.
    #[display("player {} won", _0)]
    HumanWon(Marker),
    /// The computer completed a line.
    #[display("computer {} won", _0)]
    ComputerWon(Marker),
    /// The board filled up with no line.
    #[display("draw")]
    Draw,
}

/// Drives one session to completion, alternating turns.
pub struct Orchestrator<P, W> {
    session: GameSession,
    human: P,
    out: W,
}

impl<P: Player, W: Write> Orchestrator<P, W> {
    /// Creates a new orchestrator.
    pub fn new(session: GameSession, human: P, out: W) -> Self {
        Self {
            session,
            human,
            out,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until a win or a draw.
    #[instrument(skip(self), fields(first = %self.session.first()))]
    pub fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game");

        writeln!(self.out, "{}", ui::WELCOME)?;
        ui::render_board(&mut self.out, self.session.board())?;
        writeln!(
            self.out,
            "{}",
            ui::roles(
                self.session.human_marker(),
                self.session.computer_marker(),
                self.session.first() == Role::Computer,
            )
        )?;

        while let Some(role) = self.session.to_move() {
            match role {
                Role::Human => {
                    let marker = self.session.human_marker();
                    debug!(player = %self.human.name(), "Waiting for move");
                    let position = self.human.get_move(self.session.board(), marker)?;
                    match self.session.place_human(position) {
                        Ok(_) => {}
                        Err(e @ MoveError::SquareOccupied { .. }) => {
                            warn!(error = %e, "Player offered an occupied square");
                            writeln!(self.out, "{}", ui::SQUARE_OCCUPIED)?;
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Role::Computer => {
                    let chosen = self.session.play_computer()?;
                    writeln!(self.out, "{}", ui::computer_moved(&chosen))?;
                }
            }
            ui::render_board(&mut self.out, self.session.board())?;
        }

        let outcome = self.announce()?;
        info!(%outcome, moves = self.session.history().len(), "Game over");
        Ok(outcome)
    }

    fn announce(&mut self) -> Result<GameOutcome> {
        let outcome = match self.session.status() {
            GameStatus::Won(marker) if marker == self.session.human_marker() => {
                writeln!(self.out, "{}", ui::human_won(marker))?;
                GameOutcome::HumanWon(marker)
            }
            GameStatus::Won(marker) => {
                writeln!(self.out, "{}", ui::computer_won(marker))?;
                GameOutcome::ComputerWon(marker)
            }
            GameStatus::Draw => {
                writeln!(self.out, "{}", ui::DRAW)?;
                GameOutcome::Draw
            }
            GameStatus::InProgress => anyhow::bail!("Game loop stopped before the game ended"),
        };
        Ok(outcome)
    }
}
