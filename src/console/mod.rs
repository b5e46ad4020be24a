//! Line-based console front end.

pub mod orchestrator;
pub mod players;
pub mod ui;

use crate::config::GameConfig;
use crate::session::GameSession;
use anyhow::Result;
use orchestrator::{GameOutcome, Orchestrator};
use players::HumanPlayer;
use std::io;
use tracing::instrument;

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
pub fn run_console(config: &GameConfig) -> Result<GameOutcome> {
    let session = GameSession::new(config.resolve_first());
    let stdin = io::stdin();
    let human = HumanPlayer::new("Player", stdin.lock(), io::stdout());
    let mut orchestrator = Orchestrator::new(session, human, io::stdout());
    orchestrator.run()
}
