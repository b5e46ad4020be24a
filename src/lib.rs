//! Noughts and crosses against a rule-based computer opponent.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules, and the opponent's rule ladder
//! - **Session**: owns the live board and enforces turn order
//! - **Console**: line-based input, board rendering, and the turn loop
//! - **Config**: first-mover selection from TOML and the command line
//!
//! # Example
//!
//! ```
//! use noughts_and_crosses::{Board, Marker, MoveReason, Position, select_move};
//!
//! let mut board = Board::new();
//! let chosen = select_move(&mut board, Marker::O, Marker::X);
//! assert_eq!(chosen.position, Position::TopLeft);
//! assert_eq!(chosen.reason, MoveReason::Corner);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstMover, GameConfig};

// Crate-level exports - Console front end
pub use console::orchestrator::{GameOutcome, Orchestrator};
pub use console::players::{HumanPlayer, Player};
pub use console::{run_console, ui};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Game types
pub use games::noughts::{
    BlockOpponent, Board, ChosenMove, GameStatus, LADDER, LINES, Marker, Move, MoveError,
    MoveReason, Position, Role, Rule, Square, TakeCenter, TakeCorner, TakeSide, WinNow,
    choose_move, has_line, is_draw, is_full, select_move, winner,
};
