//! Noughts and crosses: board, rules, and the computer opponent.

mod action;
mod policy;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use policy::{
    BlockOpponent, ChosenMove, LADDER, MoveReason, Rule, TakeCenter, TakeCorner, TakeSide, WinNow,
    choose_move, select_move,
};
pub use position::Position;
pub use rules::{LINES, has_line, is_draw, is_full, winner};
pub use types::{Board, GameStatus, Marker, Role, Square};
