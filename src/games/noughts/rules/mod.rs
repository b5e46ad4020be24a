//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. They never
//! mutate, so the opponent can call them on hypothetical boards as
//! freely as on the live one.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line, winner};
