//! Console text: board rendering and user-facing messages.

use crate::games::noughts::{Board, ChosenMove, Marker};
use std::io::{self, Write};

/// Greeting printed before the first board.
pub const WELCOME: &str = "Let's play Noughts and Crosses!";

/// Printed when the human picks a taken square.
pub const SQUARE_OCCUPIED: &str = "That square is already occupied. Try again!";

/// Printed when the human types something other than 1-9.
pub const OUT_OF_RANGE: &str = "Please enter a number from 1 to 9.";

/// Writes the board with a blank line before and after.
pub fn render_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", board)?;
    writeln!(out)
}

/// Prompt asking the human for a square.
pub fn move_prompt(marker: Marker) -> String {
    format!(
        "Player {}, what is your move: 1-9 (1=top left, 9 = bottom right)? ",
        marker
    )
}

/// Announces which marker each side plays and who starts.
pub fn roles(human: Marker, computer: Marker, computer_first: bool) -> String {
    let starter = if computer_first {
        "The computer moves first."
    } else {
        "You move first."
    };
    format!("You are {}. The computer is {}. {}", human, computer, starter)
}

/// Describes the computer's move, e.g. `Computer moved to 5. Computer is taking the centre.`
pub fn computer_moved(chosen: &ChosenMove) -> String {
    format!(
        "Computer moved to {}. Computer is {}.",
        chosen.position, chosen.reason
    )
}

/// Announces a human win.
pub fn human_won(marker: Marker) -> String {
    format!("Player {} won!", marker)
}

/// Announces a computer win.
pub fn computer_won(marker: Marker) -> String {
    format!("Computer {} won!", marker)
}

/// Announces a draw.
pub const DRAW: &str = "Draw!";
