//! Rule-based computer opponent.
//!
//! The opponent walks a fixed ladder of rules and takes the first square
//! any rule offers:
//!
//! 1. [`WinNow`]: complete one of its own lines.
//! 2. [`BlockOpponent`]: occupy the square that would complete the human's line.
//! 3. [`TakeCorner`]: first empty corner in 0, 2, 6, 8 order.
//! 4. [`TakeCenter`]: the centre square.
//! 5. [`TakeSide`]: first empty side in 1, 3, 5, 7 order.
//!
//! Lookahead is one ply deep and happens on hypothetical boards; the live
//! board is only written when a move is committed by [`select_move`].

use super::rules::{has_line, is_full};
use super::{Board, Marker, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Why the opponent chose its square.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveReason {
    /// Completes the opponent's own line.
    #[display("moving to win")]
    Win,
    /// Occupies the human's winning square.
    #[display("blocking player's next move")]
    Block,
    /// First free corner.
    #[display("taking a corner")]
    Corner,
    /// The centre square.
    #[display("taking the centre")]
    Center,
    /// First free side.
    #[display("taking a side")]
    Side,
}

/// A square picked by the opponent together with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChosenMove {
    /// The chosen square.
    pub position: Position,
    /// The rule that produced it.
    pub reason: MoveReason,
}

/// One rung of the decision ladder.
pub trait Rule {
    /// The reason reported when this rule fires.
    fn reason(&self) -> MoveReason;

    /// Offers a square, or `None` if the rule does not apply.
    ///
    /// Must not modify `board`.
    fn candidate(&self, board: &Board, own: Marker, opponent: Marker) -> Option<Position>;
}

/// First empty square (ascending) that completes a line for `marker`.
fn completing_square(board: &Board, marker: Marker) -> Option<Position> {
    board.empty_positions().find(|&pos| {
        let hypothetical = board.with_marker(pos, marker);
        has_line(&hypothetical, marker)
    })
}

/// First empty square from a fixed scan order.
fn first_empty(board: &Board, order: &[Position]) -> Option<Position> {
    order.iter().copied().find(|&pos| board.is_empty(pos))
}

/// Rule 1: win immediately if possible.
pub struct WinNow;

impl Rule for WinNow {
    fn reason(&self) -> MoveReason {
        MoveReason::Win
    }

    fn candidate(&self, board: &Board, own: Marker, _opponent: Marker) -> Option<Position> {
        completing_square(board, own)
    }
}

/// Rule 2: block the opponent's immediate win.
pub struct BlockOpponent;

impl Rule for BlockOpponent {
    fn reason(&self) -> MoveReason {
        MoveReason::Block
    }

    fn candidate(&self, board: &Board, _own: Marker, opponent: Marker) -> Option<Position> {
        completing_square(board, opponent)
    }
}

/// Rule 3: take a corner.
pub struct TakeCorner;

impl Rule for TakeCorner {
    fn reason(&self) -> MoveReason {
        MoveReason::Corner
    }

    fn candidate(&self, board: &Board, _own: Marker, _opponent: Marker) -> Option<Position> {
        first_empty(board, &Position::CORNERS)
    }
}

/// Rule 4: take the centre.
pub struct TakeCenter;

impl Rule for TakeCenter {
    fn reason(&self) -> MoveReason {
        MoveReason::Center
    }

    fn candidate(&self, board: &Board, _own: Marker, _opponent: Marker) -> Option<Position> {
        first_empty(board, &[Position::Center])
    }
}

/// Rule 5: take a side.
pub struct TakeSide;

impl Rule for TakeSide {
    fn reason(&self) -> MoveReason {
        MoveReason::Side
    }

    fn candidate(&self, board: &Board, _own: Marker, _opponent: Marker) -> Option<Position> {
        first_empty(board, &Position::SIDES)
    }
}

/// The ladder in priority order.
pub const LADDER: [&dyn Rule; 5] = [&WinNow, &BlockOpponent, &TakeCorner, &TakeCenter, &TakeSide];

/// Picks the opponent's move without touching the board.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, own: Marker, opponent: Marker) -> Option<ChosenMove> {
    LADDER.iter().find_map(|rule| {
        let candidate = rule.candidate(board, own, opponent);
        trace!(reason = ?rule.reason(), ?candidate, "Rule evaluated");
        candidate.map(|position| ChosenMove {
            position,
            reason: rule.reason(),
        })
    })
}

/// Picks the opponent's move and commits `own` to that square.
///
/// # Panics
///
/// Panics if the board is full. Callers check for a draw before asking
/// the opponent to move.
#[instrument(skip(board))]
pub fn select_move(board: &mut Board, own: Marker, opponent: Marker) -> ChosenMove {
    assert!(!is_full(board), "opponent asked to move on a full board");

    let chosen = match choose_move(board, own, opponent) {
        Some(chosen) => chosen,
        None => unreachable!("corner, centre and side rules cover every square"),
    };

    if let Err(e) = board.place(chosen.position, own) {
        unreachable!("rule offered an occupied square: {}", e);
    }

    debug!(
        position = %chosen.position,
        reason = ?chosen.reason,
        "Opponent committed move"
    );
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_leaves_board_untouched() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopCenter, Marker::X).unwrap();
        board.place(Position::Center, Marker::O).unwrap();
        let snapshot = board;

        for rule in LADDER {
            let _ = rule.candidate(&board, Marker::O, Marker::X);
            assert_eq!(board, snapshot, "{:?} modified the board", rule.reason());
        }
        let _ = choose_move(&board, Marker::O, Marker::X);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_ladder_order() {
        let reasons: Vec<_> = LADDER.iter().map(|r| r.reason()).collect();
        assert_eq!(
            reasons,
            vec![
                MoveReason::Win,
                MoveReason::Block,
                MoveReason::Corner,
                MoveReason::Center,
                MoveReason::Side
            ]
        );
    }

    #[test]
    fn test_win_through_centre() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopRight, Marker::O).unwrap();
        board.place(Position::BottomLeft, Marker::O).unwrap();
        board.place(Position::BottomRight, Marker::X).unwrap();

        let chosen = choose_move(&board, Marker::O, Marker::X).unwrap();
        assert_eq!(chosen.position, Position::Center);
        assert_eq!(chosen.reason, MoveReason::Win);
    }

    #[test]
    fn test_centre_once_corners_are_gone() {
        // X O X / . . . / O X O: no open line for either side.
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopRight, Position::BottomCenter] {
            board.place(pos, Marker::X).unwrap();
        }
        for pos in [Position::TopCenter, Position::BottomLeft, Position::BottomRight] {
            board.place(pos, Marker::O).unwrap();
        }

        let chosen = choose_move(&board, Marker::O, Marker::X).unwrap();
        assert_eq!(chosen.position, Position::Center);
        assert_eq!(chosen.reason, MoveReason::Center);
    }

    #[test]
    fn test_choose_move_none_on_full_board() {
        let board = Board::from_squares([super::super::Square::Occupied(Marker::X); 9]);
        assert_eq!(choose_move(&board, Marker::O, Marker::X), None);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_select_move_panics_on_full_board() {
        let mut board = Board::from_squares([super::super::Square::Occupied(Marker::O); 9]);
        select_move(&mut board, Marker::O, Marker::X);
    }
}
