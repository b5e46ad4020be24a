//! Win detection logic for noughts and crosses.

use super::super::{Board, Marker, Position, Square};
use tracing::instrument;

/// The 8 winning triples: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `marker` occupies all three squares of any line.
#[instrument(level = "trace")]
pub fn has_line(board: &Board, marker: Marker) -> bool {
    let target = Square::Occupied(marker);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}

/// Returns the marker holding a line, if any.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|&marker| has_line(board, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marker: Marker, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.place(pos, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Marker::X));
        assert!(!has_line(&board, Marker::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(Marker::O, &line);
            assert!(has_line(&board, Marker::O), "line {:?}", line);
            assert!(!has_line(&board, Marker::X), "line {:?}", line);
            assert_eq!(winner(&board), Some(Marker::O));
        }
    }

    #[test]
    fn test_no_line_incomplete() {
        let board = board_with(Marker::X, &[Position::TopLeft, Position::TopCenter]);
        assert!(!has_line(&board, Marker::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Marker::X, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::TopRight, Marker::O).unwrap();
        assert!(!has_line(&board, Marker::X));
        assert!(!has_line(&board, Marker::O));
    }

    #[test]
    fn test_no_line_on_non_line_triples() {
        // Three squares that share neither row, column nor diagonal.
        let board = board_with(
            Marker::X,
            &[Position::TopLeft, Position::MiddleRight, Position::BottomCenter],
        );
        assert!(!has_line(&board, Marker::X));
    }
}
