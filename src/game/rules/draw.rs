//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::win::check_winner;
    use super::*;
    use crate::game::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        // X O X / O X X / O X O - full, no complete line.
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let mut board = Board::new();
        for (idx, mark) in marks.iter().enumerate() {
            let pos = Position::from_index(idx).unwrap();
            board.set(pos, Square::Occupied(*mark));
        }
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
