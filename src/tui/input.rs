//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_rewind::Position;

/// Moves the board cursor one cell, clamped at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_between_cells() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_other_keys_keep_cursor() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Char('x')),
            Position::Center
        );
    }
}
