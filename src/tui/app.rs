//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_rewind::{Game, GameStatus, MoveEntry, Position, SortOrder, move_list};
use tracing::debug;

use super::input;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move-history list.
    Moves,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    order: SortOrder,
    selected: usize,
    status_message: String,
}

impl App {
    /// Creates a new application with the given move-list order.
    pub fn new(order: SortOrder) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
            selected: 0,
            status_message: "Arrows move, Enter places. Tab focuses the move list.".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the move-list sort order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Gets the selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The move list in the active sort order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        move_list(&self.game, self.order)
    }

    /// Status line derived from the displayed board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => format!("Winner: {player}"),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.game.to_move()),
        }
    }

    /// Routes a key press to the focused pane.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                debug!(focus = ?self.focus, "Switched focus");
            }
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 place directly at that cell, regardless of focus.
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code if self.focus == Focus::Board => self.handle_board_key(code),
            code => self.handle_moves_key(code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last = self.moves().len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter => self.jump_selected(),
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        let mark = self.game.to_move();
        if !self.game.play(pos) {
            // Ignored input: nothing on screen changes.
            debug!(pos = %pos, "Move ignored");
            return;
        }
        self.selected = self.display_index(self.game.current_index());
        self.status_message = match self.game.status() {
            GameStatus::Won(player) => {
                debug!("final board:\n{}", self.game.board().display());
                format!("{player} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => {
                debug!("final board:\n{}", self.game.board().display());
                "Draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
            GameStatus::InProgress => format!("{mark} played {}.", pos.label()),
        };
    }

    fn jump_selected(&mut self) {
        let moves = self.moves();
        let Some(entry) = moves.get(self.selected) else {
            return;
        };
        let target = entry.target;
        if self.game.jump_to(target) {
            debug!(target, "Jumped to snapshot");
            self.status_message = if target == 0 {
                "Rewound to game start.".to_string()
            } else {
                format!("Rewound to move #{target}.")
            };
        }
    }

    fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        // Keep the same entry selected after the list reverses.
        self.selected = self.moves().len() - 1 - self.selected;
        self.status_message = format!("Move list sorted {}.", self.order);
        debug!(order = %self.order, "Toggled move-list order");
    }

    fn restart(&mut self) {
        self.game.restart();
        self.cursor = Position::Center;
        self.selected = 0;
        self.status_message = "Game restarted. Player X's turn.".to_string();
    }

    /// Row of a snapshot in the displayed list.
    fn display_index(&self, snapshot_index: usize) -> usize {
        match self.order {
            SortOrder::Ascending => snapshot_index,
            SortOrder::Descending => self.game.snapshots().len() - 1 - snapshot_index,
        }
    }
}
