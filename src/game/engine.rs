//! Snapshot-history game engine.
//!
//! The engine keeps every board the game has passed through, plus a cursor
//! selecting the snapshot that is currently displayed and played from.
//! Rewinding moves only the cursor; playing from a rewound position
//! discards the snapshots beyond it before appending the new board.

use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game, derived from the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

/// Tic-tac-toe engine with a rewindable history of board snapshots.
///
/// `snapshots[0]` is always the empty board, and consecutive snapshots
/// differ in exactly one square that was empty in the earlier one. Whose
/// turn it is falls out of the cursor parity, so it is never stored.
///
/// Illegal inputs (occupied square, move after the game is decided, jump
/// out of range) are ignored rather than surfaced as errors: the caller
/// re-renders an unchanged state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    snapshots: Vec<Board>,
    current: usize,
}

impl Game {
    /// Creates a new game with a single empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// The board snapshot at the cursor.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the displayed snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether X makes the next move. X moves on even snapshot indices.
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// The player who makes the next move.
    pub fn to_move(&self) -> Player {
        if self.x_is_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the displayed board, derived on every call.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_winner(self.board()) {
            GameStatus::Won(winner)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Returns `false` without any state change when the square is already
    /// occupied or the displayed board has a winner. On success every
    /// snapshot after the cursor is discarded, the new board is appended
    /// and the cursor advances to it.
    #[instrument(skip(self), fields(pos = %pos, to_move = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> bool {
        if !self.board().is_empty(pos) {
            debug!("ignoring move on occupied square");
            return false;
        }
        if check_winner(self.board()).is_some() {
            debug!("ignoring move after game end");
            return false;
        }

        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug!(snapshots = self.snapshots.len(), "Move applied");
        true
    }

    /// Moves the cursor to snapshot `index` without touching history.
    ///
    /// Returns `false` when `index` is out of range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.snapshots.len() {
            debug!("ignoring jump out of range");
            return false;
        }
        self.current = index;
        true
    }

    /// Resets to a fresh game with a single empty snapshot.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
