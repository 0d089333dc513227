//! Tic-tac-toe with a rewindable move history.
//!
//! The library half of this crate is the game core: board value types,
//! pure win/draw rules, the snapshot-history engine and the move-list
//! projection. The binary wraps the core in a ratatui terminal shell.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Position, SortOrder, move_list};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//!
//! // Rewind to the start; later snapshots stay until the next move.
//! game.jump_to(0);
//! assert_eq!(game.snapshots().len(), 3);
//!
//! let moves = move_list(&game, SortOrder::Ascending);
//! assert_eq!(moves[0].label, "You are at game start");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;

pub use game::{
    Board, Game, GameStatus, MoveEntry, Player, Position, SortOrder, Square, check_winner,
    is_full, move_list,
};
