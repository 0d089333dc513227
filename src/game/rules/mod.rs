//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules,
//! kept separate from board storage and from the history engine.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
