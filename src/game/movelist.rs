//! Move-list projection over the game history.
//!
//! A pure view transform: the history is rendered as one entry per
//! snapshot, numbered by ascending position no matter which way the list
//! is displayed. Nothing here mutates the engine.

use super::engine::Game;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum SortOrder {
    /// Oldest snapshot first.
    #[display("ascending")]
    Ascending,
    /// Newest snapshot first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// Text shown for the entry.
    pub label: String,
    /// Snapshot index to jump to when the entry is selected.
    pub target: usize,
    /// Whether this entry is the displayed snapshot.
    pub current: bool,
}

/// Projects the history into display entries, one per snapshot.
///
/// The entry at the cursor reads "You are at move #N" ("You are at game
/// start" for the empty snapshot); every other entry reads "Go to move #N"
/// ("Go to game start"). N is the snapshot's ascending index; descending
/// order reverses entry order only.
pub fn move_list(game: &Game, order: SortOrder) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..game.snapshots().len())
        .map(|idx| {
            let current = idx == game.current_index();
            let label = match (idx, current) {
                (0, true) => "You are at game start".to_string(),
                (0, false) => "Go to game start".to_string(),
                (n, true) => format!("You are at move #{n}"),
                (n, false) => format!("Go to move #{n}"),
            };
            MoveEntry {
                label,
                target: idx,
                current,
            }
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}
