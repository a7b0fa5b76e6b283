//! Whole-state snapshots.

use serde::{Deserialize, Serialize};

use crate::zones::Board;

/// Full copy of the board plus the session counters.
///
/// Used both as an undo entry and as the read-only view handed to a
/// renderer after every operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: Board,
    pub score: u32,
    pub move_count: u32,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(board: Board, score: u32, move_count: u32) -> Self {
        Self {
            board,
            score,
            move_count,
        }
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }
}
