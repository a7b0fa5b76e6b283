//! Session status and end-of-game figures.

use serde::{Deserialize, Serialize};

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// All foundations complete. Terminal until the next `new_game`.
    Won,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == GameStatus::Won
    }
}

/// Figures shown when a game ends.
///
/// Time is raw seconds; formatting it is up to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub won: bool,
}
