//! Game session: the single owner of all mutable game state.
//!
//! ## Key Types
//!
//! - `GameSession`: entry points for a presentation layer
//! - `GameStatus`: in progress or won
//! - `GameSummary`: score, moves and time for the end-of-game display

pub mod game;
pub mod summary;

pub use game::GameSession;
pub use summary::{GameStatus, GameSummary};
