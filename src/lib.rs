//! # klondike-engine
//!
//! Rules engine for single-player Klondike solitaire (draw one, unlimited
//! recycles).
//!
//! ## Design Principles
//!
//! 1. **One Owner**: All mutable state lives in a `GameSession`. There are
//!    no globals; a host holds the session and calls into it.
//!
//! 2. **Plan, Then Apply**: Requests are validated against the board before
//!    anything changes. A rejected request mutates nothing and records no
//!    undo step.
//!
//! 3. **Closed Types**: Suits, ranks, zones and moves are enums, so a card
//!    or a move that cannot exist cannot be expressed.
//!
//! ## Modules
//!
//! - `core`: locations, errors, configuration, RNG
//! - `cards`: suits, ranks, cards and the 52-card deck
//! - `zones`: the board (stock, waste, foundations, tableau) and the deal
//! - `rules`: move validation and execution
//! - `history`: snapshots and the bounded undo stack
//! - `session`: `GameSession`, the public entry point
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{CardRef, GameSession, PileRef};
//!
//! let mut session = GameSession::with_seed(42);
//! let snap = session.draw_stock().unwrap();
//! assert_eq!(snap.board.waste().len(), 1);
//!
//! // Whatever happens, a rejected move leaves the board as it was.
//! let before = session.snapshot();
//! if session.attempt_move(CardRef::waste(0), PileRef::foundation(0)).is_err() {
//!     assert_eq!(session.snapshot(), before);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardError, CardRef, GameConfig, GameRng, InvalidMove, MoveRejected, PileRef, Scoring, Zone,
    DEFAULT_HISTORY_CAPACITY,
};

pub use crate::cards::{build_deck, shuffled_deck, Card, Color, Rank, Suit, DECK_SIZE};

pub use crate::zones::{Board, Run, N_FOUNDATIONS, N_TABLEAU};

pub use crate::rules::{Move, MoveOutcome};

pub use crate::history::{BoardSnapshot, History};

pub use crate::session::{GameSession, GameStatus, GameSummary};
