//! Core engine types: locations, errors, RNG, configuration.
//!
//! These are the building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod location;
pub mod rng;

pub use config::{GameConfig, Scoring, DEFAULT_HISTORY_CAPACITY};
pub use error::{BoardError, InvalidMove, MoveRejected};
pub use location::{CardRef, PileRef, Zone};
pub use rng::GameRng;
