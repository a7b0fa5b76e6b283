//! Board zones and their invariants.
//!
//! ## Key Types
//!
//! - `Board`: stock, waste, four foundations, seven tableau piles
//! - `Run`: cards lifted together off a tableau pile

pub mod board;

pub use board::{Board, Run, DEALT_TO_TABLEAU, N_FOUNDATIONS, N_TABLEAU};

// Re-export location types from core for convenience
pub use crate::core::location::{CardRef, PileRef, Zone};
