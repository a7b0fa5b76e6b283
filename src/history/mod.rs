//! Snapshot-based undo.
//!
//! ## Key Types
//!
//! - `BoardSnapshot`: deep copy of all zones plus score and move count
//! - `History`: bounded stack of snapshots (FIFO eviction, LIFO undo)

pub mod snapshot;
pub mod stack;

pub use snapshot::BoardSnapshot;
pub use stack::History;
