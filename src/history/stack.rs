//! Bounded undo stack.
//!
//! Snapshots are pushed before each mutation and popped by undo. When the
//! stack is full the oldest entry is dropped: eviction is FIFO, retrieval
//! is LIFO. Backed by `im::Vector`, which pops from either end in O(1) and
//! clones in O(1) when a session is cloned.

use im::Vector;

use super::snapshot::BoardSnapshot;

/// Undo history with a fixed capacity.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vector<BoardSnapshot>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest if over capacity.
    ///
    /// Returns the evicted snapshot, if any.
    pub fn push(&mut self, snapshot: BoardSnapshot) -> Option<BoardSnapshot> {
        if self.capacity == 0 {
            return Some(snapshot);
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop_front();
            log::trace!("undo history full, dropped oldest snapshot");
            return evicted;
        }
        None
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<BoardSnapshot> {
        self.entries.pop_back()
    }

    /// Most recent snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&BoardSnapshot> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
