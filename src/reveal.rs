//! Reveal-on-scroll tracking
//!
//! Elements tagged as revealable get the `visible` class the first time they
//! intersect the viewport. Leaving the viewport never hides them again.

use std::collections::HashSet;
use std::hash::Hash;

/// One-way revealed set, keyed by element identity
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
    observed: usize,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
            observed: 0,
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element for observation
    pub fn watch(&mut self) {
        self.observed += 1;
    }

    /// Feed an intersection entry. Returns true only on the first intersection.
    pub fn on_entry(&mut self, key: K, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Elements registered but not yet revealed
    pub fn pending(&self) -> usize {
        self.observed.saturating_sub(self.revealed.len())
    }
}
