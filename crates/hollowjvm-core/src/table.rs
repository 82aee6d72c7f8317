//! Ordered owning member table
//!
//! Backing store for a class descriptor's method and field registries.
//! Entries are held by `Arc`, so destruction is automatic on removal or
//! table teardown — a caller that retained a handle past unregistration
//! holds a still-valid descriptor, never a dangling entry.

use std::sync::Arc;

/// Insertion-order-preserving collection of shared descriptor handles.
///
/// Supports append, O(1) indexed read, ordered iteration, and removal by
/// pointer identity. Lookups over the table are linear scans by design:
/// registration rejects duplicates, so a scan finds at most one match.
#[derive(Debug)]
pub struct MemberTable<T> {
    entries: Vec<Arc<T>>,
}

impl<T> MemberTable<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`, in registration order
    pub fn get(&self, index: usize) -> Option<&Arc<T>> {
        self.entries.get(index)
    }

    /// Append an entry, taking shared ownership
    pub fn push(&mut self, entry: Arc<T>) {
        self.entries.push(entry);
    }

    /// Iterate entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }

    /// Clone the full table contents, in registration order.
    ///
    /// Used for enumeration: the table lives behind a lock, so embedders
    /// get a snapshot rather than a borrowed view.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.clone()
    }

    /// Remove the first entry that is pointer-identical to `entry`.
    ///
    /// Returns whether an entry was found. Relative order of the remaining
    /// entries is preserved.
    pub fn remove_by_identity(&mut self, entry: &Arc<T>) -> bool {
        match self.entries.iter().position(|e| Arc::ptr_eq(e, entry)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for MemberTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
