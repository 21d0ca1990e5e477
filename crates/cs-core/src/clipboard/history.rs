use std::sync::Arc;

use super::ClipboardEntry;

/// Maximum number of entries retained, one per paste shortcut slot.
pub const HISTORY_CAPACITY: usize = 9;

/// Bounded, most-recent-first list of clipboard entries.
///
/// Entries are only ever prepended at the head and evicted from the tail;
/// nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<ClipboardEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Prepend `entry` unless it equals the current head.
    ///
    /// Returns `true` when the history changed. The oldest entry is evicted
    /// once the history grows past [`HISTORY_CAPACITY`].
    pub fn insert(&mut self, entry: ClipboardEntry) -> bool {
        if self.entries.first() == Some(&entry) {
            return false;
        }

        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn get(&self, index: usize) -> Option<&ClipboardEntry> {
        self.entries.get(index)
    }

    pub fn head(&self) -> Option<&ClipboardEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClipboardEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// Shared read-only copy for display. Payloads are reference counted.
    pub fn to_shared(&self) -> Arc<[ClipboardEntry]> {
        Arc::from(self.entries.as_slice())
    }
}
