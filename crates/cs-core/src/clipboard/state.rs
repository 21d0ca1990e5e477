use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClipboardEntry, History};

/// Opaque counter the platform clipboard bumps on every write.
///
/// Only compared for equality; never used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChangeCount(pub i64);

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the observer knows about the shared clipboard.
///
/// Owned by exactly one history store and mutated only under its lock.
#[derive(Debug, Clone)]
pub struct ObservedClipboardState {
    history: History,
    last_change_count: ChangeCount,
    is_pasting_from_history: bool,
    is_restoring_clipboard: bool,
    restore_generation: u64,
}

impl ObservedClipboardState {
    /// Start observing from the clipboard's current token so existing content
    /// is not captured retroactively.
    pub fn new(initial_change_count: ChangeCount) -> Self {
        Self {
            history: History::new(),
            last_change_count: initial_change_count,
            is_pasting_from_history: false,
            is_restoring_clipboard: false,
            restore_generation: 0,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_change_count(&self) -> ChangeCount {
        self.last_change_count
    }

    pub fn is_pasting_from_history(&self) -> bool {
        self.is_pasting_from_history
    }

    pub fn is_restoring_clipboard(&self) -> bool {
        self.is_restoring_clipboard
    }

    /// Whether change detection is currently gated off.
    pub fn is_suppressed(&self) -> bool {
        self.is_pasting_from_history || self.is_restoring_clipboard
    }

    pub fn restore_generation(&self) -> u64 {
        self.restore_generation
    }

    /// Record `current` as seen. Returns `true` if it differs from the last token.
    pub fn observe_change_count(&mut self, current: ChangeCount) -> bool {
        if current == self.last_change_count {
            return false;
        }
        self.last_change_count = current;
        true
    }

    pub fn insert(&mut self, entry: ClipboardEntry) -> bool {
        self.history.insert(entry)
    }

    /// Enter the paste window and claim a new restore generation.
    ///
    /// Any restore holding an older generation is superseded.
    pub fn begin_paste(&mut self) -> u64 {
        self.is_pasting_from_history = true;
        self.restore_generation += 1;
        self.restore_generation
    }

    pub fn is_current_restore(&self, generation: u64) -> bool {
        self.restore_generation == generation
    }

    pub fn begin_restore(&mut self) {
        self.is_restoring_clipboard = true;
    }

    /// Leave the paste window, adopting `settled` as the last seen token when known.
    pub fn finish_restore(&mut self, settled: Option<ChangeCount>) {
        if let Some(count) = settled {
            self.last_change_count = count;
        }
        self.is_restoring_clipboard = false;
        self.is_pasting_from_history = false;
    }
}
