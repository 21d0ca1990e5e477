//! Use case for listing history entries as display previews
//! 列出历史条目预览的用例

use cs_core::EntryPreview;

use crate::history::HistoryStore;

pub struct ListHistoryPreviews {
    store: HistoryStore,
}

impl ListHistoryPreviews {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Previews in history order, index 0 being the most recent copy.
    pub fn execute(&self) -> Vec<EntryPreview> {
        EntryPreview::list(&self.store.history())
    }
}
