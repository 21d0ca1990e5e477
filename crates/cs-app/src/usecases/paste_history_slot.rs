//! Use case for pasting the history entry bound to a shortcut slot
//! 粘贴快捷键槽位对应的历史条目的用例

use cs_core::PasteSlot;
use tracing::{info, info_span, Instrument};

use crate::history::{HistoryStore, PasteError};

/// Paste the entry behind one of the nine shortcut slots.
///
/// ## Behavior / 行为
/// - Slot `n` pastes history entry `n - 1`
/// - An empty slot reports [`PasteError::InvalidIndex`] and changes nothing
pub struct PasteHistorySlot {
    store: HistoryStore,
}

impl PasteHistorySlot {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, slot: PasteSlot) -> Result<(), PasteError> {
        let span = info_span!("usecase.paste_history_slot.execute", slot = slot.number());

        async {
            info!("Paste shortcut triggered");
            self.store.paste_item(slot.index()).await
        }
        .instrument(span)
        .await
    }
}
