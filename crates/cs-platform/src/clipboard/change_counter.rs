use std::sync::Mutex;

use cs_core::clipboard::SnapshotHash;
use cs_core::ChangeCount;

/// Change token derived from clipboard content, for platforms without a
/// native change counter.
///
/// The count moves when the observed fingerprint differs from the last one
/// and on every write made through this process.
#[derive(Debug, Default)]
pub struct HashChangeCounter {
    state: Mutex<CounterState>,
}

#[derive(Debug, Default)]
struct CounterState {
    count: i64,
    last: Option<SnapshotHash>,
}

impl HashChangeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for the clipboard currently fingerprinted as `hash`.
    pub fn observe(&self, hash: SnapshotHash) -> ChangeCount {
        let mut state = self.state.lock().unwrap_or_else(|p| p.into_inner());
        match state.last {
            Some(last) if last == hash => {}
            Some(_) => {
                state.count += 1;
                state.last = Some(hash);
            }
            None => state.last = Some(hash),
        }
        ChangeCount(state.count)
    }

    /// Account for a write this process just made, now fingerprinted as `hash`.
    pub fn record_write(&self, hash: SnapshotHash) {
        let mut state = self.state.lock().unwrap_or_else(|p| p.into_inner());
        state.count += 1;
        state.last = Some(hash);
    }
}
