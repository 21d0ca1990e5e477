//! Deferred restore of the clipboard captured before a paste.
//!
//! Each restore carries the generation claimed by its paste. A restore that
//! wakes up after a newer paste has started finds its generation stale and
//! exits without touching the clipboard or the flags; clearing them is left
//! to the newest restore.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, info_span, warn, Instrument};

use cs_core::SystemClipboardSnapshot;

use super::store::Inner;

pub(super) fn schedule(
    inner: Arc<Inner>,
    generation: u64,
    captured: SystemClipboardSnapshot,
) -> JoinHandle<()> {
    let span = info_span!("history_store.restore", generation);
    tokio::spawn(run(inner, generation, captured).instrument(span))
}

async fn run(inner: Arc<Inner>, generation: u64, captured: SystemClipboardSnapshot) {
    sleep(inner.timing.delay).await;

    {
        let mut state = inner.state.lock().await;
        if !state.observed.is_current_restore(generation) {
            debug!("Restore superseded before write-back");
            return;
        }

        state.observed.begin_restore();
        let representations = captured.representation_count();
        if let Err(err) = inner.deps.clipboard.write_snapshot(captured) {
            error!(error = %format!("{err:#}"), "Failed to restore clipboard");
        } else {
            debug!(representations, "Wrote captured clipboard back");
        }
    }

    sleep(inner.timing.settle).await;

    let mut state = inner.state.lock().await;
    if !state.observed.is_current_restore(generation) {
        debug!("Restore superseded while settling");
        return;
    }

    let settled = match inner.deps.clipboard.change_count() {
        Ok(count) => Some(count),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Failed to read change count after restore");
            None
        }
    };
    state.observed.finish_restore(settled);
    state.pending_restore = None;
    info!("Clipboard restored, change detection resumed");
}
