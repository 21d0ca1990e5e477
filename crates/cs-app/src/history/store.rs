use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, trace, warn, Instrument};

use cs_core::clipboard::classify;
use cs_core::config::{AppConfig, DEFAULT_RESTORE_DELAY_MS, DEFAULT_RESTORE_SETTLE_MS};
use cs_core::ports::{
    ClipboardPollHandler, FileContentPort, PasteKeystrokePort, PollOutcome, SystemClipboardPort,
};
use cs_core::{ClipboardEntry, ObservedClipboardState};

use super::{paste_payload, restore};

/// Errors reported by [`HistoryStore::paste_item`].
///
/// Both are raised before the clipboard or the suppression flags are touched.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("history index {index} is out of range (history holds {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("failed to capture clipboard before paste: {0}")]
    CaptureFailed(String),
}

/// Delays of the paste-with-restore protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreTiming {
    /// Time the foreground application gets to consume the synthetic paste.
    pub delay: Duration,
    /// Time the restored content settles before change detection resumes.
    pub settle: Duration,
}

impl Default for RestoreTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_RESTORE_DELAY_MS),
            settle: Duration::from_millis(DEFAULT_RESTORE_SETTLE_MS),
        }
    }
}

impl From<&AppConfig> for RestoreTiming {
    fn from(config: &AppConfig) -> Self {
        Self {
            delay: config.restore_delay(),
            settle: config.restore_settle(),
        }
    }
}

/// Platform capabilities the store drives.
#[derive(Clone)]
pub struct HistoryStoreDeps {
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub keystroke: Arc<dyn PasteKeystrokePort>,
    pub files: Arc<dyn FileContentPort>,
}

pub(super) struct StoreState {
    pub(super) observed: ObservedClipboardState,
    pub(super) pending_restore: Option<JoinHandle<()>>,
}

pub(super) struct Inner {
    pub(super) deps: HistoryStoreDeps,
    pub(super) timing: RestoreTiming,
    pub(super) state: Mutex<StoreState>,
    published: watch::Sender<Arc<[ClipboardEntry]>>,
}

/// Owner of the clipboard history and the paste-with-restore protocol.
///
/// ## Behavior / 行为
/// - `poll_once` records genuinely new external clipboard values at the head of history
/// - `paste_item` swaps a history entry onto the clipboard, triggers a paste,
///   and schedules the restore of the previous clipboard content
/// - While a paste or restore is in flight, poll ticks are no-ops
///
/// Cloning is cheap; clones share the same state.
#[derive(Clone)]
pub struct HistoryStore {
    inner: Arc<Inner>,
}

impl HistoryStore {
    /// Create a store observing from the clipboard's current change token,
    /// so content copied before startup is not captured.
    pub fn new(deps: HistoryStoreDeps, timing: RestoreTiming) -> anyhow::Result<Self> {
        let initial = deps
            .clipboard
            .change_count()
            .context("failed to read initial clipboard change count")?;
        let observed = ObservedClipboardState::new(initial);
        let (published, _) = watch::channel(observed.history().to_shared());

        debug!(change_count = %initial, "History store initialized");

        Ok(Self {
            inner: Arc::new(Inner {
                deps,
                timing,
                state: Mutex::new(StoreState {
                    observed,
                    pending_restore: None,
                }),
                published,
            }),
        })
    }

    /// Current history, most recent first. O(1), no entry is copied.
    pub fn history(&self) -> Arc<[ClipboardEntry]> {
        self.inner.published.borrow().clone()
    }

    /// Receiver notified whenever an entry is inserted.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[ClipboardEntry]>> {
        self.inner.published.subscribe()
    }

    /// Whether a paste or restore currently gates change detection.
    pub async fn is_suppressed(&self) -> bool {
        self.inner.state.lock().await.observed.is_suppressed()
    }

    /// Paste history entry `index` into the foreground application.
    ///
    /// Returns once the entry is on the clipboard and the paste keystroke has
    /// been sent. The previous clipboard content is restored later by a
    /// background task; a newer call cancels and replaces it.
    pub async fn paste_item(&self, index: usize) -> Result<(), PasteError> {
        let span = info_span!("history_store.paste_item", index);

        async {
            let mut state = self.inner.state.lock().await;

            let len = state.observed.history().len();
            let Some(entry) = state.observed.history().get(index).cloned() else {
                warn!(len, "Paste requested for an index outside the history");
                return Err(PasteError::InvalidIndex { index, len });
            };

            let captured = self.inner.deps.clipboard.read_snapshot().map_err(|err| {
                error!(error = %format!("{err:#}"), "Failed to capture clipboard before paste");
                PasteError::CaptureFailed(format!("{err:#}"))
            })?;

            let generation = state.observed.begin_paste();
            debug!(
                generation,
                representations = captured.representation_count(),
                bytes = captured.total_size_bytes(),
                "Captured clipboard for restore"
            );

            self.inner.write_entry(&entry).await;

            if let Err(err) = self.inner.deps.keystroke.send_paste() {
                error!(error = %format!("{err:#}"), "Failed to send paste keystroke");
            }

            if let Some(previous) = state.pending_restore.take() {
                previous.abort();
                debug!("Cancelled pending restore");
            }
            state.pending_restore = Some(restore::schedule(
                Arc::clone(&self.inner),
                generation,
                captured,
            ));

            info!(kind = %entry.kind(), generation, "Pasted history entry");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Wait for a scheduled restore, if any, to run to completion.
    ///
    /// Used at shutdown so the user's clipboard is not left holding a history entry.
    pub async fn finish_pending_restore(&self) {
        let pending = self.inner.state.lock().await.pending_restore.take();
        if let Some(handle) = pending {
            debug!("Waiting for pending restore");
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    warn!(error = %err, "Restore task failed");
                }
            }
        }
    }
}

impl Inner {
    /// Clear the clipboard and write `entry` under its single typed representation.
    ///
    /// File contents are read on the blocking pool. A payload that cannot be
    /// produced leaves the clipboard empty.
    async fn write_entry(&self, entry: &ClipboardEntry) {
        let payload = match entry {
            ClipboardEntry::File(_) => {
                let files = Arc::clone(&self.deps.files);
                let entry = entry.clone();
                tokio::task::spawn_blocking(move || {
                    paste_payload::snapshot_for(&entry, files.as_ref())
                })
                .await
                .unwrap_or_else(|err| {
                    error!(error = %err, "File read task failed");
                    None
                })
            }
            _ => paste_payload::snapshot_for(entry, self.deps.files.as_ref()),
        };

        let clipboard = &self.deps.clipboard;
        let result = match payload {
            Some(snapshot) => clipboard.write_snapshot(snapshot),
            None => clipboard.clear(),
        };
        if let Err(err) = result {
            error!(error = %format!("{err:#}"), "Failed to write history entry to clipboard");
        }
    }

    fn publish(&self, state: &StoreState) {
        self.published.send_replace(state.observed.history().to_shared());
    }
}

#[async_trait]
impl ClipboardPollHandler for HistoryStore {
    async fn poll_once(&self) -> anyhow::Result<PollOutcome> {
        let mut state = self.inner.state.lock().await;

        if state.observed.is_suppressed() {
            trace!("Paste in flight, skipping change detection");
            return Ok(PollOutcome::Suppressed);
        }

        let current = self
            .inner
            .deps
            .clipboard
            .change_count()
            .context("failed to read clipboard change count")?;
        if !state.observed.observe_change_count(current) {
            return Ok(PollOutcome::Unchanged);
        }

        let snapshot = match self.inner.deps.clipboard.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    error = %format!("{err:#}"),
                    change_count = %current,
                    "Failed to read changed clipboard"
                );
                return Ok(PollOutcome::NoEntry);
            }
        };

        let Some(entry) = classify(&snapshot, self.inner.deps.files.as_ref()) else {
            debug!(change_count = %current, "Clipboard changed but exposed nothing");
            return Ok(PollOutcome::NoEntry);
        };

        let kind = entry.kind();
        if !state.observed.insert(entry) {
            debug!(kind = %kind, "Clipboard entry equals history head, skipping");
            return Ok(PollOutcome::Duplicate);
        }

        self.inner.publish(&state);
        info!(
            kind = %kind,
            len = state.observed.history().len(),
            "Captured clipboard entry"
        );
        Ok(PollOutcome::Inserted)
    }
}
