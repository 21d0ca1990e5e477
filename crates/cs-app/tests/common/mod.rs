#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use cs_app::{HistoryStore, HistoryStoreDeps, RestoreTiming};
use cs_core::ports::{ClipboardPollHandler, PasteKeystrokePort, PollOutcome};
use cs_core::testing::{InMemoryClipboard, InMemoryFiles, RecordingKeystroke};

/// Long enough for a scheduled restore to write back and settle.
pub const AFTER_RESTORE: Duration = Duration::from_millis(800 + 500 + 1);

pub struct Harness {
    pub clipboard: Arc<InMemoryClipboard>,
    pub keystroke: Arc<RecordingKeystroke>,
    pub files: Arc<InMemoryFiles>,
    pub store: HistoryStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(InMemoryClipboard::new(), RecordingKeystroke::new(), InMemoryFiles::new())
    }

    pub fn build(
        clipboard: InMemoryClipboard,
        keystroke: RecordingKeystroke,
        files: InMemoryFiles,
    ) -> Self {
        let clipboard = Arc::new(clipboard);
        let keystroke = Arc::new(keystroke);
        let files = Arc::new(files);
        let store = store_with(clipboard.clone(), keystroke.clone(), files.clone());
        Self {
            clipboard,
            keystroke,
            files,
            store,
        }
    }

    /// Copy `text` from "another application" and let one tick observe it.
    pub async fn copy(&self, text: &str) -> PollOutcome {
        self.clipboard.copy_text(text);
        self.store.poll_once().await.expect("poll tick")
    }
}

pub fn store_with(
    clipboard: Arc<InMemoryClipboard>,
    keystroke: Arc<dyn PasteKeystrokePort>,
    files: Arc<InMemoryFiles>,
) -> HistoryStore {
    HistoryStore::new(
        HistoryStoreDeps {
            clipboard,
            keystroke,
            files,
        },
        RestoreTiming::default(),
    )
    .expect("in-memory clipboard never fails to report its change count")
}
