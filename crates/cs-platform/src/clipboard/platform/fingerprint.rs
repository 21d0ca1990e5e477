use anyhow::Result;
use clipboard_rs::ClipboardContext;
use tracing::warn;

use cs_core::ChangeCount;

use crate::clipboard::{CommonClipboardImpl, HashChangeCounter};

/// Change token for clipboards without a native counter: a read of the
/// current content is fingerprinted on every call.
pub(super) struct ChangeTokenSource {
    counter: HashChangeCounter,
}

impl ChangeTokenSource {
    pub(super) fn new() -> Self {
        Self {
            counter: HashChangeCounter::new(),
        }
    }

    pub(super) fn current(&self, ctx: &ClipboardContext) -> Result<ChangeCount> {
        let snapshot = CommonClipboardImpl::read_snapshot(ctx)?;
        Ok(self.counter.observe(snapshot.snapshot_hash()))
    }

    pub(super) fn record_write(&self, ctx: &ClipboardContext) {
        match CommonClipboardImpl::read_snapshot(ctx) {
            Ok(snapshot) => self.counter.record_write(snapshot.snapshot_hash()),
            Err(err) => warn!(error = %format!("{err:#}"), "Failed to fingerprint own clipboard write"),
        }
    }
}
