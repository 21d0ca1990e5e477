//! Per-OS clipboard adapter.
//!
//! Reading and writing go through clipboard-rs on every platform. Only the
//! change token differs: macOS exposes the pasteboard's own counter, other
//! platforms derive one from the content fingerprint.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos::ChangeTokenSource;

#[cfg(not(target_os = "macos"))]
mod fingerprint;
#[cfg(not(target_os = "macos"))]
use fingerprint::ChangeTokenSource;

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, debug_span};

use cs_core::ports::SystemClipboardPort;
use cs_core::{ChangeCount, SystemClipboardSnapshot};

use super::CommonClipboardImpl;

/// The OS clipboard, backed by clipboard-rs.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    tokens: ChangeTokenSource,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            tokens: ChangeTokenSource::new(),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        let ctx = self.context()?;
        self.tokens.current(&ctx)
    }

    fn read_snapshot(&self) -> Result<SystemClipboardSnapshot> {
        let span = debug_span!("platform.read_clipboard");
        span.in_scope(|| {
            let ctx = self.context()?;
            let snapshot = CommonClipboardImpl::read_snapshot(&ctx)?;

            debug!(
                formats = snapshot.representation_count(),
                total_size_bytes = snapshot.total_size_bytes(),
                "Captured system clipboard snapshot"
            );

            Ok(snapshot)
        })
    }

    fn clear(&self) -> Result<()> {
        let ctx = self.context()?;
        CommonClipboardImpl::clear(&ctx)?;
        self.tokens.record_write(&ctx);
        Ok(())
    }

    fn write_snapshot(&self, snapshot: SystemClipboardSnapshot) -> Result<()> {
        let span = debug_span!(
            "platform.write_clipboard",
            representations = snapshot.representation_count(),
        );
        span.in_scope(|| {
            let ctx = self.context()?;
            CommonClipboardImpl::write_snapshot(&ctx, snapshot)?;
            self.tokens.record_write(&ctx);

            debug!("Wrote clipboard snapshot to system");
            Ok(())
        })
    }
}
