use anyhow::Result;
use clipboard_rs::ClipboardContext;
use cocoa::base::id;
use objc::{class, msg_send, sel, sel_impl};

use cs_core::ChangeCount;

/// Reads `NSPasteboard.generalPasteboard.changeCount`, which AppKit bumps on
/// every write from any process, this one included.
pub(super) struct ChangeTokenSource;

impl ChangeTokenSource {
    pub(super) fn new() -> Self {
        Self
    }

    pub(super) fn current(&self, _ctx: &ClipboardContext) -> Result<ChangeCount> {
        let count: i64 = unsafe {
            let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
            msg_send![pasteboard, changeCount]
        };
        Ok(ChangeCount(count))
    }

    pub(super) fn record_write(&self, _ctx: &ClipboardContext) {}
}
