//! Clipboard poll handler port
//!
//! This port defines the callback interface the platform polling runtime
//! drives on every tick. It follows the Dependency Inversion Principle:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements this interface

use anyhow::Result;

/// What a single poll tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A paste or restore is in flight; change detection was skipped.
    Suppressed,
    /// The change token has not moved since the last tick.
    Unchanged,
    /// The clipboard changed but exposed nothing classifiable.
    NoEntry,
    /// The new entry equals the current head of history.
    Duplicate,
    /// A new entry was inserted at the head of history.
    Inserted,
}

/// Callback handler for clipboard poll ticks.
#[async_trait::async_trait]
pub trait ClipboardPollHandler: Send + Sync {
    /// Called once per polling interval.
    async fn poll_once(&self) -> Result<PollOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that ClipboardPollHandler is object-safe
    #[test]
    fn test_clipboard_poll_handler_is_object_safe() {
        fn assert_object_safe(_handler: &dyn ClipboardPollHandler) {}
        let _ = assert_object_safe;
    }
}
