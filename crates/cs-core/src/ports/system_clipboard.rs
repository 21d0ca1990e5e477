use anyhow::Result;

use crate::clipboard::{ChangeCount, SystemClipboardSnapshot};

/// System clipboard port - abstracts the shared OS clipboard.
///
/// Implementations are synchronous; callers sequence every read and write
/// through the history store so they never interleave with each other.
pub trait SystemClipboardPort: Send + Sync {
    /// Current change token. Bumped by the platform on every write.
    fn change_count(&self) -> Result<ChangeCount>;

    /// Capture every representation currently exposed, byte-for-byte.
    fn read_snapshot(&self) -> Result<SystemClipboardSnapshot>;

    /// Remove all content from the clipboard.
    fn clear(&self) -> Result<()>;

    /// Clear the clipboard and write all representations of `snapshot` as one item.
    fn write_snapshot(&self, snapshot: SystemClipboardSnapshot) -> Result<()>;
}
