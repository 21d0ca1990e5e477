//! Clipboard domain models.
mod classifier;
mod entry;
mod format;
mod history;
mod preview;
mod snapshot;
mod state;

pub use classifier::{classify, ClipboardPayloadSource};
pub use entry::{ClipboardEntry, EntryDecodeError, EntryKind, FileRef};
pub use format::{ClipboardFormat, FormatId, UNKNOWN_FORMAT_ID};
pub use history::{History, HISTORY_CAPACITY};
pub use preview::EntryPreview;
pub use snapshot::{ObservedClipboardRepresentation, SnapshotHash, SystemClipboardSnapshot};
pub use state::{ChangeCount, ObservedClipboardState};

#[cfg(test)]
mod tests;
