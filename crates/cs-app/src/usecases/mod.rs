pub mod list_history_previews;
pub mod paste_history_slot;
pub mod start_clipboard_watcher;

pub use list_history_previews::ListHistoryPreviews;
pub use paste_history_slot::PasteHistorySlot;
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
