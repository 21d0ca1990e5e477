//! Port interfaces for the application layer
//!
//! Ports define the contract between the clipboard-history logic and the
//! platform implementations. This follows Hexagonal Architecture principles,
//! allowing the core state machine to be driven by in-memory fakes in tests.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents a capability the history store
//! needs and that only the platform layer can provide (clipboard access,
//! synthetic input, the filesystem, timers driving the store).

mod clipboard_poll_handler;
mod file_content;
mod paste_keystroke;
mod system_clipboard;
pub mod watcher_control;

pub use clipboard_poll_handler::{ClipboardPollHandler, PollOutcome};
pub use file_content::FileContentPort;
pub use paste_keystroke::PasteKeystrokePort;
pub use system_clipboard::SystemClipboardPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
