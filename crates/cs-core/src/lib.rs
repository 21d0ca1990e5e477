//! # cs-core
//!
//! Core domain models and business logic for ClipStack.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the typed clipboard entry, the bounded history, the payload classifier and
//! the port traits that platform adapters implement.

pub mod clipboard;
pub mod config;
pub mod ports;
pub mod shortcut;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ChangeCount, ClipboardEntry, ClipboardFormat, EntryPreview, FileRef, FormatId, History,
    ObservedClipboardRepresentation, ObservedClipboardState, SystemClipboardSnapshot,
    HISTORY_CAPACITY,
};
pub use config::AppConfig;
pub use shortcut::{PasteSlot, ShortcutBinding};
