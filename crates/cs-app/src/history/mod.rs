//! Clipboard history store.
//!
//! The store is the single owner of [`ObservedClipboardState`](cs_core::ObservedClipboardState).
//! Poll ticks, `paste_item` calls and restore callbacks all take the same
//! lock, so their critical sections never interleave.

mod paste_payload;
mod restore;
mod store;

pub use store::{HistoryStore, HistoryStoreDeps, PasteError, RestoreTiming};
