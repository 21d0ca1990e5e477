//! ClipStack Application Layer
//!
//! Owns the clipboard history state machine and the use cases the
//! presentation shell calls into.

pub mod history;
pub mod usecases;

pub use history::{HistoryStore, HistoryStoreDeps, PasteError, RestoreTiming};
