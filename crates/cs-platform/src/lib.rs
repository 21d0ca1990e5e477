//! # cs-platform
//!
//! Platform-specific implementations for ClipStack.
//!
//! This crate contains the adapters that touch the operating system: the
//! shared clipboard, synthetic keyboard input, the local filesystem and the
//! polling runtime that drives the history store.

pub mod app_dirs;
pub mod clipboard;
pub mod fs;
pub mod input;
pub mod runtime;

pub use app_dirs::{AppDirs, DirsAppDirs};
pub use clipboard::LocalClipboard;
pub use fs::LocalFileReader;
pub use input::EnigoPasteKeystroke;
pub use runtime::PollingClipboardRuntime;
