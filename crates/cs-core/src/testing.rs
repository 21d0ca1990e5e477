//! In-memory port implementations for tests.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream crates' test suites.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::clipboard::{
    ChangeCount, ClipboardFormat, ObservedClipboardRepresentation, SystemClipboardSnapshot,
};
use crate::ports::{FileContentPort, PasteKeystrokePort, SystemClipboardPort};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct ClipboardState {
    change_count: i64,
    snapshot: SystemClipboardSnapshot,
    writes: Vec<SystemClipboardSnapshot>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Clipboard that bumps its change count on every write, like the real one.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    state: Mutex<ClipboardState>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SystemClipboardSnapshot) -> Self {
        let clipboard = Self::new();
        lock(&clipboard.state).snapshot = snapshot;
        clipboard
    }

    /// Simulate another application copying `snapshot`.
    pub fn set_external(&self, snapshot: SystemClipboardSnapshot) {
        let mut state = lock(&self.state);
        state.snapshot = snapshot;
        state.change_count += 1;
    }

    /// Simulate another application copying plain text.
    pub fn copy_text(&self, text: &str) {
        self.set_external(text_snapshot(text));
    }

    /// Current clipboard contents.
    pub fn current(&self) -> SystemClipboardSnapshot {
        lock(&self.state).snapshot.clone()
    }

    /// Every snapshot written through the port, oldest first.
    pub fn writes(&self) -> Vec<SystemClipboardSnapshot> {
        lock(&self.state).writes.clone()
    }

    pub fn current_change_count(&self) -> ChangeCount {
        ChangeCount(lock(&self.state).change_count)
    }

    pub fn fail_reads(&self, fail: bool) {
        lock(&self.state).fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        lock(&self.state).fail_writes = fail;
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        Ok(self.current_change_count())
    }

    fn read_snapshot(&self) -> Result<SystemClipboardSnapshot> {
        let state = lock(&self.state);
        if state.fail_reads {
            return Err(anyhow!("clipboard read refused"));
        }
        Ok(state.snapshot.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut state = lock(&self.state);
        state.snapshot = SystemClipboardSnapshot::empty();
        state.change_count += 1;
        Ok(())
    }

    fn write_snapshot(&self, snapshot: SystemClipboardSnapshot) -> Result<()> {
        let mut state = lock(&self.state);
        if state.fail_writes {
            return Err(anyhow!("clipboard write refused"));
        }
        state.snapshot = snapshot.clone();
        state.writes.push(snapshot);
        state.change_count += 1;
        Ok(())
    }
}

/// Counts synthetic paste keystrokes.
#[derive(Debug, Default)]
pub struct RecordingKeystroke {
    sent: AtomicUsize,
    fail: AtomicBool,
}

impl RecordingKeystroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke that always fails, as when accessibility access is missing.
    pub fn failing() -> Self {
        let keystroke = Self::new();
        keystroke.fail.store(true, Ordering::SeqCst);
        keystroke
    }

    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

impl PasteKeystrokePort for RecordingKeystroke {
    fn send_paste(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("input synthesis not permitted"));
        }
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Filesystem holding only the files it was given. Everything else is unreadable.
#[derive(Debug, Default)]
pub struct InMemoryFiles {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        lock(&self.files).insert(path.into(), contents.into());
        self
    }

    pub fn remove(&self, path: &Path) {
        lock(&self.files).remove(path);
    }
}

impl FileContentPort for InMemoryFiles {
    fn is_readable(&self, path: &Path) -> bool {
        lock(&self.files).contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        lock(&self.files)
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))
    }
}

/// Snapshot exposing only plain text.
pub fn text_snapshot(text: &str) -> SystemClipboardSnapshot {
    SystemClipboardSnapshot::single(ObservedClipboardRepresentation::typed(
        ClipboardFormat::Text,
        text.as_bytes().to_vec(),
    ))
}
