//! Dependency wiring.
//!
//! Builds the platform adapters, hands them to the history store and
//! attaches the polling runtime.

use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

use cs_app::usecases::{ListHistoryPreviews, PasteHistorySlot, StartClipboardWatcher};
use cs_app::{HistoryStore, HistoryStoreDeps, RestoreTiming};
use cs_core::config::AppConfig;
use cs_core::ports::{ClipboardPollHandler, WatcherControlPort};
use cs_core::shortcut::{Modifier, ShortcutBinding};
use cs_platform::{EnigoPasteKeystroke, LocalClipboard, LocalFileReader, PollingClipboardRuntime};

/// Everything the shell needs at runtime.
pub struct AppContext {
    pub store: HistoryStore,
    pub watcher: Arc<dyn WatcherControlPort>,
    pub bindings: Vec<ShortcutBinding>,
}

impl AppContext {
    /// Assemble the context around already-built ports.
    pub fn from_deps(deps: HistoryStoreDeps, config: &AppConfig) -> anyhow::Result<Self> {
        let store = HistoryStore::new(deps, RestoreTiming::from(config))?;
        let handler: Arc<dyn ClipboardPollHandler> = Arc::new(store.clone());
        let watcher = Arc::new(PollingClipboardRuntime::new(handler, config.poll_interval()));

        Ok(Self {
            store,
            watcher,
            bindings: shortcut_bindings(config),
        })
    }

    pub fn paste_history_slot(&self) -> PasteHistorySlot {
        PasteHistorySlot::new(self.store.clone())
    }

    pub fn list_history_previews(&self) -> ListHistoryPreviews {
        ListHistoryPreviews::new(self.store.clone())
    }

    pub fn start_clipboard_watcher(&self) -> StartClipboardWatcher {
        StartClipboardWatcher::new(self.watcher.clone())
    }
}

/// Wire the real platform adapters.
pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<AppContext> {
    let clipboard = LocalClipboard::new().context("Failed to open system clipboard")?;

    if !cs_platform::input::has_input_permission() {
        warn!("Accessibility access not granted; paste keystrokes will not reach other apps");
    }

    let deps = HistoryStoreDeps {
        clipboard: Arc::new(clipboard),
        keystroke: Arc::new(EnigoPasteKeystroke::new()),
        files: Arc::new(LocalFileReader::new()),
    };

    let context = AppContext::from_deps(deps, config)?;
    info!(
        poll_interval_ms = config.poll_interval_ms,
        restore_delay_ms = config.restore_delay_ms,
        restore_settle_ms = config.restore_settle_ms,
        "Dependencies wired"
    );
    Ok(context)
}

/// Paste slot bindings from the configured modifier list.
///
/// An unparsable list falls back to the default Command+Shift bindings.
fn shortcut_bindings(config: &AppConfig) -> Vec<ShortcutBinding> {
    match Modifier::parse_list(&config.shortcut_modifiers) {
        Ok(modifiers) => ShortcutBinding::with_modifiers(&modifiers),
        Err(err) => {
            warn!(
                error = %err,
                modifiers = %config.shortcut_modifiers,
                "Invalid shortcut modifiers, using defaults"
            );
            ShortcutBinding::defaults()
        }
    }
}
