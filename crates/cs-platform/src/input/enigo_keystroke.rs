use anyhow::{anyhow, Result};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::{debug, debug_span};

use cs_core::ports::PasteKeystrokePort;

/// Posts the platform paste accelerator through enigo.
///
/// A fresh `Enigo` is created per paste; it holds OS handles that are not
/// `Send` on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnigoPasteKeystroke;

impl EnigoPasteKeystroke {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "macos")]
const PASTE_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const PASTE_MODIFIER: Key = Key::Control;

impl PasteKeystrokePort for EnigoPasteKeystroke {
    fn send_paste(&self) -> Result<()> {
        let span = debug_span!("platform.send_paste");
        span.in_scope(|| {
            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| anyhow!("Failed to initialize input synthesis: {}", e))?;

            enigo
                .key(PASTE_MODIFIER, Direction::Press)
                .map_err(|e| anyhow!("Failed to press paste modifier: {}", e))?;
            let click = enigo.key(Key::Unicode('v'), Direction::Click);
            // Release the modifier even if the click failed.
            let release = enigo.key(PASTE_MODIFIER, Direction::Release);

            click.map_err(|e| anyhow!("Failed to send paste key: {}", e))?;
            release.map_err(|e| anyhow!("Failed to release paste modifier: {}", e))?;

            debug!("Sent paste keystroke");
            Ok(())
        })
    }
}
