use anyhow::Result;

/// Synthetic input port: delivers the platform paste accelerator
/// (Cmd+V on macOS, Ctrl+V elsewhere) to the foreground application.
pub trait PasteKeystrokePort: Send + Sync {
    /// Post key-down and key-up for the paste accelerator.
    fn send_paste(&self) -> Result<()>;
}
