use async_trait::async_trait;

/// Starts and stops whatever drives [`ClipboardPollHandler`] ticks.
///
/// Calling either method twice in a row is harmless; the second call is a no-op.
///
/// [`ClipboardPollHandler`]: super::ClipboardPollHandler
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Stopping never fails; a watcher that is not running is left alone.
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    /// The polling task could not be spawned, e.g. no async runtime is active.
    #[error("clipboard watcher could not be started: {0}")]
    StartFailed(String),
}
