//! Use case for starting the clipboard watcher
//! 启动剪贴板监控器的用例

use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use cs_core::ports::{WatcherControlError, WatcherControlPort};

/// Error type for clipboard watcher startup failures.
/// 剪贴板监控器启动失败的错误类型。
#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StartClipboardWatcherError::StartFailed(err.to_string())
    }
}

/// Use case for starting the clipboard watcher.
///
/// ## Behavior / 行为
/// - Asks the polling runtime to begin ticking the history store
/// - Starting an already-running watcher is a no-op
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");

            self.watcher_control.start_watcher().await?;

            info!("Clipboard watcher started successfully");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        WatcherControl {}

        #[async_trait]
        impl WatcherControlPort for WatcherControl {
            async fn start_watcher(&self) -> Result<(), WatcherControlError>;
            async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
        }
    }

    #[tokio::test]
    async fn test_start_clipboard_watcher_succeeds() {
        let mut watcher = MockWatcherControl::new();
        watcher.expect_start_watcher().times(1).returning(|| Ok(()));
        let use_case = StartClipboardWatcher::new(Arc::new(watcher));

        let result = use_case.execute().await;

        assert!(result.is_ok(), "start_watcher should succeed");
    }

    #[tokio::test]
    async fn test_start_clipboard_watcher_propagates_error() {
        let mut watcher = MockWatcherControl::new();
        watcher
            .expect_start_watcher()
            .returning(|| Err(WatcherControlError::StartFailed("mock failure".to_string())));
        let use_case = StartClipboardWatcher::new(Arc::new(watcher));

        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(err, StartClipboardWatcherError::StartFailed(msg) if msg.contains("mock failure")));
    }
}
