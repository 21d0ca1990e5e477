//! Polling clipboard runtime.
//!
//! Drives a [`ClipboardPollHandler`] from a background task on a fixed
//! interval. Lifecycle is exposed through [`WatcherControlPort`]; both
//! start and stop are idempotent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use cs_core::ports::{ClipboardPollHandler, PollOutcome, WatcherControlError, WatcherControlPort};

/// Lower bound on the tick period; `tokio::time::interval` rejects zero.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct PollingClipboardRuntime {
    handler: Arc<dyn ClipboardPollHandler>,
    period: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingClipboardRuntime {
    pub fn new(handler: Arc<dyn ClipboardPollHandler>, period: Duration) -> Self {
        Self {
            handler,
            period: period.max(MIN_POLL_INTERVAL),
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

#[async_trait]
impl WatcherControlPort for PollingClipboardRuntime {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Clipboard watcher already running");
            return Ok(()); // 幂等
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                self.running.store(false, Ordering::Release);
                return Err(WatcherControlError::StartFailed(err.to_string()));
            }
        };

        let handler = self.handler.clone();
        let period = self.period;

        let handle = runtime.spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match handler.poll_once().await {
                    Ok(PollOutcome::Inserted) => debug!("Poll tick captured a new entry"),
                    Ok(outcome) => trace!(?outcome, "Poll tick"),
                    Err(err) => warn!(error = %format!("{err:#}"), "Clipboard check failed"),
                }
            }
        });

        *self.handle.lock().await = Some(handle);

        info!(period_ms = period.as_millis() as u64, "Clipboard polling started");
        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort(); // polling 是可直接 abort 的
        }

        info!("Clipboard polling stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::sleep;

    struct CountingHandler {
        ticks: AtomicUsize,
        fail: bool,
    }

    impl CountingHandler {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                ticks: AtomicUsize::new(0),
                fail,
            })
        }

        fn ticks(&self) -> usize {
            self.ticks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClipboardPollHandler for CountingHandler {
        async fn poll_once(&self) -> anyhow::Result<PollOutcome> {
            self.ticks.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            Ok(PollOutcome::Unchanged)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_on_the_configured_period() {
        let handler = CountingHandler::new(false);
        let runtime = PollingClipboardRuntime::new(handler.clone(), Duration::from_millis(500));

        runtime.start_watcher().await.unwrap();
        sleep(Duration::from_millis(1_250)).await;

        // Immediate first tick, then at 500 ms and 1000 ms.
        assert_eq!(handler.ticks(), 3);
        runtime.stop_watcher().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let handler = CountingHandler::new(false);
        let runtime = PollingClipboardRuntime::new(handler.clone(), Duration::from_millis(500));

        runtime.start_watcher().await.unwrap();
        runtime.start_watcher().await.unwrap();
        sleep(Duration::from_millis(750)).await;

        assert_eq!(handler.ticks(), 2);
        assert!(runtime.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_ticking() {
        let handler = CountingHandler::new(false);
        let runtime = PollingClipboardRuntime::new(handler.clone(), Duration::from_millis(500));

        runtime.start_watcher().await.unwrap();
        sleep(Duration::from_millis(750)).await;
        runtime.stop_watcher().await.unwrap();
        let ticks = handler.ticks();
        sleep(Duration::from_secs(5)).await;

        assert_eq!(handler.ticks(), ticks);
        assert!(!runtime.is_running());
        runtime.stop_watcher().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn handler_errors_do_not_stop_the_loop() {
        let handler = CountingHandler::new(true);
        let runtime = PollingClipboardRuntime::new(handler.clone(), Duration::from_millis(500));

        runtime.start_watcher().await.unwrap();
        sleep(Duration::from_millis(1_250)).await;

        assert_eq!(handler.ticks(), 3);
    }

    #[test]
    fn start_outside_a_runtime_fails_and_stays_stopped() {
        use std::future::Future;
        use std::task::{Context, Poll, Waker};

        let runtime =
            PollingClipboardRuntime::new(CountingHandler::new(false), Duration::from_millis(500));
        let mut start = std::pin::pin!(runtime.start_watcher());

        let result = match start.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
            Poll::Ready(result) => result,
            Poll::Pending => panic!("start should complete without waiting"),
        };

        assert!(matches!(result, Err(WatcherControlError::StartFailed(_))));
        assert!(!runtime.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_clamped() {
        let handler = CountingHandler::new(false);
        let runtime = PollingClipboardRuntime::new(handler.clone(), Duration::ZERO);

        runtime.start_watcher().await.unwrap();
        sleep(Duration::from_millis(25)).await;

        assert!(handler.ticks() >= 2);
    }
}
