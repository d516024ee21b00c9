//! The scraping service: one background task that bootstraps a session and
//! then polls it on a fixed cadence, feeding a shared [`ChatQueue`].

mod queue;
mod scraper;
mod throttle;

pub use queue::ChatQueue;
pub use scraper::ChatScraper;
pub use throttle::{ErrorThrottle, ThrottleWindow};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::core::{ChatMessage, YtClient};
use scraper::MSG_RESTARTING;

/// Configure the polling loop.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Tick cadence. The first tick fires immediately. Default: 30s.
    pub poll_interval: Duration,
    /// How long a repeated error stays off the queue. Default: fixed 10s.
    pub throttle: ThrottleWindow,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            throttle: ThrottleWindow::default(),
        }
    }
}

/// Owns the background task and the outbound queue.
///
/// `start`/`restart` must be called from within a tokio runtime.
pub struct ScraperService {
    client: YtClient,
    cfg: ServiceConfig,
    queue: Arc<ChatQueue>,
    task: Mutex<Option<JoinHandle<()>>>,
    shut_down: AtomicBool,
}

impl ScraperService {
    pub fn new(client: YtClient) -> Self {
        Self::with_config(client, ServiceConfig::default())
    }

    pub fn with_config(client: YtClient, cfg: ServiceConfig) -> Self {
        Self {
            client,
            cfg,
            queue: Arc::new(ChatQueue::new()),
            task: Mutex::new(None),
            shut_down: AtomicBool::new(false),
        }
    }

    /// The queue a display should drain. Stays the same across restarts.
    pub fn queue(&self) -> Arc<ChatQueue> {
        Arc::clone(&self.queue)
    }

    pub async fn start(&self, url: &str) {
        self.restart(url).await;
    }

    /// Stop whatever is running and begin again from scratch with `url`.
    ///
    /// The old task has fully ended before the queue is cleared, so nothing it
    /// produced survives the restart.
    pub async fn restart(&self, url: &str) {
        let mut slot = self.task.lock().await;
        stop_task(&mut slot).await;

        if self.shut_down.load(Ordering::SeqCst) {
            tracing::warn!("restart ignored: service has been shut down");
            return;
        }

        self.queue.clear();
        self.queue.push(ChatMessage::status(MSG_RESTARTING));

        let scraper = ChatScraper::new(
            self.client.clone(),
            url,
            Arc::clone(&self.queue),
            self.cfg.throttle.clone(),
        );
        tracing::info!(url = %scraper.url(), every = ?self.cfg.poll_interval, "starting live chat scraper");
        *slot = Some(tokio::spawn(run(scraper, self.cfg.poll_interval)));
    }

    /// Stop the task for good. Safe to call more than once.
    pub async fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
        let mut slot = self.task.lock().await;
        if slot.is_some() {
            tracing::info!("shutting down live chat scraper");
        }
        stop_task(&mut slot).await;
    }

    pub async fn is_running(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScraperService {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

async fn stop_task(slot: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = slot.take() {
        handle.abort();
        // Wait until the abort lands so no half-finished tick outlives us.
        let _ = handle.await;
    }
}

async fn run(mut scraper: ChatScraper, every: Duration) {
    let mut ticker = interval(every.max(Duration::from_millis(1)));
    // An overrunning tick pushes the schedule back instead of bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        scraper.tick().await;
    }
}
