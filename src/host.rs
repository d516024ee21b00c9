//! Ties a [`ScraperService`] to a [`ConfigStore`]: start once, restart on
//! every accepted URL change, shut down on request.

use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::config::ConfigStore;
use crate::service::{ChatQueue, ScraperService};

/// A running scraper plus the watcher that restarts it when the URL changes.
pub struct Host {
    service: Arc<ScraperService>,
    watcher: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl Host {
    /// Start `service` on the store's current URL and follow later changes.
    pub async fn start(service: ScraperService, config: &ConfigStore) -> Self {
        let service = Arc::new(service);
        let mut rx = config.subscribe();
        let url = rx.borrow_and_update().clone();
        service.start(&url).await;

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let watcher = tokio::spawn(follow_config(Arc::clone(&service), rx, stop_rx));

        Self {
            service,
            watcher: Some(watcher),
            stop_tx: Some(stop_tx),
        }
    }

    /// Queue for the display surface.
    pub fn queue(&self) -> Arc<ChatQueue> {
        self.service.queue()
    }

    pub fn service(&self) -> &Arc<ScraperService> {
        &self.service
    }

    /// Stop following config and shut the service down. Safe to call more than once.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.watcher.take() {
            let _ = join.await;
        }
        self.service.shutdown().await;
    }
}

async fn follow_config(
    service: Arc<ScraperService>,
    mut rx: watch::Receiver<String>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    // store dropped; keep the current URL running
                    break;
                }
                let url = rx.borrow_and_update().clone();
                tracing::info!(%url, "config changed, restarting scraper");
                service.restart(&url).await;
            }
            _ = &mut stop_rx => break,
        }
    }
}
