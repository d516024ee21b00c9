use std::sync::Arc;
use tokio::time::Instant;

use super::queue::ChatQueue;
use super::throttle::{ErrorThrottle, ThrottleWindow};
use crate::core::{ChatMessage, Session, YtClient, YtError};

pub(crate) const MSG_RESTARTING: &str = "Restarting live chat fetch...";
pub(crate) const MSG_CONNECTED: &str = "Connected. Polling chat...";

/// The per-tick state machine: bootstrap once, then poll, dedupe and enqueue.
///
/// Owns the session, the last fingerprint and the error throttle. The
/// [`ScraperService`](super::ScraperService) keeps exactly one of these inside
/// its background task and builds a fresh one on every restart; it can also be
/// driven by hand, one [`tick`](Self::tick) at a time.
pub struct ChatScraper {
    client: YtClient,
    url: String,
    queue: Arc<ChatQueue>,
    session: Session,
    initialized: bool,
    last_fingerprint: Option<String>,
    throttle: ErrorThrottle,
}

impl ChatScraper {
    pub fn new(
        client: YtClient,
        url: &str,
        queue: Arc<ChatQueue>,
        throttle: ThrottleWindow,
    ) -> Self {
        Self {
            client,
            url: url.trim().to_string(),
            queue,
            session: Session::new(),
            initialized: false,
            last_fingerprint: None,
            throttle: ErrorThrottle::new(throttle),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run one tick. Never fails: errors become (throttled) status lines.
    pub async fn tick(&mut self) {
        if self.url.is_empty() {
            return;
        }

        if !self.initialized {
            match self.client.init_from_url(&self.url).await {
                Ok(session) => {
                    self.session = session;
                    self.initialized = true;
                    self.queue.push(ChatMessage::status(MSG_CONNECTED));
                    tracing::info!(url = %self.url, "live chat session established");
                }
                Err(e) => {
                    self.report_failure(&e, Instant::now());
                    return;
                }
            }
        }

        match self.client.poll(&self.session).await {
            Ok(outcome) => {
                if let Some(next) = outcome.next_continuation.as_deref() {
                    self.session.advance(next);
                }
                let mut enqueued = 0usize;
                for msg in outcome.messages {
                    let fp = msg.fingerprint();
                    if self.last_fingerprint.as_deref() == Some(fp.as_str()) {
                        continue;
                    }
                    self.last_fingerprint = Some(fp);
                    self.queue.push(msg);
                    enqueued += 1;
                }
                tracing::trace!(enqueued, "tick complete");
            }
            Err(e) => self.report_failure(&e, Instant::now()),
        }
    }

    /// Log every failure; surface it to the queue unless the throttle says it was just reported.
    pub(crate) fn report_failure(&mut self, err: &YtError, now: Instant) {
        let signature = err.signature();
        if !self.throttle.should_report(&signature, now) {
            tracing::warn!(kind = %err.kind(), error = %err, "tick failed (status suppressed)");
            return;
        }
        tracing::warn!(kind = %err.kind(), error = %err, "tick failed");

        self.queue
            .push(ChatMessage::status(format!("Error: {}", err.kind())));
        let text = err.to_string();
        if !text.trim().is_empty() {
            self.queue.push(ChatMessage::status(text));
        }
    }
}
