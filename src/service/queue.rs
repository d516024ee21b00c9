use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::core::ChatMessage;

/// Unbounded FIFO between the scraper (writer) and a display (reader).
///
/// Pushing never blocks on the reader; how much to retain is the reader's call.
/// Async readers can await [`ChatQueue::notified`] instead of polling.
#[derive(Debug, Default)]
pub struct ChatQueue {
    inner: Mutex<VecDeque<ChatMessage>>,
    notify: Notify,
}

impl ChatQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, msg: ChatMessage) {
        self.lock().push_back(msg);
        self.notify.notify_one();
    }

    /// Oldest message, if any.
    pub fn pop(&self) -> Option<ChatMessage> {
        self.lock().pop_front()
    }

    /// Take everything currently queued, oldest first.
    pub fn drain(&self) -> Vec<ChatMessage> {
        self.lock().drain(..).collect()
    }

    /// Take at most `max` messages, oldest first.
    pub fn drain_up_to(&self, max: usize) -> Vec<ChatMessage> {
        let mut q = self.lock();
        let n = max.min(q.len());
        q.drain(..n).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Resolves after the next push. A push that happened while nobody was
    /// waiting is remembered, so checking `is_empty` then awaiting cannot miss it.
    pub async fn notified(&self) {
        self.notify.notified().await;
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ChatMessage>> {
        // poisoned only by a panicking reader; the deque itself is intact
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
