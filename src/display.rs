//! Consumer-side retention for a chat overlay.

use std::collections::VecDeque;

use crate::core::ChatMessage;
use crate::service::ChatQueue;

/// Most entries pulled from the queue per frame.
pub const DRAIN_PER_FRAME: usize = 25;
/// Entries kept on screen.
pub const MAX_ENTRIES: usize = 30;

/// The last few chat lines a display shows, fed from a [`ChatQueue`] once per frame.
#[derive(Debug, Clone)]
pub struct ChatBacklog {
    entries: VecDeque<ChatMessage>,
    max_entries: usize,
    drain_per_frame: usize,
}

impl Default for ChatBacklog {
    fn default() -> Self {
        Self::new(MAX_ENTRIES, DRAIN_PER_FRAME)
    }
}

impl ChatBacklog {
    pub fn new(max_entries: usize, drain_per_frame: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
            drain_per_frame,
        }
    }

    /// Move up to one frame's worth of messages from `queue` into the backlog.
    /// Returns the messages accepted this frame, oldest first.
    pub fn pump(&mut self, queue: &ChatQueue) -> Vec<ChatMessage> {
        let mut accepted = Vec::new();
        for msg in queue.drain_up_to(self.drain_per_frame) {
            if msg.author().trim().is_empty() || msg.text().trim().is_empty() {
                continue;
            }
            self.entries.push_back(msg.clone());
            accepted.push(msg);
        }
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        accepted
    }

    pub fn entries(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
