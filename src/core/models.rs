use serde::Serialize;

/// Author name reserved for messages synthesized by the scraper itself.
pub const STATUS_AUTHOR: &str = "YTCHAT";

/// Client version sent to InnerTube when none could be scraped from the page.
pub const FALLBACK_CLIENT_VERSION: &str = "2.20250101.00.00";

const FINGERPRINT_SEPARATOR: char = '\u{1f}';

/// One chat line: who said it and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    author: String,
    text: String,
}

impl ChatMessage {
    /// Build a real chat message. Both fields are trimmed; returns `None` if either ends up empty.
    pub fn new(author: impl AsRef<str>, text: impl AsRef<str>) -> Option<Self> {
        let author = author.as_ref().trim();
        let text = text.as_ref().trim();
        if author.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self {
            author: author.to_string(),
            text: text.to_string(),
        })
    }

    /// A lifecycle or error line authored by [`STATUS_AUTHOR`]. Text is kept verbatim.
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            author: STATUS_AUTHOR.to_string(),
            text: text.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_status(&self) -> bool {
        self.author == STATUS_AUTHOR
    }

    /// Equality key for adjacent-duplicate suppression.
    pub fn fingerprint(&self) -> String {
        let mut fp = String::with_capacity(self.author.len() + self.text.len() + 1);
        fp.push_str(&self.author);
        fp.push(FINGERPRINT_SEPARATOR);
        fp.push_str(&self.text);
        fp
    }
}

/// InnerTube credentials scraped from a watch or popout page.
///
/// All fields start empty. The session is *ready* once both `api_key` and
/// `continuation` are present; `client_version` is optional and falls back to
/// [`FALLBACK_CLIENT_VERSION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) api_key: Option<String>,
    pub(crate) client_version: Option<String>,
    pub(crate) continuation: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with known tokens (e.g. restored by the caller or built in tests).
    pub fn from_tokens(
        api_key: impl Into<String>,
        client_version: Option<String>,
        continuation: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(api_key.into()),
            client_version,
            continuation: Some(continuation.into()),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn client_version(&self) -> Option<&str> {
        self.client_version.as_deref()
    }

    /// Scraped client version, or the hardcoded fallback.
    pub fn client_version_or_default(&self) -> &str {
        self.client_version
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(FALLBACK_CLIENT_VERSION)
    }

    pub fn continuation(&self) -> Option<&str> {
        self.continuation.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        non_blank(self.api_key.as_deref()) && non_blank(self.continuation.as_deref())
    }

    /// Forget every token.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the cursor with one issued by the server. Blank cursors are ignored.
    /// Returns whether the cursor changed.
    pub fn advance(&mut self, next: &str) -> bool {
        if next.trim().is_empty() || self.continuation.as_deref() == Some(next) {
            return false;
        }
        self.continuation = Some(next.to_string());
        true
    }

    pub(crate) fn fill_api_key(&mut self, value: &str) {
        fill(&mut self.api_key, value);
    }

    pub(crate) fn fill_client_version(&mut self, value: &str) {
        fill(&mut self.client_version, value);
    }

    pub(crate) fn fill_continuation(&mut self, value: &str) {
        fill(&mut self.continuation, value);
    }

    pub(crate) fn needs_api_key(&self) -> bool {
        !non_blank(self.api_key.as_deref())
    }

    pub(crate) fn needs_client_version(&self) -> bool {
        !non_blank(self.client_version.as_deref())
    }

    pub(crate) fn needs_continuation(&self) -> bool {
        !non_blank(self.continuation.as_deref())
    }
}

fn fill(slot: &mut Option<String>, value: &str) {
    if !non_blank(slot.as_deref()) && !value.trim().is_empty() {
        *slot = Some(value.to_string());
    }
}

fn non_blank(v: Option<&str>) -> bool {
    v.is_some_and(|s| !s.trim().is_empty())
}

/// Result of one chat-fetch round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Text messages in response order.
    pub messages: Vec<ChatMessage>,
    /// Cursor for the next request, if the response carried one.
    pub next_continuation: Option<String>,
}
