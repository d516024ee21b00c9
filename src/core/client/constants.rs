//! Centralized constants for default endpoints, headers and timeouts.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Origin sent with every request; the platform checks it on the InnerTube endpoint.
pub(crate) const ORIGIN: &str = "https://www.youtube.com";

/// Referer for chat-fetch POSTs.
pub(crate) const API_REFERER: &str = "https://www.youtube.com/";

pub(crate) const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub(crate) const ACCEPT_JSON: &str = "application/json";
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Watch page base (`v=<id>` is appended). Also used to build the Referer.
pub(crate) const DEFAULT_BASE_WATCH: &str = "https://www.youtube.com/watch";

/// Popout chat page base (`is_popout=1&v=<id>` is appended).
pub(crate) const DEFAULT_BASE_POPOUT: &str = "https://www.youtube.com/live_chat";

/// InnerTube chat-fetch endpoint (`key=<apiKey>` is appended).
pub(crate) const DEFAULT_LIVE_CHAT_API: &str =
    "https://www.youtube.com/youtubei/v1/live_chat/get_live_chat";

pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Max chars of HTML kept in `TokensNotFound` diagnostics.
pub(crate) const SNIPPET_LEN: usize = 220;
