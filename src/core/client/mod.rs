//! Public client surface + builder.
//! Endpoint defaults, UA and timeouts live in `constants`.

pub(crate) mod constants;

use crate::core::YtError;
use constants::{
    DEFAULT_BASE_POPOUT, DEFAULT_BASE_WATCH, DEFAULT_CONNECT_TIMEOUT, DEFAULT_LIVE_CHAT_API,
    DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the watch/popout pages and the InnerTube chat endpoint.
///
/// Cheap to clone; clones share the connection pool and the cookie store, so
/// cookies set while bootstrapping are replayed on chat-fetch requests.
#[derive(Debug, Clone)]
pub struct YtClient {
    http: Client,
    base_watch: Url,
    base_popout: Url,
    live_chat_api: Url,
}

impl Default for YtClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YtClient {
    /// Create a new builder.
    pub fn builder() -> YtClientBuilder {
        YtClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// `<base_watch>?v=<id>`
    pub(crate) fn watch_url(&self, video_id: &str) -> Url {
        let mut url = self.base_watch.clone();
        url.query_pairs_mut().append_pair("v", video_id);
        url
    }

    /// `<base_popout>?is_popout=1&v=<id>`
    pub(crate) fn popout_url(&self, video_id: &str) -> Url {
        let mut url = self.base_popout.clone();
        url.query_pairs_mut()
            .append_pair("is_popout", "1")
            .append_pair("v", video_id);
        url
    }

    /// `<live_chat_api>?key=<apiKey>`
    pub(crate) fn live_chat_url(&self, api_key: &str) -> Url {
        let mut url = self.live_chat_api.clone();
        url.query_pairs_mut().append_pair("key", api_key);
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YtClientBuilder {
    user_agent: Option<String>,
    base_watch: Option<Url>,
    base_popout: Option<Url>,
    live_chat_api: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YtClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the watch page base (e.g., `https://www.youtube.com/watch`).
    pub fn base_watch(mut self, url: Url) -> Self {
        self.base_watch = Some(url);
        self
    }

    /// Override the popout chat page base (e.g., `https://www.youtube.com/live_chat`).
    pub fn base_popout(mut self, url: Url) -> Self {
        self.base_popout = Some(url);
        self
    }

    /// Override the chat-fetch endpoint (e.g., `https://www.youtube.com/youtubei/v1/live_chat/get_live_chat`).
    pub fn live_chat_api(mut self, url: Url) -> Self {
        self.live_chat_api = Some(url);
        self
    }

    /// Per-request timeout. Default: 15s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Connect timeout. Default: 10s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<YtClient, YtError> {
        let base_watch = match self.base_watch {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_WATCH)?,
        };
        let base_popout = match self.base_popout {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_POPOUT)?,
        };
        let live_chat_api = match self.live_chat_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_LIVE_CHAT_API)?,
        };

        // cookie_store(true) accepts every cookie and replays it on later requests.
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        Ok(YtClient {
            http,
            base_watch,
            base_popout,
            live_chat_api,
        })
    }
}
