//! Persisted chat URL with validation and change notification.
//!
//! Stored as TOML:
//!
//! ```toml
//! chatUrl = "https://www.youtube.com/watch?v=jfKfPfyJRdk"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use url::Url;

use crate::core::YtError;

/// URL used when no config exists yet. Not a stream, so ticks report `NoVideoId`.
pub const DEFAULT_CHAT_URL: &str = "https://example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(rename = "chatUrl", default = "default_chat_url")]
    pub chat_url: String,
}

fn default_chat_url() -> String {
    DEFAULT_CHAT_URL.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            chat_url: default_chat_url(),
        }
    }
}

/// Non-empty, `http://` or `https://`, and parseable as a URI.
pub fn is_valid_url(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() || !(s.starts_with("http://") || s.starts_with("https://")) {
        return false;
    }
    Url::parse(s).is_ok()
}

/// Holds the current chat URL, optionally backed by a file, and broadcasts accepted changes.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    tx: watch::Sender<String>,
}

impl ConfigStore {
    /// A store that lives only in memory.
    pub fn in_memory(url: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(url.into().trim().to_string());
        Self { path: None, tx }
    }

    /// Load from `path`, or start from defaults (without writing) if the file does not exist.
    ///
    /// A stored URL that fails [`is_valid_url`] is replaced by [`DEFAULT_CHAT_URL`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, YtError> {
        let path = path.as_ref().to_path_buf();
        let cfg = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            toml::from_str::<ChatConfig>(&raw)?
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            ChatConfig::default()
        };

        let url = if is_valid_url(&cfg.chat_url) {
            cfg.chat_url.trim().to_string()
        } else {
            tracing::warn!(
                path = %path.display(),
                stored = %cfg.chat_url,
                "stored chat url is invalid, using default"
            );
            DEFAULT_CHAT_URL.to_string()
        };

        let (tx, _rx) = watch::channel(url);
        Ok(Self {
            path: Some(path),
            tx,
        })
    }

    /// Current URL (trimmed).
    pub fn url(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every accepted URL change.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Validate, persist and publish a new URL.
    ///
    /// Returns `Ok(false)` when the URL equals the current one (nothing is
    /// written or published).
    pub fn set_url(&self, url: &str) -> Result<bool, YtError> {
        let url = url.trim();
        if !is_valid_url(url) {
            return Err(YtError::InvalidUrl(url.to_string()));
        }
        if *self.tx.borrow() == url {
            return Ok(false);
        }

        if let Some(path) = &self.path {
            let cfg = ChatConfig {
                chat_url: url.to_string(),
            };
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, toml::to_string(&cfg)?)?;
        }

        self.tx.send_replace(url.to_string());
        tracing::info!(%url, "chat url changed");
        Ok(true)
    }
}
