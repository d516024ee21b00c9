//! ytchat-rs: live chat harvester for YouTube streams.
//!
//! Scrapes InnerTube session tokens (api key, client version, continuation)
//! from a stream's popout or watch page, then polls the `get_live_chat`
//! endpoint and feeds text messages into a [`ChatQueue`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), ytchat_rs::YtError> {
//! use ytchat_rs::{ScraperService, YtClient};
//!
//! let service = ScraperService::new(YtClient::builder().build()?);
//! service.start("https://www.youtube.com/watch?v=jfKfPfyJRdk").await;
//!
//! let queue = service.queue();
//! loop {
//!     queue.notified().await;
//!     for msg in queue.drain() {
//!         println!("{}: {}", msg.author(), msg.text());
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod host;
pub mod json;
pub mod poll;
pub mod service;
pub mod session;
pub mod tokens;

pub use config::{ChatConfig, ConfigStore, DEFAULT_CHAT_URL, is_valid_url};
pub use core::{
    ChatMessage, ErrorKind, FALLBACK_CLIENT_VERSION, PollOutcome, STATUS_AUTHOR, Session,
    YtClient, YtClientBuilder, YtError,
};
pub use display::ChatBacklog;
pub use host::Host;
pub use poll::parse_chat_response;
pub use service::{ChatQueue, ChatScraper, ErrorThrottle, ScraperService, ServiceConfig, ThrottleWindow};
pub use session::extract_video_id;
pub use tokens::{extract_tokens, fill_session};
