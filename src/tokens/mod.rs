//! Recover InnerTube session tokens from server-rendered HTML.
//!
//! Pages are not consistent about where the tokens live, so several
//! strategies are tried in order and each only fills what is still missing:
//!
//! 1. `ytcfg.set({...})` config blobs (api key, client version)
//! 2. loose `INNERTUBE_*` patterns over the raw page
//! 3. a `continuation` next to `liveChatContinuation`
//! 4. a depth-first search through the `ytInitialData` blob
//!
//! Nothing here fails: malformed blobs are skipped.

mod strategies;
pub(crate) mod utils;

use crate::core::Session;
use strategies::{
    try_api_key_pattern, try_client_version_pattern, try_continuation_nearby,
    try_initial_data_continuation, try_ytcfg_blobs,
};

/// Extract a fresh session from `html`. `None` unless api key and continuation were both found.
pub fn extract_tokens(html: &str) -> Option<Session> {
    let mut session = Session::new();
    fill_session(&mut session, html).then_some(session)
}

/// Fill the still-empty fields of `session` from `html`.
///
/// Returns whether the session is ready (api key and continuation present).
/// A missing client version never blocks readiness.
pub fn fill_session(session: &mut Session, html: &str) -> bool {
    if html.trim().is_empty() {
        tracing::debug!("fill_session: empty body");
        return session.is_ready();
    }

    if session.needs_api_key() || session.needs_client_version() {
        let cfg = try_ytcfg_blobs(html);
        if let Some(key) = cfg.api_key.as_deref() {
            session.fill_api_key(key);
        }
        if let Some(ver) = cfg.client_version.as_deref() {
            session.fill_client_version(ver);
        }
        tracing::debug!(
            api_key = cfg.api_key.is_some(),
            client_version = cfg.client_version.is_some(),
            "strategy ytcfg"
        );
    }

    if session.needs_api_key() {
        if let Some(key) = try_api_key_pattern(html) {
            tracing::debug!("strategy api key pattern hit");
            session.fill_api_key(&key);
        }
    }
    if session.needs_client_version() {
        if let Some(ver) = try_client_version_pattern(html) {
            tracing::debug!("strategy client version pattern hit");
            session.fill_client_version(&ver);
        }
    }

    if session.needs_continuation() {
        if let Some(c) = try_continuation_nearby(html) {
            tracing::debug!(len = c.len(), "strategy liveChatContinuation hit");
            session.fill_continuation(&c);
        }
    }
    if session.needs_continuation() {
        if let Some(c) = try_initial_data_continuation(html) {
            tracing::debug!(len = c.len(), "strategy ytInitialData hit");
            session.fill_continuation(&c);
        }
    }

    let ready = session.is_ready();
    if !ready {
        tracing::debug!(
            api_key = !session.needs_api_key(),
            continuation = !session.needs_continuation(),
            "all strategies exhausted"
        );
    }
    ready
}
