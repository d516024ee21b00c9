//! Session bootstrap: stream URL → video id → popout/watch HTML → tokens.

mod video_id;

pub use video_id::extract_video_id;

use crate::core::client::constants::SNIPPET_LEN;
use crate::core::net::get_html;
use crate::core::{FALLBACK_CLIENT_VERSION, Session, YtClient, YtError};
use crate::tokens::{fill_session, utils::one_line_snippet};

impl YtClient {
    /// Resolve `stream_url` to a video id and scrape a ready [`Session`] for it.
    ///
    /// The popout chat page is tried first since it is small and usually
    /// enough; the watch page is the fallback. Tokens found on the popout page
    /// are kept while the watch page fills in the rest.
    #[tracing::instrument(skip(self), err)]
    pub async fn init_from_url(&self, stream_url: &str) -> Result<Session, YtError> {
        let video_id = extract_video_id(stream_url).ok_or_else(|| YtError::NoVideoId {
            url: stream_url.trim().to_string(),
        })?;

        let mut session = Session::new();
        let finish = |mut s: Session| {
            s.fill_client_version(FALLBACK_CLIENT_VERSION);
            s
        };

        let popout = get_html(self, self.popout_url(&video_id), &video_id, "popout_html").await?;
        if fill_session(&mut session, &popout.body) {
            tracing::info!(%video_id, "tokens found on popout page");
            return Ok(finish(session));
        }

        let watch = get_html(self, self.watch_url(&video_id), &video_id, "watch_html").await?;
        if fill_session(&mut session, &watch.body) {
            tracing::info!(%video_id, "tokens found on watch page");
            return Ok(finish(session));
        }

        Err(YtError::TokensNotFound {
            popout_status: popout.status,
            popout_url: popout.url.to_string(),
            watch_status: watch.status,
            watch_url: watch.url.to_string(),
            snippet: one_line_snippet(&watch.body, SNIPPET_LEN),
        })
    }
}
