#[cfg(feature = "test-mode")]
use std::env;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN, REFERER};
use serde::Serialize;
use url::Url;

use super::client::YtClient;
use super::client::constants::{
    ACCEPT_HTML, ACCEPT_JSON, ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_VALUE, API_REFERER,
    DEFAULT_BASE_WATCH, ORIGIN as ORIGIN_VALUE,
};
use super::error::YtError;

/// An HTML page as fetched, kept together with what we need for diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct HtmlPage {
    pub status: u16,
    /// Final URI after redirects.
    pub url: Url,
    /// Empty when the server answered with a non-2xx status.
    pub body: String,
}

/// Read the response body as text.
/// In `test-mode`, if `YTCHAT_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("YTCHAT_RECORD").ok().as_deref() == Some("1") {
            if let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text) {
                tracing::warn!("YTCHAT_RECORD: failed to write fixture for {_key}: {e}");
            }
        }
    }

    Ok(text)
}

/// GET an HTML page with browser-like headers and a watch-page Referer.
/// Non-2xx answers are returned with an empty body rather than as an error.
pub(crate) async fn get_html(
    client: &YtClient,
    url: Url,
    video_id: &str,
    endpoint: &str,
) -> Result<HtmlPage, YtError> {
    let referer = format!("{DEFAULT_BASE_WATCH}?v={video_id}");
    let resp = client
        .http()
        .get(url)
        .header(ACCEPT, ACCEPT_HTML)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
        .header(ORIGIN, ORIGIN_VALUE)
        .header(REFERER, referer)
        .send()
        .await?;

    let status = resp.status();
    let final_url = resp.url().clone();
    tracing::debug!(status = status.as_u16(), url = %final_url, "fetched {endpoint} page");

    let body = if status.is_success() {
        get_text(resp, endpoint, video_id, "html").await?
    } else {
        String::new()
    };

    Ok(HtmlPage {
        status: status.as_u16(),
        url: final_url,
        body,
    })
}

/// POST a JSON body to the InnerTube endpoint and return the raw response text.
/// The request URL carries the api key, so it is kept out of every error.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &YtClient,
    url: Url,
    body: &B,
    fixture_key: &str,
) -> Result<String, YtError> {
    let resp = client
        .http()
        .post(url.clone())
        .header(ACCEPT, ACCEPT_JSON)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
        .header(CONTENT_TYPE, ACCEPT_JSON)
        .header(ORIGIN, ORIGIN_VALUE)
        .header(REFERER, API_REFERER)
        .json(body)
        .send()
        .await
        .map_err(|e| YtError::Http(e.without_url()))?;

    if !resp.status().is_success() {
        return Err(YtError::Status {
            status: resp.status().as_u16(),
            url: redact_key(&url),
        });
    }

    get_text(resp, "get_live_chat", fixture_key, "json")
        .await
        .map_err(|e| YtError::Http(e.without_url()))
}

/// Drop the api key from a URL before it ends up in an error message.
fn redact_key(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}
