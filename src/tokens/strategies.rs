use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use super::utils::object_literal_at;
use crate::json;

static YTCFG_SET_RE: OnceLock<Regex> = OnceLock::new();
static API_KEY_FLEX_RE: OnceLock<Regex> = OnceLock::new();
static CLIENT_VERSION_FLEX_RE: OnceLock<Regex> = OnceLock::new();
static CONTINUATION_NEARBY_RE: OnceLock<Regex> = OnceLock::new();
static INITIAL_DATA_RE: OnceLock<Regex> = OnceLock::new();

fn ytcfg_set_regex() -> &'static Regex {
    YTCFG_SET_RE
        .get_or_init(|| Regex::new(r"ytcfg\.set\(").expect("Failed to compile ytcfg regex"))
}

fn api_key_flex_regex() -> &'static Regex {
    API_KEY_FLEX_RE.get_or_init(|| {
        Regex::new(r#"INNERTUBE_API_KEY"?\s*[:=]\s*"([^"]+)""#)
            .expect("Failed to compile API key regex")
    })
}

fn client_version_flex_regex() -> &'static Regex {
    CLIENT_VERSION_FLEX_RE.get_or_init(|| {
        Regex::new(r#"INNERTUBE_(?:CLIENT_VERSION|CONTEXT_CLIENT_VERSION)"?\s*[:=]\s*"([^"]+)""#)
            .expect("Failed to compile client version regex")
    })
}

fn continuation_nearby_regex() -> &'static Regex {
    CONTINUATION_NEARBY_RE.get_or_init(|| {
        Regex::new(r#"(?s)"liveChatContinuation".*?"continuation"\s*:\s*"([^"]+)""#)
            .expect("Failed to compile liveChatContinuation regex")
    })
}

fn initial_data_regex() -> &'static Regex {
    INITIAL_DATA_RE.get_or_init(|| {
        Regex::new(r#"ytInitialData"?\]?\s*=\s*"#).expect("Failed to compile ytInitialData regex")
    })
}

/// Tokens found in an embedded `ytcfg.set({...})` blob.
#[derive(Debug, Default)]
pub(crate) struct ConfigTokens {
    pub api_key: Option<String>,
    pub client_version: Option<String>,
}

/// Strategy A: parse every `ytcfg.set({...})` call; first value wins per field.
pub(crate) fn try_ytcfg_blobs(html: &str) -> ConfigTokens {
    let mut found = ConfigTokens::default();

    for (i, m) in ytcfg_set_regex().find_iter(html).enumerate() {
        let Some(literal) = object_literal_at(html, m.end()) else {
            tracing::debug!("ytcfg[{i}]: unbalanced object literal");
            continue;
        };
        let cfg = match serde_json::from_str::<Value>(literal) {
            Ok(v @ Value::Object(_)) => v,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!("ytcfg[{i}]: parse failed: {e}");
                continue;
            }
        };

        if found.api_key.is_none() {
            found.api_key = json::get_str(&cfg, &["INNERTUBE_API_KEY"]).map(str::to_string);
        }
        if found.client_version.is_none() {
            found.client_version = json::get_str(&cfg, &["INNERTUBE_CONTEXT_CLIENT_VERSION"])
                .or_else(|| json::get_str(&cfg, &["INNERTUBE_CLIENT_VERSION"]))
                .map(str::to_string);
        }
        if found.api_key.is_some() && found.client_version.is_some() {
            break;
        }
    }

    found
}

/// Strategy B: loose `INNERTUBE_API_KEY` match anywhere in the page.
pub(crate) fn try_api_key_pattern(html: &str) -> Option<String> {
    capture1(api_key_flex_regex(), html)
}

/// Strategy B: loose client version match anywhere in the page.
pub(crate) fn try_client_version_pattern(html: &str) -> Option<String> {
    capture1(client_version_flex_regex(), html)
}

/// Strategy C: a `"continuation"` that follows `"liveChatContinuation"` in the text.
pub(crate) fn try_continuation_nearby(html: &str) -> Option<String> {
    capture1(continuation_nearby_regex(), html)
}

/// Strategy D: parse `ytInitialData = {...}` and search it depth-first.
pub(crate) fn try_initial_data_continuation(html: &str) -> Option<String> {
    for (i, m) in initial_data_regex().find_iter(html).enumerate() {
        let Some(literal) = object_literal_at(html, m.end()) else {
            continue;
        };
        match serde_json::from_str::<Value>(literal) {
            Ok(data) => {
                if let Some(c) = json::find_first_string(&data, "continuation") {
                    return Some(c.to_string());
                }
                tracing::debug!("ytInitialData[{i}]: parsed but holds no continuation");
            }
            Err(e) => tracing::debug!("ytInitialData[{i}]: parse failed: {e}"),
        }
    }
    None
}

fn capture1(re: &Regex, s: &str) -> Option<String> {
    re.captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
