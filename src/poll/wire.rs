use serde::Serialize;

/* --------- Minimal serde mapping for the get_live_chat request --------- */

#[derive(Serialize)]
pub(crate) struct LiveChatRequest<'a> {
    pub context: RequestContext<'a>,
    pub continuation: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RequestContext<'a> {
    pub client: ClientInfo<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientInfo<'a> {
    pub client_name: &'a str,
    pub client_version: &'a str,
}

pub(crate) const CLIENT_NAME: &str = "WEB";

/* --------- Response paths (the response is read as an untyped tree) --------- */

pub(crate) const ACTIONS_PATH: &[&str] = &["continuationContents", "liveChatContinuation", "actions"];
pub(crate) const CONTINUATIONS_PATH: &[&str] =
    &["continuationContents", "liveChatContinuation", "continuations"];

pub(crate) const TEXT_RENDERER_PATH: &[&str] =
    &["addChatItemAction", "item", "liveChatTextMessageRenderer"];
pub(crate) const AUTHOR_PATH: &[&str] = &["authorName", "simpleText"];
pub(crate) const RUNS_PATH: &[&str] = &["message", "runs"];

/// Continuation variants in the order they are preferred within one entry.
pub(crate) const CONTINUATION_KINDS: &[&str] = &[
    "timedContinuationData",
    "invalidationContinuationData",
    "reloadContinuationData",
];

pub(crate) const UNKNOWN_AUTHOR: &str = "unknown";
