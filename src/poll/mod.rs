//! One request/response cycle against the InnerTube `get_live_chat` endpoint.

mod wire;

use serde_json::Value;

use crate::core::net::post_json;
use crate::core::{ChatMessage, PollOutcome, Session, YtClient, YtError};
use crate::json;
use wire::{
    ACTIONS_PATH, AUTHOR_PATH, CLIENT_NAME, CONTINUATION_KINDS, CONTINUATIONS_PATH, ClientInfo,
    LiveChatRequest, RUNS_PATH, RequestContext, TEXT_RENDERER_PATH, UNKNOWN_AUTHOR,
};

impl YtClient {
    /// Exchange the session's cursor for a batch of messages and the next cursor.
    ///
    /// Does nothing (and returns the current cursor) while the session is not ready.
    /// `next_continuation` is `None` when the response carried no cursor, in
    /// which case the caller should keep polling with the one it has.
    #[tracing::instrument(skip_all, err)]
    pub async fn poll(&self, session: &Session) -> Result<PollOutcome, YtError> {
        let (api_key, continuation) = match (session.api_key(), session.continuation()) {
            (Some(k), Some(c)) if session.is_ready() => (k, c),
            _ => {
                return Ok(PollOutcome {
                    messages: Vec::new(),
                    next_continuation: session.continuation().map(str::to_string),
                });
            }
        };

        let body = LiveChatRequest {
            context: RequestContext {
                client: ClientInfo {
                    client_name: CLIENT_NAME,
                    client_version: session.client_version_or_default(),
                },
            },
            continuation,
        };

        let text = post_json(self, self.live_chat_url(api_key), &body, "chat").await?;
        let outcome = parse_chat_response(&text)?;
        tracing::debug!(
            messages = outcome.messages.len(),
            next = outcome.next_continuation.is_some(),
            "poll complete"
        );
        Ok(outcome)
    }
}

/// Parse a raw `get_live_chat` body.
///
/// Fails only if the body is not a JSON object; anything inside that does not
/// look like a plain text message is skipped.
pub fn parse_chat_response(body: &str) -> Result<PollOutcome, YtError> {
    let root: Value = serde_json::from_str(body)
        .map_err(|e| YtError::MalformedResponse(format!("chat json parse: {e}")))?;
    if !root.is_object() {
        return Err(YtError::MalformedResponse(
            "chat response root is not an object".into(),
        ));
    }

    Ok(PollOutcome {
        messages: extract_messages(&root),
        next_continuation: extract_next_continuation(&root),
    })
}

fn extract_messages(root: &Value) -> Vec<ChatMessage> {
    let Some(actions) = json::get_array(root, ACTIONS_PATH) else {
        return Vec::new();
    };

    actions.iter().filter_map(parse_text_action).collect()
}

fn parse_text_action(action: &Value) -> Option<ChatMessage> {
    let renderer = json::get(action, TEXT_RENDERER_PATH).filter(|r| r.is_object())?;

    let author = json::get_str(renderer, AUTHOR_PATH).unwrap_or(UNKNOWN_AUTHOR);
    let text = concat_runs(json::get_array(renderer, RUNS_PATH)?);

    ChatMessage::new(author, text)
}

/// Join the `text` of every run; runs without one (emoji etc.) add nothing.
fn concat_runs(runs: &[Value]) -> String {
    runs.iter()
        .filter_map(|run| json::get_str(run, &["text"]))
        .collect()
}

fn extract_next_continuation(root: &Value) -> Option<String> {
    let entries = json::get_array(root, CONTINUATIONS_PATH)?;

    entries.iter().find_map(|entry| {
        CONTINUATION_KINDS
            .iter()
            .find_map(|kind| json::get_str(entry, &[*kind, "continuation"]))
            .map(str::to_string)
    })
}
