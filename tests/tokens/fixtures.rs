use crate::common::{
    DEMO_VIDEO, POPOUT_API_KEY, POPOUT_CLIENT_VERSION, POPOUT_CONTINUATION, WATCH_API_KEY,
    WATCH_CLIENT_VERSION, WATCH_CONTINUATION, chat_page, fixture,
};
use ytchat_rs::{extract_tokens, fill_session};

#[test]
fn popout_fixture_yields_ready_session() {
    let html = fixture("popout_html", DEMO_VIDEO, "html");
    let s = extract_tokens(&html).expect("popout page should carry tokens");

    assert_eq!(s.api_key(), Some(POPOUT_API_KEY));
    // INNERTUBE_CONTEXT_CLIENT_VERSION beats INNERTUBE_CLIENT_VERSION
    assert_eq!(s.client_version(), Some(POPOUT_CLIENT_VERSION));
    // found by walking ytInitialData
    assert_eq!(s.continuation(), Some(POPOUT_CONTINUATION));
    assert!(s.is_ready());
}

#[test]
fn watch_fixture_uses_plain_client_version() {
    let html = fixture("watch_html", DEMO_VIDEO, "html");
    let s = extract_tokens(&html).expect("watch page should carry tokens");

    assert_eq!(s.api_key(), Some(WATCH_API_KEY));
    assert_eq!(s.client_version(), Some(WATCH_CLIENT_VERSION));
    assert_eq!(s.continuation(), Some(WATCH_CONTINUATION));
}

#[test]
fn ytcfg_and_live_chat_continuation() {
    let html = chat_page("KEY-1", "2.20240301.00.00", "CONT-1");
    let s = extract_tokens(&html).unwrap();

    assert_eq!(s.api_key(), Some("KEY-1"));
    assert_eq!(s.client_version(), Some("2.20240301.00.00"));
    assert_eq!(s.continuation(), Some("CONT-1"));
}

#[test]
fn fill_session_is_idempotent_once_ready() {
    let mut s = extract_tokens(&chat_page("KEY-1", "2.1", "CONT-1")).unwrap();
    let before = s.clone();

    assert!(fill_session(&mut s, &chat_page("KEY-2", "2.2", "CONT-2")));
    assert_eq!(s, before);
}

#[test]
fn reset_then_extract_yields_the_same_session() {
    let html = fixture("popout_html", DEMO_VIDEO, "html");

    let mut s = ytchat_rs::Session::new();
    assert!(fill_session(&mut s, &html));
    let first = s.clone();

    s.reset();
    assert_eq!(s, ytchat_rs::Session::new());
    assert!(!s.is_ready());

    assert!(fill_session(&mut s, &html));
    assert_eq!(s, first);
    assert_eq!(extract_tokens(&html), Some(first));
}

#[test]
fn second_page_only_fills_what_is_missing() {
    // key and version only; no continuation anywhere
    let first = r#"<script>ytcfg.set({"INNERTUBE_API_KEY":"FIRST-KEY","INNERTUBE_CLIENT_VERSION":"2.0"});</script>"#;
    let mut s = ytchat_rs::Session::new();
    assert!(!fill_session(&mut s, first));
    assert_eq!(s.api_key(), Some("FIRST-KEY"));
    assert_eq!(s.continuation(), None);

    let second = fixture("watch_html", DEMO_VIDEO, "html");
    assert!(fill_session(&mut s, &second));
    assert_eq!(s.api_key(), Some("FIRST-KEY"));
    assert_eq!(s.client_version(), Some("2.0"));
    assert_eq!(s.continuation(), Some(WATCH_CONTINUATION));
}
