use httpmock::Method::GET;
use ytchat_rs::{ErrorKind, FALLBACK_CLIENT_VERSION, YtError};

use crate::common::{
    DEMO_VIDEO, POPOUT_API_KEY, POPOUT_CLIENT_VERSION, POPOUT_CONTINUATION, POPOUT_PATH,
    WATCH_API_KEY, WATCH_CONTINUATION, WATCH_PATH, client_for, fixture, setup_server, watch_url,
};

#[tokio::test]
async fn popout_page_is_enough() {
    let server = setup_server();

    let popout = server.mock(|when, then| {
        when.method(GET)
            .path(POPOUT_PATH)
            .query_param("is_popout", "1")
            .query_param("v", DEMO_VIDEO);
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture("popout_html", DEMO_VIDEO, "html"));
    });
    let watch = server.mock(|when, then| {
        when.method(GET).path(WATCH_PATH);
        then.status(200).body("<html></html>");
    });

    let client = client_for(&server);
    let session = client.init_from_url(&watch_url(DEMO_VIDEO)).await.unwrap();

    popout.assert();
    watch.assert_hits(0);

    assert_eq!(session.api_key(), Some(POPOUT_API_KEY));
    assert_eq!(session.client_version(), Some(POPOUT_CLIENT_VERSION));
    assert_eq!(session.continuation(), Some(POPOUT_CONTINUATION));
}

#[tokio::test]
async fn falls_back_to_watch_page() {
    let server = setup_server();

    let popout = server.mock(|when, then| {
        when.method(GET).path(POPOUT_PATH);
        then.status(200).body("<html><body>chat is disabled</body></html>");
    });
    let watch = server.mock(|when, then| {
        when.method(GET).path(WATCH_PATH).query_param("v", DEMO_VIDEO);
        then.status(200)
            .header("content-type", "text/html")
            .body(fixture("watch_html", DEMO_VIDEO, "html"));
    });

    let client = client_for(&server);
    let session = client
        .init_from_url(&format!("https://youtu.be/{DEMO_VIDEO}"))
        .await
        .unwrap();

    popout.assert();
    watch.assert();
    assert_eq!(session.api_key(), Some(WATCH_API_KEY));
    assert_eq!(session.continuation(), Some(WATCH_CONTINUATION));
}

#[tokio::test]
async fn popout_tokens_survive_watch_fallback() {
    let server = setup_server();

    // key on the popout page, continuation only on the watch page
    server.mock(|when, then| {
        when.method(GET).path(POPOUT_PATH);
        then.status(200)
            .body(r#"<script>ytcfg.set({"INNERTUBE_API_KEY":"POPOUT-ONLY-KEY"});</script>"#);
    });
    server.mock(|when, then| {
        when.method(GET).path(WATCH_PATH);
        then.status(200).body(fixture("watch_html", DEMO_VIDEO, "html"));
    });

    let client = client_for(&server);
    let session = client.init_from_url(&watch_url(DEMO_VIDEO)).await.unwrap();

    assert_eq!(session.api_key(), Some("POPOUT-ONLY-KEY"));
    assert_eq!(session.continuation(), Some(WATCH_CONTINUATION));
}

#[tokio::test]
async fn missing_client_version_gets_fallback() {
    let server = setup_server();

    server.mock(|when, then| {
        when.method(GET).path(POPOUT_PATH);
        then.status(200).body(
            r#"<script>ytcfg.set({"INNERTUBE_API_KEY":"K"});</script>
               <script>{"liveChatContinuation":{"continuations":[{"timedContinuationData":{"continuation":"C"}}]}}</script>"#,
        );
    });

    let client = client_for(&server);
    let session = client.init_from_url(&watch_url(DEMO_VIDEO)).await.unwrap();

    assert_eq!(session.client_version(), Some(FALLBACK_CLIENT_VERSION));
}

#[tokio::test]
async fn tokens_not_found_reports_both_pages() {
    let server = setup_server();

    let popout = server.mock(|when, then| {
        when.method(GET).path(POPOUT_PATH);
        then.status(404).body("not here");
    });
    let watch = server.mock(|when, then| {
        when.method(GET).path(WATCH_PATH);
        then.status(200)
            .body("<html>\n<body>Sign in to confirm you're not a bot</body>\n</html>");
    });

    let client = client_for(&server);
    let err = client.init_from_url(&watch_url(DEMO_VIDEO)).await.unwrap_err();

    popout.assert();
    watch.assert();
    assert_eq!(err.kind(), ErrorKind::TokensNotFound);

    match &err {
        YtError::TokensNotFound {
            popout_status,
            popout_url,
            watch_status,
            watch_url,
            snippet,
        } => {
            assert_eq!(*popout_status, 404);
            assert!(popout_url.contains(POPOUT_PATH), "got {popout_url}");
            assert_eq!(*watch_status, 200);
            assert!(watch_url.contains(WATCH_PATH), "got {watch_url}");
            assert!(!snippet.contains('\n'));
            assert!(snippet.contains("not a bot"));
        }
        other => panic!("expected TokensNotFound, got {other:?}"),
    }

    let msg = err.to_string();
    assert!(msg.starts_with("Could not extract live chat tokens."), "got {msg}");
    assert!(msg.contains("popoutStatus=404"));
    assert!(msg.contains("watchStatus=200"));
}

#[tokio::test]
async fn no_video_id_makes_no_requests() {
    let server = setup_server();
    let popout = server.mock(|when, then| {
        when.method(GET).path(POPOUT_PATH);
        then.status(200);
    });
    let watch = server.mock(|when, then| {
        when.method(GET).path(WATCH_PATH);
        then.status(200);
    });

    let client = client_for(&server);
    let err = client.init_from_url("https://example.com").await.unwrap_err();

    popout.assert_hits(0);
    watch.assert_hits(0);
    assert_eq!(err.kind(), ErrorKind::NoVideoId);
    assert_eq!(
        err.to_string(),
        "Could not extract video ID from URL: https://example.com"
    );
}
