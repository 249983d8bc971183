use viewer_engine::{EngineEvent, EngineHandle, FailureKind, FetchSettings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The engine runs on its own thread and runtime; the multi-thread flavor
// keeps the mock server responsive while the test blocks on recv.
#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_completions_over_the_event_channel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pages/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base = url::Url::parse(&server.uri()).expect("server uri");
    let (engine, events) = EngineHandle::new(FetchSettings::new(base));

    engine.fetch_list();
    match events.recv().expect("engine alive") {
        EngineEvent::ListFetched { result } => assert_eq!(result.expect("list ok").len(), 0),
        other => panic!("expected list completion, got {other:?}"),
    }

    engine.fetch_detail("missing");
    match events.recv().expect("engine alive") {
        EngineEvent::DetailFetched { id, result } => {
            assert_eq!(id, "missing");
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(404));
        }
        other => panic!("expected detail completion, got {other:?}"),
    }
}
