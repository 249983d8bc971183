use std::sync::Once;

use viewer_core::{
    update, AppState, ContentView, LoadError, Msg, PageDetail, PageMeta, PageStatus, PageSummary,
    ViewState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn summary(id: &str) -> PageSummary {
    PageSummary {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        status: PageStatus::Done,
        created: "2024".to_string(),
        meta: PageMeta {
            title: "T".to_string(),
            description: "D".to_string(),
            error: None,
        },
    }
}

fn detail(id: &str) -> PageDetail {
    PageDetail {
        id: id.to_string(),
        url: format!("https://example.com/{id}"),
        status: PageStatus::Done,
        created: "2024".to_string(),
        meta: PageMeta {
            title: "T".to_string(),
            description: "D".to_string(),
            error: None,
        },
        results: Vec::new(),
    }
}

#[test]
fn list_load_replaces_content_and_marks_dirty() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::AppStarted {
            path: "/".to_string(),
        },
    );

    let (mut next, effects) = update(
        state,
        Msg::ListLoaded {
            result: Ok(vec![summary("a")]),
        },
    );

    assert!(effects.is_empty());
    assert!(next.consume_dirty());
    match next.view().content {
        ContentView::List(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, "a");
            assert_eq!(rows[0].status, "done");
            assert_eq!(rows[0].created, "2024");
            assert_eq!(rows[0].title, "T");
            assert_eq!(rows[0].description, "D");
        }
        other => panic!("expected list content, got {other:?}"),
    }
}

#[test]
fn detail_load_replaces_content() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::AppStarted {
            path: "/a".to_string(),
        },
    );

    let (mut next, _effects) = update(
        state,
        Msg::DetailLoaded {
            result: Ok(detail("a")),
        },
    );

    assert!(next.consume_dirty());
    match next.view().content {
        ContentView::Detail(view) => assert_eq!(view.id, "a"),
        other => panic!("expected detail content, got {other:?}"),
    }
}

#[test]
fn load_failure_leaves_display_unchanged() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::AppStarted {
            path: "/".to_string(),
        },
    );
    let (mut state, _effects) = update(
        state,
        Msg::ListLoaded {
            result: Ok(vec![summary("a")]),
        },
    );
    assert!(state.consume_dirty());
    let shown = state.view().content;

    let (mut next, effects) = update(
        state,
        Msg::DetailLoaded {
            result: Err(LoadError("http status 500".to_string())),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next.view().content, shown);
}

#[test]
fn completion_applies_even_after_route_changed() {
    // No cancellation exists: a response that arrives after a newer
    // navigation still replaces the displayed content, while the route
    // keeps the newer value.
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::PageLinkClicked {
            id: "a".to_string(),
        },
    );
    let (state, _effects) = update(state, Msg::HistoryPopped { entry: None });

    let (mut next, _effects) = update(
        state,
        Msg::DetailLoaded {
            result: Ok(detail("a")),
        },
    );

    assert_eq!(next.route(), &ViewState::List);
    assert!(next.consume_dirty());
    assert!(matches!(next.view().content, ContentView::Detail(_)));
}
