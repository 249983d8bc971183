use crate::{AppState, Effect, HistoryEntry, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Each navigation trigger (`AppStarted`, `PageLinkClicked`, `HistoryPopped`)
/// resolves the target view and emits exactly one fetch effect; only
/// `PageLinkClicked` also records a session-history slot. Completions are
/// applied unconditionally, so a response that arrives after a newer
/// navigation still replaces the displayed content.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted { path } => {
            let target = resolve_path(&path);
            state.set_route(target.clone());
            vec![fetch_for(&target)]
        }
        Msg::PageLinkClicked { id } => {
            state.set_route(ViewState::Detail(id.clone()));
            vec![
                Effect::PushHistory {
                    entry: HistoryEntry { page: id.clone() },
                    path: id.clone(),
                },
                Effect::FetchDetail { id },
            ]
        }
        Msg::HistoryPopped { entry } => {
            let target = match entry {
                None => ViewState::List,
                Some(HistoryEntry { page }) => ViewState::Detail(page),
            };
            state.set_route(target.clone());
            vec![fetch_for(&target)]
        }
        Msg::ListLoaded { result } => {
            // Failures are logged by the platform layer; the display keeps
            // its previous content.
            if let Ok(items) = result {
                state.show_list(items);
            }
            Vec::new()
        }
        Msg::DetailLoaded { result } => {
            if let Ok(detail) = result {
                state.show_detail(detail);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Maps a location path to the view it addresses: the root path (trailing
/// separator) is the list, anything else the page whose id is the path with
/// the leading separator stripped.
fn resolve_path(path: &str) -> ViewState {
    if path.ends_with('/') {
        ViewState::List
    } else {
        let id = path.strip_prefix('/').unwrap_or(path);
        ViewState::Detail(id.to_string())
    }
}

fn fetch_for(target: &ViewState) -> Effect {
    match target {
        ViewState::List => Effect::FetchList,
        ViewState::Detail(id) => Effect::FetchDetail { id: id.clone() },
    }
}
