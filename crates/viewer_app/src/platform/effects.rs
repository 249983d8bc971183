use std::sync::mpsc;
use std::thread;

use viewer_core::{Effect, LoadError, Msg};
use viewer_engine::{EngineEvent, EngineHandle, FetchSettings};
use viewer_logging::{viewer_info, viewer_warn};

use super::app::AppEvent;
use super::convert;
use super::history::SessionHistory;

/// Bridges core effects to the fetch engine and pumps engine completions
/// back into the application event channel as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (engine, events) = EngineHandle::new(settings);

        thread::spawn(move || {
            while let Ok(event) = events.recv() {
                if event_tx.send(AppEvent::Message(msg_for(event))).is_err() {
                    break;
                }
            }
        });

        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, history: &mut SessionHistory) {
        for effect in effects {
            match effect {
                Effect::FetchList => {
                    viewer_info!("FetchList");
                    self.engine.fetch_list();
                }
                Effect::FetchDetail { id } => {
                    viewer_info!("FetchDetail id={}", id);
                    self.engine.fetch_detail(id);
                }
                Effect::PushHistory { entry, path } => {
                    viewer_info!("PushHistory path={}", path);
                    history.push(entry, path);
                }
            }
        }
    }
}

/// Maps an engine completion onto a core message, logging failures. The
/// display region is left untouched on failure; the core applies only
/// successful payloads.
fn msg_for(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListFetched { result } => Msg::ListLoaded {
            result: match result {
                Ok(pages) => Ok(pages.into_iter().map(convert::summary_from_wire).collect()),
                Err(err) => {
                    viewer_warn!("list fetch failed: {}", err);
                    Err(LoadError(err.to_string()))
                }
            },
        },
        EngineEvent::DetailFetched { id, result } => Msg::DetailLoaded {
            result: match result {
                Ok(page) => Ok(convert::detail_from_wire(page)),
                Err(err) => {
                    viewer_warn!("fetch of page {} failed: {}", id, err);
                    Err(LoadError(err.to_string()))
                }
            },
        },
    }
}
