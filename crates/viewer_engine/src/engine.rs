use std::sync::{mpsc, Arc};
use std::thread;

use viewer_logging::viewer_debug;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::types::EngineEvent;

enum EngineCommand {
    FetchList,
    FetchDetail { id: String },
}

/// Handle to the fetch engine. Commands go in over a channel and run on a
/// background tokio runtime; exactly one completion per command comes back
/// on the receiver returned by [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestPageFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch_list(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchList);
    }

    pub fn fetch_detail(&self, id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchDetail { id: id.into() });
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchList => {
            viewer_debug!("fetching page collection");
            let result = fetcher.fetch_list().await;
            let _ = event_tx.send(EngineEvent::ListFetched { result });
        }
        EngineCommand::FetchDetail { id } => {
            viewer_debug!("fetching page {}", id);
            let result = fetcher.fetch_detail(&id).await;
            let _ = event_tx.send(EngineEvent::DetailFetched { id, result });
        }
    }
}
