use std::sync::{mpsc, Arc};
use std::thread;

use search_logging::{search_debug, search_error, search_warn};
use tokio_util::sync::CancellationToken;

use crate::client::{ClientSettings, ReqwestSearchApi, SearchApi};
use crate::{EngineEvent, FailureKind, FetchError, Generation};

enum EngineCommand {
    FetchHotKeywords,
    SearchPage {
        generation: Generation,
        page: u32,
        keyword: String,
    },
    CancelAll,
}

/// Runs requests on a background tokio runtime and hands completions back
/// through a channel the UI loop drains with [`EngineHandle::try_recv`].
///
/// Dropping the handle closes the command channel, which cancels everything
/// still in flight and stops the worker thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let api = ReqwestSearchApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn SearchApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_worker(api, cmd_rx, event_tx));

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_hot_keywords(&self) {
        self.send(EngineCommand::FetchHotKeywords);
    }

    /// Page 0 starts a new search and cancels requests of the previous one.
    pub fn search_page(&self, generation: Generation, page: u32, keyword: impl Into<String>) {
        self.send(EngineCommand::SearchPage {
            generation,
            page,
            keyword: keyword.into(),
        });
    }

    pub fn cancel_all(&self) {
        self.send(EngineCommand::CancelAll);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            search_warn!("Engine worker is gone; command dropped");
        }
    }
}

fn run_worker(
    api: Arc<dyn SearchApi>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            search_error!("Failed to start engine runtime: {}", err);
            return;
        }
    };

    let mut root = CancellationToken::new();
    let mut search_token = root.child_token();

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::FetchHotKeywords => {
                let api = api.clone();
                let event_tx = event_tx.clone();
                let token = root.child_token();
                runtime.spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => Err(cancelled()),
                        result = api.hot_keywords() => result,
                    };
                    deliver(&event_tx, EngineEvent::HotKeywordsLoaded(result));
                });
            }
            EngineCommand::SearchPage {
                generation,
                page,
                keyword,
            } => {
                if page == 0 {
                    search_token.cancel();
                    search_token = root.child_token();
                }
                let api = api.clone();
                let event_tx = event_tx.clone();
                let token = search_token.clone();
                runtime.spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => Err(cancelled()),
                        result = api.search_articles(page, &keyword) => {
                            result.map(|found| found.datas)
                        }
                    };
                    deliver(
                        &event_tx,
                        EngineEvent::PageLoaded {
                            generation,
                            page,
                            result,
                        },
                    );
                });
            }
            EngineCommand::CancelAll => {
                root.cancel();
                root = CancellationToken::new();
                search_token = root.child_token();
            }
        }
    }

    root.cancel();
    search_debug!("Engine command channel closed; worker stopping");
}

fn cancelled() -> FetchError {
    FetchError::new(FailureKind::Cancelled, "request cancelled")
}

/// Cancelled requests belong to a superseded search or a closed screen, so
/// nothing is delivered for them.
fn deliver(event_tx: &mpsc::Sender<EngineEvent>, event: EngineEvent) {
    let cancelled = match &event {
        EngineEvent::HotKeywordsLoaded(Err(err)) => err.kind == FailureKind::Cancelled,
        EngineEvent::PageLoaded { result: Err(err), .. } => err.kind == FailureKind::Cancelled,
        _ => false,
    };
    if cancelled {
        search_debug!("Dropping cancelled completion");
        return;
    }
    let _ = event_tx.send(event);
}
