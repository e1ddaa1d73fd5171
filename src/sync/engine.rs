use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::bridge::HostBridge;
use crate::session::{Session, SessionSnapshot};

use super::scheduler::{PollHandle, PollScheduler};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch sessions";

/// What a renderer reads: the current snapshot plus loading/error state.
#[derive(Debug, Clone)]
pub struct SyncView {
    pub snapshot: Arc<SessionSnapshot>,
    pub is_loading: bool,
    pub error: Option<String>,
}

struct SyncState {
    snapshot: Arc<SessionSnapshot>,
    is_loading: bool,
    error: Option<String>,
}

struct EngineInner {
    bridge: Arc<dyn HostBridge>,
    state: Mutex<SyncState>,
}

/// Owns the local session snapshot and keeps it in sync with the host.
///
/// Cloning is cheap and every clone shares the same state. The poll timer
/// stops when [`shutdown`](Self::shutdown) is called or the last clone drops.
#[derive(Clone)]
pub struct SessionSyncEngine {
    inner: Arc<EngineInner>,
    // Held only by engine clones, never by fetch workers, so dropping the
    // last clone always stops the ticker
    poller: Arc<Mutex<Option<PollHandle>>>,
}

impl SessionSyncEngine {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                bridge,
                state: Mutex::new(SyncState {
                    snapshot: Arc::new(SessionSnapshot::default()),
                    is_loading: true,
                    error: None,
                }),
            }),
            poller: Arc::new(Mutex::new(None)),
        }
    }

    /// Fetch right away, then every `interval` until shutdown.
    ///
    /// Calling `start` again replaces the running timer.
    pub fn start(&self, interval: Duration) {
        self.inner.lock_state().is_loading = true;

        let weak = Arc::downgrade(&self.inner);
        let handle = PollScheduler::start(interval, move || {
            if let Some(inner) = weak.upgrade() {
                inner.fetch();
            }
        });

        let previous = self
            .poller
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(handle);
        drop(previous);

        log::info!(target: "session.sync", "Polling sessions every {:?}", interval);
    }

    /// Cancel the poll timer. In-flight fetches still land.
    pub fn shutdown(&self) {
        let handle = self
            .poller
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(mut handle) = handle {
            handle.stop();
            log::info!(target: "session.sync", "Session polling stopped");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(PollHandle::is_running)
            .unwrap_or(false)
    }

    /// One fetch on the calling thread.
    pub fn fetch(&self) {
        self.inner.fetch();
    }

    /// Manual refresh. Shares the fetch path and leaves the timer alone.
    pub fn refresh(&self) {
        log::debug!(target: "session.sync", "Manual refresh");
        self.inner.fetch();
    }

    /// Ask the host to focus a session's terminal. Failures are only logged.
    pub fn focus(&self, session: &Session) {
        if let Err(e) = self
            .inner
            .bridge
            .focus_session(session.pid, &session.project_path)
        {
            log::warn!(
                target: "session.sync",
                "Failed to focus session {} (pid {}): {}",
                session.id,
                session.pid,
                e
            );
        }
    }

    pub fn view(&self) -> SyncView {
        let state = self.inner.lock_state();
        SyncView {
            snapshot: Arc::clone(&state.snapshot),
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        Arc::clone(&self.inner.lock_state().snapshot)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock_state().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock_state().error.clone()
    }

    pub fn dismiss_error(&self) {
        self.inner.lock_state().error = None;
    }
}

/// The poll body: no input, a new snapshot or an error message out.
fn poll(bridge: &dyn HostBridge) -> Result<SessionSnapshot, String> {
    bridge.list_sessions().map(SessionSnapshot::from)
}

impl EngineInner {
    fn lock_state(&self) -> std::sync::MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn fetch(&self) {
        match poll(self.bridge.as_ref()) {
            Ok(snapshot) => {
                let (total, waiting) = (snapshot.total_count, snapshot.waiting_count);
                {
                    let mut state = self.lock_state();
                    state.snapshot = Arc::new(snapshot);
                    state.error = None;
                    state.is_loading = false;
                }
                log::debug!(
                    target: "session.sync",
                    "Fetched {} sessions ({} waiting)",
                    total,
                    waiting
                );

                if let Err(e) = self.bridge.update_indicator(total, waiting) {
                    log::warn!(target: "session.sync", "Failed to update indicator: {}", e);
                }
            }
            Err(e) => {
                let message = if e.trim().is_empty() {
                    FETCH_FAILED_MESSAGE.to_string()
                } else {
                    e
                };
                log::warn!(target: "session.sync", "Session fetch failed: {}", message);

                let mut state = self.lock_state();
                state.error = Some(message);
                state.is_loading = false;
            }
        }
    }
}
