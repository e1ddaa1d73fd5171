//! Wiring of the sync engine, override store and hotkey settings.

use std::sync::Arc;

use crate::bridge::HostBridge;
use crate::config::DeckConfig;
use crate::error::StorageError;
use crate::hotkey::HotkeySettings;
use crate::overrides::OverrideStore;
use crate::presentation::{present_all, SessionView};
use crate::storage::{FileStore, KeyValueStore};
use crate::sync::{SessionSyncEngine, SyncView};

pub struct SessionDeck {
    config: DeckConfig,
    bridge: Arc<dyn HostBridge>,
    store: Arc<dyn KeyValueStore>,
    engine: SessionSyncEngine,
    overrides: OverrideStore,
}

impl SessionDeck {
    /// Deck persisting to `config.storage_dir`.
    pub fn new(bridge: Arc<dyn HostBridge>, config: DeckConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.storage_dir.clone()));
        Self::with_store(bridge, store, config)
    }

    pub fn with_store(
        bridge: Arc<dyn HostBridge>,
        store: Arc<dyn KeyValueStore>,
        config: DeckConfig,
    ) -> Self {
        Self {
            engine: SessionSyncEngine::new(Arc::clone(&bridge)),
            overrides: OverrideStore::new(Arc::clone(&store)),
            config,
            bridge,
            store,
        }
    }

    /// Register the saved hotkey and start polling.
    pub fn start(&self) {
        HotkeySettings::init(self.bridge.as_ref(), self.store.as_ref());
        self.engine.start(self.config.poll_interval);
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn engine(&self) -> &SessionSyncEngine {
        &self.engine
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Build the rendered list from the current snapshot and overrides.
    pub fn render<R>(&self, f: impl FnOnce(&SyncView, Vec<SessionView<'_>>) -> R) -> R {
        let view = self.engine.view();
        let rows = present_all(&view.snapshot, &self.overrides);
        f(&view, rows)
    }

    /// Focus a session by id. Unknown ids are ignored.
    pub fn focus(&self, session_id: &str) {
        let snapshot = self.engine.snapshot();
        match snapshot.get(session_id) {
            Some(session) => self.engine.focus(session),
            None => log::debug!(target: "session.sync", "Focus requested for unknown session {}", session_id),
        }
    }

    /// Rename a session by id, using its current name as the default.
    pub fn rename(&self, session_id: &str, name: &str) -> Result<(), StorageError> {
        let snapshot = self.engine.snapshot();
        let default_name = snapshot
            .get(session_id)
            .map(|session| session.project_name.as_str())
            .unwrap_or_default();
        self.overrides.set_name(session_id, name, default_name)
    }

    pub fn set_url(&self, session_id: &str, url: &str) -> Result<(), StorageError> {
        self.overrides.set_url(session_id, url)
    }

    pub fn hotkey_settings(&self) -> HotkeySettings {
        HotkeySettings::new(
            Arc::clone(&self.bridge),
            Arc::clone(&self.store),
            &self.config.default_hotkey,
        )
    }
}
