//! Per-session user overrides (custom display name, quick-access URL)
//!
//! Each kind of override lives in its own namespace: one JSON object mapping
//! session id to value, stored under its own key. Clearing a name never touches
//! URLs and vice versa. Blank values are never stored; setting one deletes the
//! entry instead.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const NAME_OVERRIDES_KEY: &str = "session-name-overrides";
pub const URL_OVERRIDES_KEY: &str = "session-url-overrides";

/// Override namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKind {
    Name,
    Url,
}

impl OverrideKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            OverrideKind::Name => NAME_OVERRIDES_KEY,
            OverrideKind::Url => URL_OVERRIDES_KEY,
        }
    }
}

pub type OverrideMap = BTreeMap<String, String>;

#[derive(Clone)]
pub struct OverrideStore {
    backend: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write of a namespace within this process
    write_lock: Arc<Mutex<()>>,
}

impl OverrideStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load a whole namespace.
    ///
    /// Unreadable or malformed storage yields an empty namespace.
    pub fn load(&self, kind: OverrideKind) -> OverrideMap {
        let raw = match self.backend.get_item(kind.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return OverrideMap::new(),
            Err(e) => {
                log::warn!(target: "session.overrides", "Failed to read {:?} overrides: {}", kind, e);
                return OverrideMap::new();
            }
        };

        match serde_json::from_str::<OverrideMap>(&raw) {
            Ok(mut map) => {
                map.retain(|_, value| !value.trim().is_empty());
                map
            }
            Err(e) => {
                log::warn!(target: "session.overrides", "Ignoring malformed {:?} overrides: {}", kind, e);
                OverrideMap::new()
            }
        }
    }

    pub fn get(&self, kind: OverrideKind, id: &str) -> Option<String> {
        self.load(kind).remove(id)
    }

    /// Store `value` (trimmed) for `id`, or delete the entry if it is blank.
    ///
    /// The namespace is rewritten whole. Nothing is written when the entry
    /// already holds the value.
    pub fn set(&self, kind: OverrideKind, id: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut map = self.load(kind);
        let trimmed = value.trim();

        let changed = if trimmed.is_empty() {
            map.remove(id).is_some()
        } else if map.get(id).map(String::as_str) == Some(trimmed) {
            false
        } else {
            map.insert(id.to_string(), trimmed.to_string());
            true
        };

        if !changed {
            return Ok(());
        }

        let encoded = serde_json::to_string(&map)?;
        self.backend.set_item(kind.storage_key(), &encoded)?;
        log::debug!(target: "session.overrides", "Updated {:?} override for {}", kind, id);
        Ok(())
    }

    /// Rename a session. Renaming back to `default_name` clears the override.
    pub fn set_name(&self, id: &str, value: &str, default_name: &str) -> Result<(), StorageError> {
        if value.trim() == default_name {
            return self.set(OverrideKind::Name, id, "");
        }
        self.set(OverrideKind::Name, id, value)
    }

    /// Attach a quick-access URL, stored verbatim (no scheme added).
    pub fn set_url(&self, id: &str, value: &str) -> Result<(), StorageError> {
        self.set(OverrideKind::Url, id, value)
    }
}
