use std::sync::Arc;

use crate::bridge::HostBridge;
use crate::storage::KeyValueStore;

use super::keys::KeyEvent;
use super::recorder::HotkeyRecorder;

pub const HOTKEY_STORAGE_KEY: &str = "session-deck-hotkey";
pub const DEFAULT_HOTKEY: &str = "Option+Space";

/// Read the saved hotkey. Unreadable storage counts as nothing saved.
pub fn load_saved_hotkey(store: &dyn KeyValueStore) -> Option<String> {
    match store.get_item(HOTKEY_STORAGE_KEY) {
        Ok(value) => value
            .map(|hotkey| hotkey.trim().to_string())
            .filter(|hotkey| !hotkey.is_empty()),
        Err(e) => {
            log::warn!(target: "hotkey", "Failed to read saved hotkey: {}", e);
            None
        }
    }
}

/// State behind the hotkey settings panel.
///
/// A committed recording is registered with the host straight away and only
/// persisted once registration succeeds. A registration error is shown but
/// the recorded hotkey stays on display.
pub struct HotkeySettings {
    bridge: Arc<dyn HostBridge>,
    store: Arc<dyn KeyValueStore>,
    recorder: HotkeyRecorder,
    hotkey: String,
    error: Option<String>,
    saved: bool,
}

impl HotkeySettings {
    /// Open the settings with the saved hotkey, or `default_hotkey` if none.
    pub fn new(
        bridge: Arc<dyn HostBridge>,
        store: Arc<dyn KeyValueStore>,
        default_hotkey: &str,
    ) -> Self {
        let hotkey = load_saved_hotkey(store.as_ref()).unwrap_or_else(|| default_hotkey.to_string());
        Self {
            bridge,
            store,
            recorder: HotkeyRecorder::new(),
            hotkey,
            error: None,
            saved: false,
        }
    }

    /// Register the saved hotkey at startup. Failures are only logged.
    pub fn init(bridge: &dyn HostBridge, store: &dyn KeyValueStore) {
        let Some(hotkey) = load_saved_hotkey(store) else {
            return;
        };
        match bridge.register_shortcut(&hotkey) {
            Ok(()) => log::info!(target: "hotkey", "Registered saved hotkey {}", hotkey),
            Err(e) => log::warn!(target: "hotkey", "Failed to register saved hotkey {}: {}", hotkey, e),
        }
    }

    pub fn hotkey(&self) -> &str {
        &self.hotkey
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True after the last save succeeded, until the hotkey changes again.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    pub fn recorder(&self) -> &HotkeyRecorder {
        &self.recorder
    }

    /// Text for the capture field.
    pub fn display(&self) -> String {
        if self.recorder.is_recording() {
            let tokens = self.recorder.pending_tokens();
            if tokens.is_empty() {
                "Press keys...".to_string()
            } else {
                tokens.join(" + ")
            }
        } else if self.hotkey.is_empty() {
            "Click to set hotkey".to_string()
        } else {
            self.hotkey.clone()
        }
    }

    pub fn start_recording(&mut self) {
        self.saved = false;
        self.recorder.begin();
    }

    /// Settings surface closed: drop any capture in progress.
    pub fn close(&mut self) {
        self.recorder.cancel();
    }

    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        self.recorder.key_down(event)
    }

    /// Feed a key release. When it commits a chord, the chord becomes the
    /// displayed hotkey and is registered and persisted.
    pub fn key_up(&mut self, event: &KeyEvent) -> Option<String> {
        let shortcut = self.recorder.key_up(event)?;
        self.hotkey = shortcut.clone();
        self.save();
        Some(shortcut)
    }

    /// Register the displayed hotkey and persist it if the host accepted it.
    pub fn save(&mut self) -> bool {
        if let Err(e) = self.bridge.register_shortcut(&self.hotkey) {
            log::warn!(target: "hotkey", "Failed to register hotkey {}: {}", self.hotkey, e);
            self.error = Some(e);
            self.saved = false;
            return false;
        }

        if let Err(e) = self.store.set_item(HOTKEY_STORAGE_KEY, &self.hotkey) {
            log::warn!(target: "hotkey", "Failed to persist hotkey {}: {}", self.hotkey, e);
        }
        self.error = None;
        self.saved = true;
        true
    }

    /// Unregister the hotkey and forget it.
    pub fn clear(&mut self) -> bool {
        if let Err(e) = self.bridge.unregister_shortcut() {
            log::warn!(target: "hotkey", "Failed to unregister hotkey: {}", e);
            self.error = Some(e);
            return false;
        }

        if let Err(e) = self.store.remove_item(HOTKEY_STORAGE_KEY) {
            log::warn!(target: "hotkey", "Failed to remove saved hotkey: {}", e);
        }
        self.hotkey.clear();
        self.error = None;
        self.saved = false;
        true
    }
}
