//! Runtime configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::hotkey::DEFAULT_HOTKEY;
use crate::sync::DEFAULT_POLL_INTERVAL;

pub const APP_DIR_NAME: &str = "session-deck";

#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub poll_interval: Duration,
    pub storage_dir: PathBuf,
    pub default_hotkey: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            storage_dir: default_storage_dir(),
            default_hotkey: DEFAULT_HOTKEY.to_string(),
        }
    }
}

impl DeckConfig {
    /// Defaults, overridden by `SESSION_DECK_POLL_MS` and `SESSION_DECK_STORAGE_DIR`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var("SESSION_DECK_POLL_MS").ok().as_deref(),
            std::env::var("SESSION_DECK_STORAGE_DIR").ok().as_deref(),
        )
    }

    /// Apply raw override values. Invalid values are ignored.
    pub fn with_overrides(mut self, poll_ms: Option<&str>, storage_dir: Option<&str>) -> Self {
        if let Some(raw) = poll_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.poll_interval = Duration::from_millis(ms),
                _ => log::warn!("Ignoring invalid poll interval {:?}", raw),
            }
        }

        if let Some(raw) = storage_dir {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                log::warn!("Ignoring empty storage directory");
            } else {
                self.storage_dir = PathBuf::from(trimmed);
            }
        }

        self
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
