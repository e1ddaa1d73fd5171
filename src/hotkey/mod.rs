//! Global hotkey capture and settings
//!
//! - `keys`: pure mapping from a raw key event to chord tokens
//! - `recorder`: the Idle/Recording state machine that commits a chord
//! - `settings`: registers, persists and clears the chosen hotkey

mod keys;
mod recorder;
mod settings;

pub use keys::{chord_tokens, is_modifier_key, normalize_key, KeyEvent, Modifier, CHORD_SEPARATOR};
pub use recorder::{HotkeyRecorder, PendingChord, RecorderState};
pub use settings::{load_saved_hotkey, HotkeySettings, DEFAULT_HOTKEY, HOTKEY_STORAGE_KEY};
