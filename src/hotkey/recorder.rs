use super::keys::{chord_tokens, is_modifier_key, normalize_key, KeyEvent, CHORD_SEPARATOR};

/// Chord being captured: the tokens of the latest press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingChord {
    tokens: Vec<String>,
    has_principal: bool,
}

impl PendingChord {
    fn from_event(event: &KeyEvent) -> Self {
        Self {
            tokens: chord_tokens(event),
            has_principal: normalize_key(&event.key).is_some(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording(PendingChord),
}

/// Turns key presses into a single accelerator string such as `Command+Shift+K`.
///
/// Each press replaces the pending chord. Releasing a non-modifier key while
/// the pending chord has a principal key commits it and returns to Idle.
#[derive(Debug, Default)]
pub struct HotkeyRecorder {
    state: RecorderState,
}

impl HotkeyRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording(_))
    }

    /// Start a capture, discarding anything half-recorded.
    pub fn begin(&mut self) {
        self.state = RecorderState::Recording(PendingChord::default());
    }

    /// Abandon the capture without committing.
    pub fn cancel(&mut self) {
        if self.is_recording() {
            log::debug!(target: "hotkey", "Recording cancelled");
        }
        self.state = RecorderState::Idle;
    }

    /// Tokens captured so far; empty when idle.
    pub fn pending_tokens(&self) -> Vec<String> {
        match &self.state {
            RecorderState::Recording(chord) => chord.tokens().to_vec(),
            RecorderState::Idle => Vec::new(),
        }
    }

    /// Handle a key press. Returns false when idle (event not consumed).
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        let RecorderState::Recording(chord) = &mut self.state else {
            return false;
        };
        *chord = PendingChord::from_event(event);
        true
    }

    /// Handle a key release. Returns the committed chord, if this release completed one.
    pub fn key_up(&mut self, event: &KeyEvent) -> Option<String> {
        let RecorderState::Recording(chord) = &self.state else {
            return None;
        };
        if is_modifier_key(&event.key) || !chord.has_principal {
            return None;
        }

        let shortcut = chord.tokens().join(CHORD_SEPARATOR);
        self.state = RecorderState::Idle;
        log::debug!(target: "hotkey", "Recorded shortcut {}", shortcut);
        Some(shortcut)
    }
}
