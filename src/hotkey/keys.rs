pub const CHORD_SEPARATOR: &str = "+";

/// Raw key event as delivered by the window: the key name plus modifier flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Held modifiers, always in Command, Control, Option, Shift order
    pub fn modifiers(&self) -> Vec<Modifier> {
        let flags = [self.meta, self.ctrl, self.alt, self.shift];
        Modifier::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(modifier, held)| held.then_some(modifier))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Command,
    Control,
    Option,
    Shift,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [
        Modifier::Command,
        Modifier::Control,
        Modifier::Option,
        Modifier::Shift,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Modifier::Command => "Command",
            Modifier::Control => "Control",
            Modifier::Option => "Option",
            Modifier::Shift => "Shift",
        }
    }
}

/// True for key names that only ever act as modifiers.
pub fn is_modifier_key(key: &str) -> bool {
    matches!(key, "Meta" | "Control" | "Alt" | "Shift")
}

/// Map a key name to its chord token, or `None` for modifier keys.
///
/// `" "` becomes `Space`, a single character is upper-cased, and named keys
/// (`ArrowUp`, `F5`, `Escape`, ...) pass through unchanged.
pub fn normalize_key(key: &str) -> Option<String> {
    if key.is_empty() || is_modifier_key(key) {
        return None;
    }
    if key == " " {
        return Some("Space".to_string());
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_uppercase().collect()),
        _ => Some(key.to_string()),
    }
}

/// Tokens for a key press: held modifiers, then the principal key if any.
pub fn chord_tokens(event: &KeyEvent) -> Vec<String> {
    let mut tokens: Vec<String> = event
        .modifiers()
        .into_iter()
        .map(|modifier| modifier.token().to_string())
        .collect();
    if let Some(key) = normalize_key(&event.key) {
        tokens.push(key);
    }
    tokens
}
