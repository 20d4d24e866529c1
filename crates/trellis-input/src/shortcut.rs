//! Keyboard shortcut combos and dispatch.
//!
//! A [`KeyCombo`] is a key plus an exact modifier set, parseable from
//! strings like `"ctrl+shift+z"` or `"alt+enter"`. A [`Shortcuts`] table
//! binds combos to caller-supplied action values and resolves incoming
//! [`KeyEvent`]s to the first matching action.
//!
//! # Matching rules
//!
//! - Character keys compare case-insensitively (`Z` and `z` both match a
//!   `"ctrl+z"` binding).
//! - Modifier sets match exactly: `ctrl+z` does not fire on Ctrl+Shift+Z.
//! - Only [`KeyEventKind::Press`] events fire; repeats and releases do not.

use std::fmt;
use std::str::FromStr;

use crate::key::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// Errors from parsing a combo string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboParseError {
    /// The input was empty or contained only separators.
    Empty,
    /// A modifier-position token was not a known modifier or key.
    UnknownToken(String),
    /// The combo named modifiers but no key (e.g. `"ctrl+"`).
    MissingKey,
}

impl fmt::Display for ComboParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboParseError::Empty => write!(f, "empty key combo"),
            ComboParseError::UnknownToken(token) => write!(f, "unknown combo token: {token:?}"),
            ComboParseError::MissingKey => write!(f, "combo has modifiers but no key"),
        }
    }
}

impl std::error::Error for ComboParseError {}

/// A key plus an exact modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The non-modifier key.
    pub code: KeyCode,
    /// Required modifier set (matched exactly).
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a combo from a key code and modifiers.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an unmodified combo for a key code.
    #[must_use]
    pub const fn bare(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Whether a key event fires this combo.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.kind != KeyEventKind::Press || event.modifiers != self.modifiers {
            return false;
        }
        match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b) || a.to_lowercase().eq(b.to_lowercase())
            }
            (a, b) => a == b,
        }
    }
}

fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token {
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "alt" | "option" => Some(Modifiers::ALT),
        "shift" => Some(Modifiers::SHIFT),
        "super" | "meta" | "cmd" => Some(Modifiers::SUPER),
        _ => None,
    }
}

fn parse_key(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    if let Some(digits) = token.strip_prefix('f') {
        if let Ok(n) = digits.parse::<u8>() {
            if (1..=24).contains(&n) {
                return Some(KeyCode::F(n));
            }
        }
    }
    match token {
        "enter" | "return" => Some(KeyCode::Enter),
        "escape" | "esc" => Some(KeyCode::Escape),
        "backspace" => Some(KeyCode::Backspace),
        "tab" => Some(KeyCode::Tab),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Space),
        _ => None,
    }
}

impl FromStr for KeyCombo {
    type Err = ComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<String> = s
            .split('+')
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let Some((key_token, modifier_tokens)) = tokens.split_last() else {
            return Err(ComboParseError::Empty);
        };

        let mut modifiers = Modifiers::NONE;
        for token in modifier_tokens {
            match parse_modifier(token) {
                Some(m) => modifiers |= m,
                None => return Err(ComboParseError::UnknownToken(token.clone())),
            }
        }

        // A trailing modifier means the key is missing ("ctrl+shift").
        if parse_modifier(key_token).is_some() {
            return Err(ComboParseError::MissingKey);
        }
        match parse_key(key_token) {
            Some(code) => Ok(Self { code, modifiers }),
            None => Err(ComboParseError::UnknownToken(key_token.clone())),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::SUPER, "Super"),
        ] {
            if self.modifiers.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Esc"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Space => write!(f, "Space"),
        }
    }
}

/// An ordered binding table from combos to actions.
///
/// Bindings are checked in insertion order; the first match wins, so more
/// specific combos should be bound before overlapping ones.
#[derive(Debug, Clone, Default)]
pub struct Shortcuts<A> {
    bindings: Vec<(KeyCombo, A)>,
}

impl<A> Shortcuts<A> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn bind(&mut self, combo: KeyCombo, action: A) {
        self.bindings.push((combo, action));
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, combo: KeyCombo, action: A) -> Self {
        self.bind(combo, action);
        self
    }

    /// Remove every binding for a combo. Returns whether any was removed.
    pub fn unbind(&mut self, combo: KeyCombo) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(c, _)| *c != combo);
        self.bindings.len() != before
    }

    /// Resolve an event to the first matching action.
    #[must_use]
    pub fn dispatch(&self, event: &KeyEvent) -> Option<&A> {
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(event))
            .map(|(_, action)| action)
    }

    /// Iterate all bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &A)> {
        self.bindings.iter().map(|(c, a)| (c, a))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
