//! Clipboard writing and copied-status tracking.
//!
//! [`Osc52Clipboard`] writes text to the system clipboard through the
//! OSC 52 escape sequence, which works over SSH and inside multiplexers
//! that pass it through. [`MemoryClipboard`] is the injectable test
//! double. [`CopyStatus`] tracks the transient "copied!" indicator a copy
//! button shows, against an explicitly passed `now` so tests never sleep.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Errors from clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// The backend cannot accept this input.
    InvalidInput(String),
    /// Writing the escape sequence failed.
    Io(std::io::Error),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::InvalidInput(msg) => write!(f, "invalid clipboard input: {msg}"),
            ClipboardError::Io(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::Io(e) => Some(e),
            ClipboardError::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for ClipboardError {
    fn from(e: std::io::Error) -> Self {
        ClipboardError::Io(e)
    }
}

/// OSC 52 clipboard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardSelection {
    /// System clipboard.
    #[default]
    Clipboard,
    /// Primary selection (X11).
    Primary,
}

impl ClipboardSelection {
    const fn osc52_code(self) -> char {
        match self {
            Self::Clipboard => 'c',
            Self::Primary => 'p',
        }
    }
}

/// A text clipboard a component can be handed.
pub trait Clipboard {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Copy the given text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the OSC 52 escape sequence.
///
/// Emits `ESC ] 52 ; <selection> ; <base64> BEL` to the wrapped writer
/// (normally the terminal's stdout) and flushes.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    selection: ClipboardSelection,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wrap a writer, targeting the system clipboard selection.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            selection: ClipboardSelection::default(),
        }
    }

    /// Target a different OSC 52 selection.
    #[must_use]
    pub fn with_selection(mut self, selection: ClipboardSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Unwrap the inner writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "Osc52Clipboard"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let encoded = STANDARD.encode(text.as_bytes());
        write!(
            self.writer,
            "\x1b]52;{};{}\x07",
            self.selection.osc52_code(),
            encoded
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Vec<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied text, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.contents.last().map(String::as_str)
    }

    /// Every copied text, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "MemoryClipboard"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents.push(text.to_owned());
        Ok(())
    }
}

/// Default window during which [`CopyStatus::is_copied`] reports `true`.
const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(2);

/// Transient "copied!" indicator state for a copy control.
///
/// The caller passes `now` explicitly, so the indicator is deterministic
/// under test and needs no timers: it reads as copied until `reset_after`
/// has elapsed since the last successful copy.
#[derive(Debug, Clone, Copy)]
pub struct CopyStatus {
    copied_at: Option<Instant>,
    reset_after: Duration,
}

impl CopyStatus {
    /// Create a status with the default 2 second reset window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            copied_at: None,
            reset_after: DEFAULT_RESET_AFTER,
        }
    }

    /// Use a custom reset window.
    #[must_use]
    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }

    /// Record a successful copy at `now`.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Clear the indicator immediately (e.g., after a failed copy).
    pub fn reset(&mut self) {
        self.copied_at = None;
    }

    /// Whether the indicator should still show as of `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < self.reset_after,
            None => false,
        }
    }
}

impl Default for CopyStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy text and record the outcome on a [`CopyStatus`].
///
/// A failed copy clears the indicator, so the UI never claims success
/// for text that did not reach the clipboard.
pub fn copy_with_status(
    clipboard: &mut dyn Clipboard,
    status: &mut CopyStatus,
    text: &str,
    now: Instant,
) -> Result<(), ClipboardError> {
    match clipboard.write_text(text) {
        Ok(()) => {
            status.mark_copied(now);
            Ok(())
        }
        Err(e) => {
            status.reset();
            Err(e)
        }
    }
}
