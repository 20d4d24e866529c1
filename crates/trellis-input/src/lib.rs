#![forbid(unsafe_code)]

//! Key events, combos, and shortcut dispatch.
//!
//! This crate is the keyboard half of the toolkit: a canonical
//! [`KeyEvent`] model, a parseable [`KeyCombo`] (`"ctrl+shift+z"`), and a
//! [`Shortcuts`] table that maps combos to caller-supplied action values.
//! Nothing here listens for events; the host UI feeds events in and acts
//! on the returned action.
//!
//! # Example
//!
//! ```
//! use trellis_input::{KeyCombo, KeyEvent, KeyCode, Modifiers, Shortcuts};
//!
//! #[derive(Debug, PartialEq)]
//! enum Action { Undo, Redo }
//!
//! let mut shortcuts = Shortcuts::new();
//! shortcuts.bind("ctrl+z".parse().unwrap(), Action::Undo);
//! shortcuts.bind("ctrl+shift+z".parse().unwrap(), Action::Redo);
//!
//! let event = KeyEvent::new(KeyCode::Char('z')).with_modifiers(Modifiers::CTRL);
//! assert_eq!(shortcuts.dispatch(&event), Some(&Action::Undo));
//! ```

pub mod key;
pub mod shortcut;

pub use key::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use shortcut::{ComboParseError, KeyCombo, Shortcuts};
