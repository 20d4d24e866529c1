#![forbid(unsafe_code)]

//! Trellis public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut tree = CheckTree::new(vec![
//!     TreeNode::new("fruit", "Fruit")
//!         .child(TreeNode::new("apple", "Apple"))
//!         .child(TreeNode::new("pear", "Pear")),
//! ])
//! .unwrap();
//! tree.set_selected("apple", true);
//! assert_eq!(tree.display_state("fruit"), Some(DisplayState::Indeterminate));
//!
//! let mut history = History::new(0u32);
//! history.set(1);
//! assert!(history.undo());
//! assert_eq!(*history.present(), 0);
//! ```

// --- Tree re-exports -------------------------------------------------------

pub use trellis_tree::{
    ArenaError, CheckTree, DisplayState, NodeId, SelectionSet, TreeArena, TreeNode,
};

// --- History re-exports ----------------------------------------------------

pub use trellis_history::{DEFAULT_MAX_DEPTH, History};

// --- Input re-exports ------------------------------------------------------

pub use trellis_input::{
    ComboParseError, KeyCode, KeyCombo, KeyEvent, KeyEventKind, Modifiers, Shortcuts,
};

// --- State re-exports ------------------------------------------------------

#[cfg(feature = "state")]
pub use trellis_state::{MemoryStorage, StorageBackend, StorageError, StoredValue};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CheckTree, DisplayState, History, KeyCode, KeyCombo, KeyEvent, Modifiers, NodeId,
        SelectionSet, Shortcuts, TreeArena, TreeNode,
    };

    #[cfg(feature = "state")]
    pub use crate::{StorageBackend, StoredValue};

    pub use crate::{history, input, tree};
}

pub use trellis_history as history;
pub use trellis_input as input;
pub use trellis_tree as tree;

#[cfg(feature = "state")]
pub use trellis_state as state;

#[cfg(feature = "extras")]
pub use trellis_extras as extras;
