#![forbid(unsafe_code)]

//! Tree model and hierarchical selection engine.
//!
//! This crate holds the non-visual state of a hierarchical checkbox: a
//! caller-built [`TreeNode`] description, a flat [`TreeArena`] the engine
//! queries, a [`SelectionSet`] that owns which ids are checked, and the
//! derived per-node [`DisplayState`] (checked / indeterminate / unchecked).
//!
//! # Example
//!
//! ```
//! use trellis_tree::{CheckTree, DisplayState, TreeNode};
//!
//! let tree = CheckTree::new(vec![TreeNode::new("perms", "Permissions")
//!     .child(TreeNode::new("read", "Read"))
//!     .child(TreeNode::new("write", "Write"))])
//! .unwrap();
//!
//! let mut tree = tree;
//! tree.set_selected("read", true);
//! assert_eq!(tree.display_state("perms"), Some(DisplayState::Indeterminate));
//! tree.set_selected("perms", true);
//! assert_eq!(tree.display_state("write"), Some(DisplayState::Selected));
//! ```

pub mod arena;
pub mod check_tree;
pub mod node;
pub mod selection;

pub use arena::{ArenaError, NodeId, TreeArena};
pub use check_tree::CheckTree;
pub use node::TreeNode;
pub use selection::{DisplayState, SelectionSet};
