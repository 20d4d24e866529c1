//! Owned hierarchical-checkbox state.
//!
//! [`CheckTree`] bundles an arena, a selection set, and per-node expansion
//! into one value with a string-id surface, for callers that do not want
//! to juggle the pieces themselves. Initially-checked nodes go through the
//! normal mutation path, so the descendant invariant holds from the first
//! query.

use crate::arena::{ArenaError, NodeId, TreeArena};
use crate::node::TreeNode;
use crate::selection::{DisplayState, SelectionSet};

/// A tree of checkboxes with selection and expansion state.
#[derive(Debug, Clone)]
pub struct CheckTree {
    arena: TreeArena,
    selection: SelectionSet,
}

impl CheckTree {
    /// Build a check tree from caller-supplied roots.
    ///
    /// Nodes flagged with [`TreeNode::with_checked`] are applied through
    /// [`SelectionSet::set_selected`], selecting their whole subtrees.
    pub fn new(roots: Vec<TreeNode>) -> Result<Self, ArenaError> {
        let arena = TreeArena::from_roots(roots)?;
        let mut selection = SelectionSet::new();
        for node in arena.iter() {
            if arena.initially_checked(node) {
                selection.set_selected(&arena, node, true);
            }
        }
        Ok(Self { arena, selection })
    }

    /// The underlying arena.
    #[must_use]
    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    /// The current selection set.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Replace the selection wholesale (e.g., restored state).
    pub fn set_selection(&mut self, selection: SelectionSet) {
        self.selection = selection;
    }

    /// Select or deselect the subtree rooted at `id`.
    ///
    /// Returns `false` when the id is unknown.
    pub fn set_selected(&mut self, id: &str, selected: bool) -> bool {
        match self.arena.lookup(id) {
            Some(node) => {
                self.selection.set_selected(&self.arena, node, selected);
                true
            }
            None => false,
        }
    }

    /// Flip the subtree rooted at `id`: an unselected or indeterminate
    /// node becomes selected, a selected node becomes unselected.
    ///
    /// Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.arena.lookup(id) {
            Some(node) => {
                let next = self.selection.display_state(&self.arena, node) != DisplayState::Selected;
                self.selection.set_selected(&self.arena, node, next);
                true
            }
            None => false,
        }
    }

    /// Derived display state of the node with the given id.
    #[must_use]
    pub fn display_state(&self, id: &str) -> Option<DisplayState> {
        self.arena
            .lookup(id)
            .map(|node| self.selection.display_state(&self.arena, node))
    }

    /// Selected ids in tree (depth-first) order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<&str> {
        self.arena
            .iter()
            .map(|node| self.arena.id_of(node))
            .filter(|id| self.selection.contains(id))
            .collect()
    }

    /// Whether the node with the given id is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.arena
            .lookup(id)
            .map(|node| self.arena.is_expanded(node))
            .unwrap_or(false)
    }

    /// Set the expansion flag on a node. Returns `false` for unknown ids.
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> bool {
        match self.arena.lookup(id) {
            Some(node) => {
                self.arena.set_expanded(node, expanded);
                true
            }
            None => false,
        }
    }

    /// Toggle the expansion flag on a node. Returns `false` for unknown ids.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        match self.arena.lookup(id) {
            Some(node) => {
                self.arena.toggle_expanded(node);
                true
            }
            None => false,
        }
    }

    /// Expand every node.
    pub fn expand_all(&mut self) {
        let all: Vec<NodeId> = self.arena.iter().collect();
        for node in all {
            self.arena.set_expanded(node, true);
        }
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        let all: Vec<NodeId> = self.arena.iter().collect();
        for node in all {
            self.arena.set_expanded(node, false);
        }
    }
}
