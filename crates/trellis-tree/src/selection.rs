//! Hierarchical selection engine.
//!
//! A [`SelectionSet`] owns the set of selected node ids over a
//! [`TreeArena`]. Per-node display state is derived, never stored:
//!
//! - a leaf is selected iff its own id is in the set;
//! - a parent is selected iff every descendant id is in the set,
//!   indeterminate iff some but not all are, unselected otherwise.
//!
//! Once a node has children its own id is not authoritative for display;
//! descendant coverage alone decides. [`set_selected`](SelectionSet::set_selected)
//! is the sole mutation entry point and applies a whole subtree at once,
//! so the set never holds a partially applied subtree.
//!
//! # Invariants
//!
//! 1. After `set_selected(node, true)`, the node id and every descendant
//!    id are in the set.
//! 2. After `set_selected(node, false)`, neither the node id nor any
//!    descendant id remains in the set.
//! 3. `display_state` is a pure function of `(arena, set)`.

use std::collections::HashSet;

use crate::arena::{NodeId, TreeArena};

/// Derived checkbox state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Leaf in the set, or parent with full descendant coverage.
    Selected,
    /// Parent with partial descendant coverage. Leaves are never indeterminate.
    Indeterminate,
    /// No descendant coverage (and, for leaves, own id absent).
    Unselected,
}

/// The set of selected node ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from raw ids.
    ///
    /// The caller is responsible for the descendant invariant when seeding
    /// ids directly; prefer [`set_selected`](Self::set_selected).
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an id is in the set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the selected ids (unordered).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Select or deselect a node and its whole subtree.
    ///
    /// The affected id list is collected before the set is touched, then
    /// applied in one pass: a reader between operations never sees a
    /// subtree with only some of its ids present.
    pub fn set_selected(&mut self, arena: &TreeArena, node: NodeId, selected: bool) {
        let mut affected: Vec<&str> = Vec::with_capacity(1 + arena.children(node).len());
        affected.push(arena.id_of(node));
        for descendant in arena.descendants(node) {
            affected.push(arena.id_of(descendant));
        }
        if selected {
            for id in affected {
                if !self.ids.contains(id) {
                    self.ids.insert(id.to_owned());
                }
            }
        } else {
            for id in affected {
                self.ids.remove(id);
            }
        }
    }

    /// Derived display state of a node.
    #[must_use]
    pub fn display_state(&self, arena: &TreeArena, node: NodeId) -> DisplayState {
        let descendants = arena.descendants(node);
        if descendants.is_empty() {
            return if self.contains(arena.id_of(node)) {
                DisplayState::Selected
            } else {
                DisplayState::Unselected
            };
        }
        let covered = descendants
            .iter()
            .filter(|d| self.contains(arena.id_of(**d)))
            .count();
        if covered == 0 {
            DisplayState::Unselected
        } else if covered == descendants.len() {
            DisplayState::Selected
        } else {
            DisplayState::Indeterminate
        }
    }
}

impl Extend<String> for SelectionSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TreeNode;

    fn sample() -> TreeArena {
        TreeArena::from_root(
            TreeNode::new("root", "Root")
                .child(TreeNode::new("a", "A"))
                .child(TreeNode::new("b", "B").child(TreeNode::new("c", "C"))),
        )
        .unwrap()
    }

    #[test]
    fn leaf_selection_by_own_id() {
        let arena = sample();
        let a = arena.lookup("a").unwrap();
        let mut sel = SelectionSet::new();
        assert_eq!(sel.display_state(&arena, a), DisplayState::Unselected);
        sel.set_selected(&arena, a, true);
        assert_eq!(sel.display_state(&arena, a), DisplayState::Selected);
        assert!(sel.contains("a"));
    }

    #[test]
    fn select_parent_selects_whole_subtree() {
        let arena = sample();
        let b = arena.lookup("b").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, b, true);
        assert!(sel.contains("b"));
        assert!(sel.contains("c"));
        assert_eq!(sel.display_state(&arena, b), DisplayState::Selected);
        assert_eq!(
            sel.display_state(&arena, arena.lookup("c").unwrap()),
            DisplayState::Selected
        );
    }

    #[test]
    fn deselect_parent_clears_whole_subtree() {
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        let b = arena.lookup("b").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, root, true);
        sel.set_selected(&arena, b, false);
        assert!(!sel.contains("b"));
        assert!(!sel.contains("c"));
        assert_eq!(sel.display_state(&arena, b), DisplayState::Unselected);
        // "a" is untouched.
        assert!(sel.contains("a"));
    }

    #[test]
    fn partial_coverage_is_indeterminate() {
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        let a = arena.lookup("a").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, a, true);
        assert_eq!(sel.display_state(&arena, root), DisplayState::Indeterminate);
    }

    #[test]
    fn two_leaf_parent_single_pick_is_indeterminate() {
        let arena = TreeArena::from_root(
            TreeNode::new("p", "P")
                .child(TreeNode::new("x", "X"))
                .child(TreeNode::new("y", "Y")),
        )
        .unwrap();
        let p = arena.lookup("p").unwrap();
        let x = arena.lookup("x").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, x, true);
        assert_eq!(sel.display_state(&arena, p), DisplayState::Indeterminate);
    }

    #[test]
    fn parent_own_id_not_authoritative() {
        let arena = sample();
        let b = arena.lookup("b").unwrap();
        // "b" present but its only descendant "c" absent: coverage is zero.
        let sel = SelectionSet::from_ids(["b"]);
        assert_eq!(sel.display_state(&arena, b), DisplayState::Unselected);
    }

    #[test]
    fn set_selected_is_idempotent() {
        let arena = sample();
        let b = arena.lookup("b").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, b, true);
        let once = sel.clone();
        sel.set_selected(&arena, b, true);
        assert_eq!(sel, once);
    }

    #[test]
    fn sibling_subtree_leaves_root_indeterminate() {
        // root{a, b{c}}: selecting b gives {"b","c"}; root sees 2 of 3.
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        let b = arena.lookup("b").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, b, true);

        let mut ids: Vec<&str> = sel.ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, ["b", "c"]);
        assert_eq!(sel.display_state(&arena, b), DisplayState::Selected);
        assert_eq!(sel.display_state(&arena, root), DisplayState::Indeterminate);
    }

    #[test]
    fn clear_and_len() {
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        let mut sel = SelectionSet::new();
        sel.set_selected(&arena, root, true);
        assert_eq!(sel.len(), 4);
        sel.clear();
        assert!(sel.is_empty());
    }
}
