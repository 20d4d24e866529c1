//! Flat node table for tree queries.
//!
//! [`TreeArena`] flattens a caller-built [`TreeNode`] hierarchy into a
//! single `Vec` of nodes linked by [`NodeId`] indices, with an id lookup
//! map. Rebuilding parent chains by copying node arrays on every mutation
//! does not scale to large trees; the arena gives O(1) navigation and lets
//! the selection engine traverse descendants without touching the original
//! node values.
//!
//! # Invariants
//!
//! 1. Ids are unique; construction fails with [`ArenaError::DuplicateId`]
//!    otherwise.
//! 2. Every non-root node has exactly one parent; child order matches the
//!    input order.
//! 3. The arena is acyclic by construction: it is built from owned
//!    `TreeNode` values, which cannot share or cycle.

use std::collections::HashMap;
use std::fmt;

use crate::node::TreeNode;

/// Index of a node inside a [`TreeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw index value (stable for the lifetime of the arena).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors from arena construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The same id appeared on two nodes.
    DuplicateId(String),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::DuplicateId(id) => write!(f, "duplicate node id: {id:?}"),
        }
    }
}

impl std::error::Error for ArenaError {}

#[derive(Debug, Clone)]
struct ArenaNode {
    id: String,
    label: String,
    description: Option<String>,
    disabled: bool,
    checked: bool,
    expanded: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Flat, index-linked storage for a node hierarchy.
#[derive(Debug, Clone)]
pub struct TreeArena {
    nodes: Vec<ArenaNode>,
    roots: Vec<NodeId>,
    by_id: HashMap<String, NodeId>,
}

impl TreeArena {
    /// Build an arena from caller-supplied root nodes.
    ///
    /// Nodes are stored in depth-first order, children in input order.
    pub fn from_roots(roots: Vec<TreeNode>) -> Result<Self, ArenaError> {
        let mut arena = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            by_id: HashMap::new(),
        };
        for root in roots {
            let id = arena.insert(root, None)?;
            arena.roots.push(id);
        }
        Ok(arena)
    }

    /// Build an arena from a single root node.
    pub fn from_root(root: TreeNode) -> Result<Self, ArenaError> {
        Self::from_roots(vec![root])
    }

    fn insert(&mut self, node: TreeNode, parent: Option<NodeId>) -> Result<NodeId, ArenaError> {
        let TreeNode {
            id: raw_id,
            label,
            description,
            disabled,
            checked,
            expanded,
            children,
        } = node;

        if self.by_id.contains_key(&raw_id) {
            return Err(ArenaError::DuplicateId(raw_id));
        }

        let id = NodeId(self.nodes.len());
        self.by_id.insert(raw_id.clone(), id);
        self.nodes.push(ArenaNode {
            id: raw_id,
            label,
            description,
            disabled,
            checked,
            expanded,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.insert(child, Some(id))?;
            self.nodes[id.0].children.push(child_id);
        }
        Ok(id)
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node ids, in input order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by its string id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    /// String id of a node.
    #[must_use]
    pub fn id_of(&self, node: NodeId) -> &str {
        &self.nodes[node.0].id
    }

    /// Display label of a node.
    #[must_use]
    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.0].label
    }

    /// Optional description of a node.
    #[must_use]
    pub fn description(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].description.as_deref()
    }

    /// Whether the node carries the disabled flag.
    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    /// Whether the node was marked initially selected by the caller.
    #[must_use]
    pub fn initially_checked(&self, node: NodeId) -> bool {
        self.nodes[node.0].checked
    }

    /// Parent of a node, `None` for roots.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children of a node, in input order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether the node has children.
    #[must_use]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.0].children.is_empty()
    }

    /// Whether the node is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.nodes[node.0].expanded
    }

    /// Set the expansion flag on a node. Orthogonal to selection.
    pub fn set_expanded(&mut self, node: NodeId, expanded: bool) {
        self.nodes[node.0].expanded = expanded;
    }

    /// Toggle the expansion flag on a node.
    pub fn toggle_expanded(&mut self, node: NodeId) {
        let n = &mut self.nodes[node.0];
        n.expanded = !n.expanded;
    }

    /// All node ids in depth-first order, roots first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        // Depth-first storage order equals traversal order.
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every node below `node` (excluding `node` itself), depth-first,
    /// children in input order.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            for child in self.children(next).iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// String ids of every node below `node`, in [`descendants`](Self::descendants) order.
    #[must_use]
    pub fn descendant_ids(&self, node: NodeId) -> Vec<&str> {
        self.descendants(node)
            .into_iter()
            .map(|n| self.id_of(n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeArena {
        TreeArena::from_root(
            TreeNode::new("root", "Root")
                .child(
                    TreeNode::new("a", "A")
                        .child(TreeNode::new("a1", "A1"))
                        .child(TreeNode::new("a2", "A2")),
                )
                .child(TreeNode::new("b", "B")),
        )
        .unwrap()
    }

    #[test]
    fn arena_flattens_in_depth_first_order() {
        let arena = sample();
        let ids: Vec<&str> = arena.iter().map(|n| arena.id_of(n)).collect();
        assert_eq!(ids, ["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn arena_lookup_and_labels() {
        let arena = sample();
        let a1 = arena.lookup("a1").unwrap();
        assert_eq!(arena.label(a1), "A1");
        assert!(arena.lookup("missing").is_none());
    }

    #[test]
    fn arena_parent_child_links() {
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        let a = arena.lookup("a").unwrap();
        let a2 = arena.lookup("a2").unwrap();

        assert_eq!(arena.parent(root), None);
        assert_eq!(arena.parent(a), Some(root));
        assert_eq!(arena.parent(a2), Some(a));
        assert_eq!(arena.children(root).len(), 2);
        assert!(arena.has_children(a));
        assert!(!arena.has_children(a2));
    }

    #[test]
    fn arena_descendants_depth_first() {
        let arena = sample();
        let root = arena.lookup("root").unwrap();
        assert_eq!(arena.descendant_ids(root), ["a", "a1", "a2", "b"]);

        let a = arena.lookup("a").unwrap();
        assert_eq!(arena.descendant_ids(a), ["a1", "a2"]);

        let b = arena.lookup("b").unwrap();
        assert!(arena.descendant_ids(b).is_empty());
    }

    #[test]
    fn arena_rejects_duplicate_ids() {
        let err = TreeArena::from_root(
            TreeNode::new("root", "Root")
                .child(TreeNode::new("x", "X"))
                .child(TreeNode::new("x", "X again")),
        )
        .unwrap_err();
        assert_eq!(err, ArenaError::DuplicateId("x".into()));
        assert!(err.to_string().contains("duplicate node id"));
    }

    #[test]
    fn arena_multiple_roots() {
        let arena = TreeArena::from_roots(vec![
            TreeNode::new("r1", "R1").child(TreeNode::new("r1c", "R1C")),
            TreeNode::new("r2", "R2"),
        ])
        .unwrap();
        assert_eq!(arena.roots().len(), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn arena_empty() {
        let arena = TreeArena::from_roots(Vec::new()).unwrap();
        assert!(arena.is_empty());
        assert!(arena.roots().is_empty());
    }

    #[test]
    fn arena_expansion_flags() {
        let mut arena = TreeArena::from_root(
            TreeNode::new("root", "Root").child(TreeNode::new("a", "A").with_expanded(false)),
        )
        .unwrap();
        let a = arena.lookup("a").unwrap();
        assert!(!arena.is_expanded(a));
        arena.toggle_expanded(a);
        assert!(arena.is_expanded(a));
        arena.set_expanded(a, false);
        assert!(!arena.is_expanded(a));
    }

    #[test]
    fn arena_metadata_carried_over() {
        let arena = TreeArena::from_root(
            TreeNode::new("n", "N")
                .with_description("leaf detail")
                .with_disabled(true)
                .with_checked(true),
        )
        .unwrap();
        let n = arena.lookup("n").unwrap();
        assert_eq!(arena.description(n), Some("leaf detail"));
        assert!(arena.is_disabled(n));
        assert!(arena.initially_checked(n));
    }

    #[test]
    fn arena_deep_nesting() {
        let mut node = TreeNode::new("d40", "leaf");
        for depth in (0..40).rev() {
            node = TreeNode::new(format!("d{depth}"), "level").child(node);
        }
        let arena = TreeArena::from_root(node).unwrap();
        assert_eq!(arena.len(), 41);
        let top = arena.lookup("d0").unwrap();
        assert_eq!(arena.descendants(top).len(), 40);
    }
}
