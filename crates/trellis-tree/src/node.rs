//! Caller-facing tree description.
//!
//! A [`TreeNode`] is the owned, builder-style input to the engine: an id,
//! a label, optional leaf metadata, and ordered children. The engine never
//! mutates this structure; it is flattened once into a
//! [`TreeArena`](crate::arena::TreeArena).

/// A node in the hierarchy supplied by the caller.
///
/// Ids must be unique across the whole tree; arena construction rejects
/// duplicates. Because nodes own their children, the input is a strict
/// tree; cycles and shared children are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) description: Option<String>,
    pub(crate) disabled: bool,
    /// Whether this node starts out selected.
    pub(crate) checked: bool,
    /// Whether this node starts out expanded.
    pub(crate) expanded: bool,
    pub(crate) children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with the given id and display label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            disabled: false,
            checked: false,
            expanded: true,
            children: Vec::new(),
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Set an optional description shown under the label.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this node as disabled (presentation-only flag).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether this node starts out selected.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether this node starts out expanded.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Get the id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this node is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this node starts out selected.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether this node starts out expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Get the children.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Whether this node has children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Count all nodes in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}
