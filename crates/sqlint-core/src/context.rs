//! Context types for rule execution.

use crate::segment::SyntaxNode;
use std::path::Path;

/// Context provided to a rule for one visited node.
///
/// Created by the crawler right before each rule invocation and discarded
/// afterwards. Rules only ever see it by shared reference.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// The node the rule is invoked on.
    pub segment: &'a SyntaxNode,
    /// Ancestors of `segment`, root first.
    pub parent_stack: Vec<&'a SyntaxNode>,
    /// Path of the tree being linted, relative to the project root.
    pub path: &'a Path,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for a root-level node with no ancestors.
    #[must_use]
    pub fn new(segment: &'a SyntaxNode, path: &'a Path) -> Self {
        Self {
            segment,
            parent_stack: Vec::new(),
            path,
        }
    }

    /// Sets the ancestor stack.
    #[must_use]
    pub fn with_parents(mut self, parent_stack: Vec<&'a SyntaxNode>) -> Self {
        self.parent_stack = parent_stack;
        self
    }

    /// Returns the direct parent of the current node.
    #[must_use]
    pub fn parent(&self) -> Option<&'a SyntaxNode> {
        self.parent_stack.last().copied()
    }

    /// Returns the depth of the current node (root is 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parent_stack.len()
    }
}
