//! Tree crawling by node type.

use crate::context::RuleContext;
use crate::segment::SyntaxNode;
use std::path::Path;

/// Crawler that seeks nodes whose type tag is in an interest set.
///
/// Walks depth-first, pre-order, visiting children in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSeeker {
    /// Type tags this crawler yields.
    pub types: &'static [&'static str],
    /// Whether to descend into a node that already matched.
    pub allow_recurse: bool,
}

impl SegmentSeeker {
    /// Creates a crawler for the given type tags.
    #[must_use]
    pub const fn new(types: &'static [&'static str]) -> Self {
        Self {
            types,
            allow_recurse: true,
        }
    }

    /// Sets whether matched nodes are descended into.
    #[must_use]
    pub const fn allow_recurse(mut self, allow: bool) -> Self {
        self.allow_recurse = allow;
        self
    }

    /// Returns true if this crawler yields nodes of the given type.
    #[must_use]
    pub fn seeks(&self, kind: &str) -> bool {
        self.types.contains(&kind)
    }

    /// Walks `root` and calls `visit` with a context for every matching node.
    pub fn crawl<'a, F>(&self, root: &'a SyntaxNode, path: &'a Path, mut visit: F)
    where
        F: FnMut(&RuleContext<'a>),
    {
        let mut parents = Vec::new();
        self.walk(root, path, &mut parents, &mut visit);
    }

    fn walk<'a, F>(
        &self,
        node: &'a SyntaxNode,
        path: &'a Path,
        parents: &mut Vec<&'a SyntaxNode>,
        visit: &mut F,
    ) where
        F: FnMut(&RuleContext<'a>),
    {
        if self.seeks(&node.kind) {
            let ctx = RuleContext::new(node, path).with_parents(parents.clone());
            visit(&ctx);
            if !self.allow_recurse {
                return;
            }
        }

        parents.push(node);
        for child in &node.segments {
            self.walk(child, path, parents, visit);
        }
        parents.pop();
    }
}
