//! # Mark Trees
//!
//! A flat span list folded into a nested tree: [`sort`] orders the spans so
//! every ancestor precedes its descendants, then [`builder`] folds them in
//! one stack pass.
//!
//! Nodes live in an arena indexed by [`NodeId`]; the tree is rebuilt on
//! every parse and never mutated afterwards.

pub mod builder;
pub mod sort;

use crate::parsing::span::MarkSpan;

pub use builder::build;
pub use sort::sort_spans;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkNode {
    pub span: MarkSpan,
    pub children: Vec<NodeId>,
}

/// A laminar family of spans over `[0, len)`, as a tree.
///
/// The root is implicit: it spans the whole text and has no kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTree {
    pub(crate) len: usize,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) nodes: Vec<MarkNode>,
}

impl MarkTree {
    /// Sorts `spans` and folds them into a tree over a text of `len` chars.
    pub fn from_spans(len: usize, mut spans: Vec<MarkSpan>) -> Self {
        sort_spans(&mut spans);
        build(len, spans)
    }

    /// Length of the text the tree spans.
    pub fn len(&self) -> usize {
        self.len
    }

    /// No spans at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &MarkNode {
        &self.nodes[id.0]
    }

    /// Children of the implicit root.
    pub fn roots(&self) -> impl Iterator<Item = &MarkNode> {
        self.roots.iter().map(|&id| self.node(id))
    }

    pub fn children<'t>(&'t self, node: &'t MarkNode) -> impl Iterator<Item = &'t MarkNode> {
        node.children.iter().map(|&id| self.node(id))
    }

    /// Every span in pre-order.
    pub fn spans(&self) -> Vec<&MarkSpan> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            out.push(&node.span);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }
}
