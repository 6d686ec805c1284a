use crate::parsing::span::MarkSpan;

use super::{MarkNode, MarkTree, NodeId};

/// Folds sorted spans into a tree in one pass.
///
/// The stack holds the open ancestors of the next span. Before attaching a
/// span, every ancestor that ends before it does is popped. A zero-width
/// span sitting exactly at the end of the top node does not belong to it
/// either.
///
/// # Panics
///
/// In debug builds, when the spans are not a laminar family. That is a
/// scanner defect.
pub fn build(len: usize, spans: Vec<MarkSpan>) -> MarkTree {
    let mut nodes: Vec<MarkNode> = Vec::with_capacity(spans.len());
    let mut roots = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();

    for span in spans {
        while let Some(&top) = stack.last() {
            let open = &nodes[top.0].span;
            let ends_before = open.hi < span.hi;
            let after_end = span.is_empty() && !open.is_empty() && open.hi == span.lo;
            if ends_before || after_end {
                debug_assert!(
                    span.lo >= open.hi,
                    "laminar violation: {span:?} partially overlaps {open:?}"
                );
                stack.pop();
            } else {
                break;
            }
        }

        let id = NodeId(nodes.len());
        match stack.last() {
            Some(&parent) => {
                debug_assert!(
                    nodes[parent.0].span.contains(&span),
                    "laminar violation: {:?} partially overlaps {:?}",
                    span,
                    nodes[parent.0].span
                );
                nodes[parent.0].children.push(id);
            }
            None => {
                debug_assert!(span.hi <= len, "span {span:?} past end of text ({len})");
                roots.push(id);
            }
        }
        nodes.push(MarkNode {
            span,
            children: Vec::new(),
        });
        stack.push(id);
    }

    MarkTree { len, roots, nodes }
}
