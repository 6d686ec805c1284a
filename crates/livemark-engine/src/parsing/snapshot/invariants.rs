use crate::parsing::span::MarkSpan;
use crate::parsing::tree::{MarkNode, MarkTree};

/// Validates scanner output invariants.
///
/// Asserts that:
/// - every span lies within `[0, len]` with `lo <= hi`
/// - the pattern lengths fit inside their span
/// - paired kinds carry a pattern on both sides
/// - no two spans partially overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(len: usize, spans: &[MarkSpan]) {
    for s in spans {
        assert!(
            s.lo <= s.hi && s.hi <= len,
            "span out of bounds: {s:?} (text len: {len})"
        );
        assert!(
            s.left_pattern_len + s.right_pattern_len <= s.len(),
            "pattern wider than span: {s:?}"
        );
        if s.kind.is_double() {
            assert!(
                s.left_pattern_len > 0 && s.right_pattern_len > 0,
                "paired span without a closing pattern: {s:?}"
            );
        }
    }

    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            assert!(
                a.is_disjoint(b) || a.contains(b) || b.contains(a),
                "laminar violation: {a:?} and {b:?} partially overlap"
            );
        }
    }
}

/// Validates a built tree: every child inside its parent, siblings in order
/// and disjoint.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_tree(tree: &MarkTree) {
    let roots: Vec<_> = tree.roots().collect();
    check_siblings(&roots);
    for node in tree.spans() {
        assert!(node.hi <= tree.len(), "span past end of tree: {node:?}");
    }
    let mut stack = roots;
    while let Some(node) = stack.pop() {
        let children: Vec<_> = tree.children(node).collect();
        for child in &children {
            assert!(
                node.span.contains(&child.span),
                "child {:?} not contained in parent {:?}",
                child.span,
                node.span
            );
        }
        check_siblings(&children);
        stack.extend(children);
    }
}

fn check_siblings(siblings: &[&MarkNode]) {
    for pair in siblings.windows(2) {
        assert!(
            pair[0].span.hi <= pair[1].span.lo,
            "siblings out of order or overlapping: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }
}
