use crate::parsing::span::SpanKind;
use crate::parsing::tree::{MarkNode, MarkTree};

/// Renders `tree` as one line per node, indented by depth:
/// `label [lo, hi) "text"`.
pub fn outline(text: &str, tree: &MarkTree) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    for node in tree.roots() {
        push_node(tree, node, &chars, 0, &mut lines);
    }
    lines.join("\n")
}

fn push_node(
    tree: &MarkTree,
    node: &MarkNode,
    chars: &[char],
    depth: usize,
    lines: &mut Vec<String>,
) {
    let span = &node.span;
    let snippet: String = chars[span.lo..span.hi].iter().collect();
    lines.push(format!(
        "{}{} [{}, {}) {snippet:?}",
        "  ".repeat(depth),
        label(&span.kind),
        span.lo,
        span.hi
    ));
    for child in tree.children(node) {
        push_node(tree, child, chars, depth + 1, lines);
    }
}

/// Short stable name for a span kind.
pub fn label(kind: &SpanKind) -> String {
    match kind {
        SpanKind::Line { plain: true } => "line*".to_string(),
        SpanKind::Line { plain: false } => "line".to_string(),
        SpanKind::FenceMarker => "fence".to_string(),
        SpanKind::CodeLine => "code-line".to_string(),
        SpanKind::TablePipe => "pipe".to_string(),
        SpanKind::TableSeparator => "separator".to_string(),
        SpanKind::ListItem { number, .. } => format!("li#{number}"),
        other => other
            .tag()
            .map_or_else(|| format!("{other:?}"), |tag| tag.name().to_string()),
    }
}
