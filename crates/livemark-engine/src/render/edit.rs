use crate::editing::caret::CaretPosition;
use crate::parsing::span::Tag;
use crate::parsing::tree::{MarkNode, MarkTree};

/// Opaque handle to one emitted leaf, unique within one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeafId(pub usize);

/// A run of text from one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub id: LeafId,
    pub text: String,
    pub row: usize,
    /// Column of the leaf's first char within its row.
    pub column: usize,
}

impl Leaf {
    /// Width in chars.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditNode {
    /// A styled wrapper; may be empty.
    Styled { tag: Tag, children: Vec<EditNode> },
    /// Delimiter text, shown as-is with pattern styling.
    Pattern(Leaf),
    Text(Leaf),
    /// The single leaf of an empty line.
    Break(Leaf),
}

impl EditNode {
    /// Leaves under this node in order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.push_leaves(&mut out);
        out
    }

    fn push_leaves<'n>(&'n self, out: &mut Vec<&'n Leaf>) {
        match self {
            EditNode::Styled { children, .. } => {
                for child in children {
                    child.push_leaves(out);
                }
            }
            EditNode::Pattern(leaf) | EditNode::Text(leaf) | EditNode::Break(leaf) => {
                out.push(leaf)
            }
        }
    }
}

/// One row of the edit view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLine {
    pub row: usize,
    pub children: Vec<EditNode>,
}

impl EditLine {
    pub fn leaves(&self) -> Vec<&Leaf> {
        self.children.iter().flat_map(EditNode::leaves).collect()
    }

    /// The row's text, rebuilt from its leaves.
    pub fn text(&self) -> String {
        self.leaves().iter().map(|leaf| leaf.text.as_str()).collect()
    }
}

/// The edit view: every row, delimiters kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditTree {
    pub lines: Vec<EditLine>,
}

impl EditTree {
    pub fn leaf(&self, id: LeafId) -> Option<&Leaf> {
        self.lines
            .iter()
            .flat_map(EditLine::leaves)
            .find(|leaf| leaf.id == id)
    }
}

/// Where the host should put the caret: a leaf and an offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretTarget {
    pub leaf: LeafId,
    pub offset: usize,
}

/// Materializes the edit view of `tree`, locating `caret` on the way.
///
/// Every line node becomes an [`EditLine`]; the row counter advances once
/// per line. For each emitted leaf covering the caret's column on the
/// caret's row, the leaf becomes the target, so the last covering leaf wins.
pub fn render_edit(
    text: &str,
    tree: &MarkTree,
    caret: Option<CaretPosition>,
) -> (EditTree, Option<CaretTarget>) {
    let mut m = EditMaterializer {
        chars: text.chars().collect(),
        tree,
        caret,
        row: 0,
        row_start: 0,
        next_leaf: 0,
        target: None,
    };
    let mut lines = Vec::new();
    for node in tree.roots() {
        debug_assert!(node.span.is_line(), "edit tree root is not a line: {node:?}");
        lines.push(m.line(node));
        m.row += 1;
    }
    (EditTree { lines }, m.target)
}

struct EditMaterializer<'t> {
    chars: Vec<char>,
    tree: &'t MarkTree,
    caret: Option<CaretPosition>,
    row: usize,
    row_start: usize,
    next_leaf: usize,
    target: Option<CaretTarget>,
}

impl EditMaterializer<'_> {
    fn line(&mut self, node: &MarkNode) -> EditLine {
        self.row_start = node.span.lo;
        let mut children = Vec::new();
        if node.span.is_empty() {
            children.push(EditNode::Break(self.leaf(node.span.lo, node.span.lo)));
        } else {
            self.fill(node, node.span.lo, node.span.hi, &mut children);
        }
        EditLine {
            row: self.row,
            children,
        }
    }

    /// Emits `[lo, hi)` of `node`: its children, with text leaves between.
    fn fill(&mut self, node: &MarkNode, lo: usize, hi: usize, out: &mut Vec<EditNode>) {
        let tree = self.tree;
        let mut cursor = lo;
        for child in tree.children(node) {
            if child.span.lo > cursor {
                self.text(cursor, child.span.lo, out);
            }
            self.node(child, out);
            cursor = cursor.max(child.span.hi);
        }
        if cursor < hi {
            self.text(cursor, hi, out);
        }
    }

    fn node(&mut self, node: &MarkNode, out: &mut Vec<EditNode>) {
        let span = &node.span;
        let (inner_lo, inner_hi) = span.content();

        let prefix = self.pattern(span.lo, inner_lo);
        let mut inner = Vec::new();
        self.fill(node, inner_lo, inner_hi, &mut inner);
        let suffix = self.pattern(inner_hi, span.hi);

        match span.kind.tag() {
            // Literal placeholders: the pattern shows, no wrapper.
            None => {
                out.extend(prefix);
                out.extend(inner);
                out.extend(suffix);
            }
            Some(tag) if span.kind.styles_pattern() => {
                let mut children: Vec<EditNode> = prefix.into_iter().collect();
                children.extend(inner);
                children.extend(suffix);
                out.push(EditNode::Styled { tag, children });
            }
            Some(tag) => {
                out.extend(prefix);
                out.push(EditNode::Styled {
                    tag,
                    children: inner,
                });
                out.extend(suffix);
            }
        }
    }

    fn text(&mut self, lo: usize, hi: usize, out: &mut Vec<EditNode>) {
        if lo < hi {
            out.push(EditNode::Text(self.leaf(lo, hi)));
        }
    }

    fn pattern(&mut self, lo: usize, hi: usize) -> Option<EditNode> {
        (lo < hi).then(|| EditNode::Pattern(self.leaf(lo, hi)))
    }

    fn leaf(&mut self, lo: usize, hi: usize) -> Leaf {
        let id = LeafId(self.next_leaf);
        self.next_leaf += 1;
        let column = lo - self.row_start;
        let end = hi - self.row_start;
        if let Some(caret) = self.caret
            && caret.row == self.row
            && (column..=end).contains(&caret.column)
        {
            self.target = Some(CaretTarget {
                leaf: id,
                offset: caret.column - column,
            });
        }
        Leaf {
            id,
            text: self.chars[lo..hi].iter().collect(),
            row: self.row,
            column,
        }
    }
}
