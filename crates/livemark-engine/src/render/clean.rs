use crate::parsing::span::Tag;
use crate::parsing::tree::{MarkNode, MarkTree};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<CleanNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanNode {
    Element(Element),
    Text(String),
}

/// The clean view: delimiters stripped, paragraphs grouped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanTree {
    pub children: Vec<CleanNode>,
}

impl CleanTree {
    /// Canonical text form: element text with one newline after each
    /// block-level element and for each line break.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            push_plain(node, &mut out);
        }
        out
    }
}

fn push_plain(node: &CleanNode, out: &mut String) {
    match node {
        CleanNode::Text(text) => out.push_str(text),
        CleanNode::Element(element) => {
            if element.tag == Tag::LineBreak {
                out.push('\n');
                return;
            }
            for child in &element.children {
                push_plain(child, out);
            }
            if element.tag.is_block() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMode {
    /// Container elements: no bare text.
    Skip,
    /// Newlines dropped.
    Inline,
    /// Inside code: kept as-is.
    Verbatim,
}

/// Materializes the clean view of `tree`.
///
/// Nodes without a tag are transparent: only their children are emitted.
/// Tagged nodes strip their pattern lengths and carry their attributes.
pub fn render_clean(text: &str, tree: &MarkTree) -> CleanTree {
    let m = CleanMaterializer {
        chars: text.chars().collect(),
        tree,
    };
    let roots: Vec<&MarkNode> = tree.roots().collect();
    let mut children = Vec::new();
    m.fill(&roots, 0, tree.len(), TextMode::Inline, &mut children);
    CleanTree { children }
}

struct CleanMaterializer<'t> {
    chars: Vec<char>,
    tree: &'t MarkTree,
}

impl<'t> CleanMaterializer<'t> {
    fn fill(
        &self,
        nodes: &[&'t MarkNode],
        lo: usize,
        hi: usize,
        mode: TextMode,
        out: &mut Vec<CleanNode>,
    ) {
        let mut cursor = lo;
        for &node in nodes {
            if node.span.lo > cursor {
                self.text(cursor, node.span.lo, mode, out);
            }
            self.node(node, mode, out);
            cursor = cursor.max(node.span.hi);
        }
        if cursor < hi {
            self.text(cursor, hi, mode, out);
        }
    }

    fn node(&self, node: &'t MarkNode, mode: TextMode, out: &mut Vec<CleanNode>) {
        let children: Vec<&MarkNode> = self.tree.children(node).collect();
        let Some(tag) = node.span.kind.tag() else {
            for child in children {
                self.node(child, mode, out);
            }
            return;
        };

        let attributes = node
            .span
            .kind
            .attributes()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        let mut inner = Vec::new();
        if !tag.is_void() {
            let child_mode = if tag.is_container() {
                TextMode::Skip
            } else if tag == Tag::Code || mode == TextMode::Verbatim {
                TextMode::Verbatim
            } else {
                TextMode::Inline
            };
            let (lo, hi) = node.span.content();
            self.fill(&children, lo, hi, child_mode, &mut inner);
        }
        out.push(CleanNode::Element(Element {
            tag,
            attributes,
            children: inner,
        }));
    }

    fn text(&self, lo: usize, hi: usize, mode: TextMode, out: &mut Vec<CleanNode>) {
        let text: String = match mode {
            TextMode::Skip => return,
            TextMode::Inline => self.chars[lo..hi].iter().filter(|&&c| c != '\n').collect(),
            TextMode::Verbatim => self.chars[lo..hi].iter().collect(),
        };
        if !text.is_empty() {
            out.push(CleanNode::Text(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::LineIndex;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> CleanTree {
        let doc = parse_document(&LineIndex::new(text));
        render_clean(text, &doc.clean)
    }

    fn el(tag: Tag, children: Vec<CleanNode>) -> CleanNode {
        CleanNode::Element(Element {
            tag,
            attributes: vec![],
            children,
        })
    }

    fn text(s: &str) -> CleanNode {
        CleanNode::Text(s.to_string())
    }

    #[test]
    fn heading_strips_marker() {
        assert_eq!(
            render("# Title").children,
            vec![el(Tag::Heading(1), vec![text("Title")])]
        );
    }

    #[test]
    fn paragraph_with_break() {
        assert_eq!(
            render("a\nb").children,
            vec![el(
                Tag::Paragraph,
                vec![text("a"), el(Tag::LineBreak, vec![]), text("b")]
            )]
        );
    }

    #[test]
    fn code_block_keeps_interior_newlines() {
        assert_eq!(
            render("```\na\n\nb\n```").children,
            vec![CleanNode::Element(Element {
                tag: Tag::Pre,
                attributes: vec![("class".into(), "code-block".into())],
                children: vec![el(Tag::Code, vec![text("a\n\nb")])],
            })]
        );
    }

    #[test]
    fn empty_code_block() {
        let tree = render("```\n```");
        assert!(matches!(
            &tree.children[..],
            [CleanNode::Element(Element { tag: Tag::Pre, children, .. })]
                if children == &vec![el(Tag::Code, vec![])]
        ));
    }

    #[test]
    fn table_emits_no_bare_text() {
        assert_eq!(
            render("|a|\n|---|\n|b|").children,
            vec![el(
                Tag::Table,
                vec![
                    el(
                        Tag::TableHead,
                        vec![el(
                            Tag::TableRow,
                            vec![el(Tag::TableHeaderCell, vec![text("a")])]
                        )]
                    ),
                    el(
                        Tag::TableBody,
                        vec![el(Tag::TableRow, vec![el(Tag::TableCell, vec![text("b")])])]
                    ),
                ]
            )]
        );
    }

    #[test]
    fn image_is_void_with_attributes() {
        assert_eq!(
            render("![cat](c.png)").children,
            vec![el(
                Tag::Paragraph,
                vec![CleanNode::Element(Element {
                    tag: Tag::Image,
                    attributes: vec![("src".into(), "c.png".into()), ("alt".into(), "cat".into())],
                    children: vec![],
                })]
            )]
        );
    }

    #[test]
    fn link_keeps_text() {
        assert_eq!(
            render("[home](/)").children,
            vec![el(
                Tag::Paragraph,
                vec![CleanNode::Element(Element {
                    tag: Tag::Link,
                    attributes: vec![("href".into(), "/".into()), ("title".into(), "home".into())],
                    children: vec![text("home")],
                })]
            )]
        );
    }

    #[test]
    fn escape_renders_escaped_char() {
        assert_eq!(
            render(r"\*").children,
            vec![el(Tag::Paragraph, vec![el(Tag::Escape, vec![text("*")])])]
        );
    }

    #[test]
    fn blank_lines_emit_nothing() {
        assert_eq!(render("\n\n").children, vec![]);
    }

    #[test]
    fn plain_text_form() {
        let tree = render("# T\na *b*\nc\n\n- x");
        assert_eq!(tree.plain_text(), "T\na b\nc\nx\n");
    }
}
