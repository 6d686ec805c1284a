use std::borrow::Cow;

use super::blocks::kinds::ListKind;
use super::inline::kinds::Delimiter;

/// The output element a span materializes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `h1`..`h6`.
    Heading(u8),
    BlockQuote,
    Rule,
    Pre,
    Code,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeaderCell,
    TableCell,
    Strong,
    Emphasis,
    Strikethrough,
    Superscript,
    Subscript,
    Image,
    Link,
    /// A backslash escape; renders the escaped character.
    Escape,
    Paragraph,
    LineBreak,
}

impl Tag {
    /// HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6",
            Tag::BlockQuote => "blockquote",
            Tag::Rule => "hr",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Table => "table",
            Tag::TableHead => "thead",
            Tag::TableBody => "tbody",
            Tag::TableRow => "tr",
            Tag::TableHeaderCell => "th",
            Tag::TableCell => "td",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Strikethrough => "del",
            Tag::Superscript => "sup",
            Tag::Subscript => "sub",
            Tag::Image => "img",
            Tag::Link => "a",
            Tag::Escape => "span",
            Tag::Paragraph => "p",
            Tag::LineBreak => "br",
        }
    }

    /// Elements that never carry children.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Rule | Tag::Image | Tag::LineBreak)
    }

    /// Elements whose content is other elements only; bare text between
    /// their children is never emitted in the clean view.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Tag::Pre
                | Tag::UnorderedList
                | Tag::OrderedList
                | Tag::Table
                | Tag::TableHead
                | Tag::TableBody
                | Tag::TableRow
        )
    }

    /// Block-level elements, used when flattening the clean view to text.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Tag::Heading(_)
                | Tag::BlockQuote
                | Tag::Rule
                | Tag::Pre
                | Tag::UnorderedList
                | Tag::OrderedList
                | Tag::ListItem
                | Tag::Table
                | Tag::TableRow
                | Tag::Paragraph
        )
    }
}

/// What a [`MarkSpan`] denotes.
///
/// Every consumer (sorter tie-break, both materializers, attribute export)
/// matches on this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// One raw line of the edit view. `plain` is set when the line produced
    /// no block-level match.
    Line { plain: bool },
    Heading { level: u8 },
    BlockQuote,
    Rule,
    /// Clean-view wrapper around a fenced block.
    Pre,
    /// Clean-view fenced block, fence lines included in the span.
    CodeBlock,
    /// Edit-view interior line of a fenced block.
    CodeLine,
    /// Edit-view literal for a fence token line.
    FenceMarker,
    List(ListKind),
    /// `prefix_len` counts the indent tabs, the marker and its space.
    ListItem {
        kind: ListKind,
        number: usize,
        prefix_len: usize,
    },
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell { header: bool },
    /// Edit-view literal `|`.
    TablePipe,
    /// Edit-view literal for the `|---|` line.
    TableSeparator,
    Inline(Delimiter),
    Escape,
    Image { alt: String, src: String },
    Link { text: String, href: String },
    Paragraph,
    /// Clean-view break over the `\n` joining two paragraph rows.
    LineBreak,
}

impl SpanKind {
    pub fn tag(&self) -> Option<Tag> {
        match self {
            SpanKind::Line { .. }
            | SpanKind::FenceMarker
            | SpanKind::TablePipe
            | SpanKind::TableSeparator => None,
            SpanKind::Heading { level } => Some(Tag::Heading(*level)),
            SpanKind::BlockQuote => Some(Tag::BlockQuote),
            SpanKind::Rule => Some(Tag::Rule),
            SpanKind::Pre => Some(Tag::Pre),
            SpanKind::CodeBlock | SpanKind::CodeLine => Some(Tag::Code),
            SpanKind::List(ListKind::Unordered) => Some(Tag::UnorderedList),
            SpanKind::List(ListKind::Ordered) => Some(Tag::OrderedList),
            SpanKind::ListItem { .. } => Some(Tag::ListItem),
            SpanKind::Table => Some(Tag::Table),
            SpanKind::TableHead => Some(Tag::TableHead),
            SpanKind::TableBody => Some(Tag::TableBody),
            SpanKind::TableRow => Some(Tag::TableRow),
            SpanKind::TableCell { header: true } => Some(Tag::TableHeaderCell),
            SpanKind::TableCell { header: false } => Some(Tag::TableCell),
            SpanKind::Inline(delimiter) => Some(delimiter.tag()),
            SpanKind::Escape => Some(Tag::Escape),
            SpanKind::Image { .. } => Some(Tag::Image),
            SpanKind::Link { .. } => Some(Tag::Link),
            SpanKind::Paragraph => Some(Tag::Paragraph),
            SpanKind::LineBreak => Some(Tag::LineBreak),
        }
    }

    /// The delimiter text this kind is recognized by, empty when it has none.
    pub fn pattern(&self) -> Cow<'static, str> {
        match self {
            SpanKind::Heading { level } => Cow::Owned("#".repeat(usize::from(*level))),
            SpanKind::BlockQuote => Cow::Borrowed(">"),
            SpanKind::Rule => Cow::Borrowed("---"),
            SpanKind::FenceMarker => Cow::Borrowed("```"),
            SpanKind::ListItem { kind, number, .. } => Cow::Owned(kind.marker(*number)),
            SpanKind::TablePipe => Cow::Borrowed("|"),
            SpanKind::Inline(delimiter) => Cow::Borrowed(delimiter.pattern()),
            SpanKind::Escape => Cow::Borrowed("\\"),
            SpanKind::Line { .. }
            | SpanKind::Pre
            | SpanKind::CodeBlock
            | SpanKind::CodeLine
            | SpanKind::List(_)
            | SpanKind::Table
            | SpanKind::TableHead
            | SpanKind::TableBody
            | SpanKind::TableRow
            | SpanKind::TableCell { .. }
            | SpanKind::TableSeparator
            | SpanKind::Image { .. }
            | SpanKind::Link { .. }
            | SpanKind::Paragraph
            | SpanKind::LineBreak => Cow::Borrowed(""),
        }
    }

    /// Whether the span needs a closing delimiter as well as an opening one.
    pub fn is_double(&self) -> bool {
        matches!(
            self,
            SpanKind::Inline(_) | SpanKind::Image { .. } | SpanKind::Link { .. }
        )
    }

    /// Whether the span's style also applies to its delimiter text.
    pub fn styles_pattern(&self) -> bool {
        match self {
            SpanKind::Heading { .. } | SpanKind::BlockQuote | SpanKind::Rule => true,
            SpanKind::Inline(delimiter) => delimiter.styles_pattern(),
            SpanKind::Line { .. }
            | SpanKind::Pre
            | SpanKind::CodeBlock
            | SpanKind::CodeLine
            | SpanKind::FenceMarker
            | SpanKind::List(_)
            | SpanKind::ListItem { .. }
            | SpanKind::Table
            | SpanKind::TableHead
            | SpanKind::TableBody
            | SpanKind::TableRow
            | SpanKind::TableCell { .. }
            | SpanKind::TablePipe
            | SpanKind::TableSeparator
            | SpanKind::Escape
            | SpanKind::Image { .. }
            | SpanKind::Link { .. }
            | SpanKind::Paragraph
            | SpanKind::LineBreak => false,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, SpanKind::Line { .. })
    }

    /// Delimiter lengths `(left, right)` for a span of `width` chars.
    pub fn pattern_lens(&self, width: usize) -> (usize, usize) {
        let lens = match self {
            SpanKind::Heading { level } => (usize::from(*level) + 1, 0),
            SpanKind::BlockQuote => (2, 0),
            SpanKind::Rule | SpanKind::FenceMarker => (3, 0),
            // Fence token plus the newline next to it, on each side.
            SpanKind::CodeBlock => (4.min(width), 4.min(width.saturating_sub(4))),
            SpanKind::ListItem { prefix_len, .. } => (*prefix_len, 0),
            SpanKind::TablePipe | SpanKind::Escape => (1, 0),
            SpanKind::TableSeparator => (width, 0),
            SpanKind::Inline(delimiter) => (delimiter.width(), delimiter.width()),
            SpanKind::Image { src, .. } => (2, 3 + src.chars().count()),
            SpanKind::Link { href, .. } => (1, 3 + href.chars().count()),
            SpanKind::Line { .. }
            | SpanKind::Pre
            | SpanKind::CodeLine
            | SpanKind::List(_)
            | SpanKind::Table
            | SpanKind::TableHead
            | SpanKind::TableBody
            | SpanKind::TableRow
            | SpanKind::TableCell { .. }
            | SpanKind::Paragraph
            | SpanKind::LineBreak => (0, 0),
        };
        debug_assert!(
            lens.0 + lens.1 <= width,
            "{self:?}: pattern {lens:?} wider than span {width}"
        );
        lens
    }

    /// Attributes carried into the clean view.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            SpanKind::Pre | SpanKind::Inline(Delimiter::Code) => {
                vec![("class", "code-block".to_string())]
            }
            SpanKind::Image { alt, src } => vec![("src", src.clone()), ("alt", alt.clone())],
            SpanKind::Link { text, href } => {
                vec![("href", href.clone()), ("title", text.clone())]
            }
            SpanKind::Line { .. }
            | SpanKind::Heading { .. }
            | SpanKind::BlockQuote
            | SpanKind::Rule
            | SpanKind::CodeBlock
            | SpanKind::CodeLine
            | SpanKind::FenceMarker
            | SpanKind::List(_)
            | SpanKind::ListItem { .. }
            | SpanKind::Table
            | SpanKind::TableHead
            | SpanKind::TableBody
            | SpanKind::TableRow
            | SpanKind::TableCell { .. }
            | SpanKind::TablePipe
            | SpanKind::TableSeparator
            | SpanKind::Inline(_)
            | SpanKind::Escape
            | SpanKind::Paragraph
            | SpanKind::LineBreak => vec![],
        }
    }

    /// Tie-break for spans sharing both endpoints: the kind that must become
    /// the ancestor ranks lower.
    pub fn tie_rank(&self) -> u8 {
        match self {
            SpanKind::Line { .. } | SpanKind::Paragraph => 0,
            SpanKind::Pre
            | SpanKind::List(_)
            | SpanKind::Table
            | SpanKind::Heading { .. }
            | SpanKind::BlockQuote
            | SpanKind::Rule => 1,
            SpanKind::CodeBlock
            | SpanKind::CodeLine
            | SpanKind::ListItem { .. }
            | SpanKind::TableHead
            | SpanKind::TableBody => 2,
            SpanKind::TableRow => 3,
            SpanKind::TableCell { .. } => 4,
            SpanKind::FenceMarker
            | SpanKind::TablePipe
            | SpanKind::TableSeparator
            | SpanKind::Inline(_)
            | SpanKind::Escape
            | SpanKind::Image { .. }
            | SpanKind::Link { .. }
            | SpanKind::LineBreak => 5,
        }
    }
}

/// A typed half-open char interval `[lo, hi)` over the whole document.
///
/// # Invariants
///
/// - `lo <= hi`
/// - `left_pattern_len + right_pattern_len <= hi - lo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSpan {
    pub lo: usize,
    pub hi: usize,
    pub kind: SpanKind,
    pub left_pattern_len: usize,
    pub right_pattern_len: usize,
}

impl MarkSpan {
    pub fn new(lo: usize, hi: usize, kind: SpanKind) -> Self {
        debug_assert!(lo <= hi, "inverted span [{lo}, {hi})");
        let (left_pattern_len, right_pattern_len) = kind.pattern_lens(hi - lo);
        Self {
            lo,
            hi,
            kind,
            left_pattern_len,
            right_pattern_len,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span with its delimiters stripped.
    pub fn content(&self) -> (usize, usize) {
        (
            self.lo + self.left_pattern_len,
            self.hi - self.right_pattern_len,
        )
    }

    pub fn contains(&self, other: &MarkSpan) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    pub fn is_disjoint(&self, other: &MarkSpan) -> bool {
        self.hi <= other.lo || other.hi <= self.lo
    }

    pub fn is_line(&self) -> bool {
        self.kind.is_line()
    }

    pub fn is_plain_line(&self) -> bool {
        matches!(self.kind, SpanKind::Line { plain: true })
    }
}
