use std::collections::BTreeSet;
use std::ops::Range;

use crate::parsing::inline::scan_inline;
use crate::parsing::lines::LineIndex;
use crate::parsing::span::{MarkSpan, SpanKind};

use super::kinds::{BlockQuote, CodeFence, Heading, Rule};
use super::{ContinuationTable, LineContinuationState, paragraph};

/// Everything one block scan produces.
#[derive(Debug, Clone)]
pub struct BlockScan {
    /// Spans for the edit view, delimiters kept as literal pattern spans.
    pub edit: Vec<MarkSpan>,
    /// Spans for the clean view, paragraphs grouped.
    pub clean: Vec<MarkSpan>,
    pub continuations: ContinuationTable,
}

/// Scanner state shared by the four passes.
pub struct BlockScanner<'i, 'a> {
    pub(super) index: &'i LineIndex<'a>,
    pub(super) chars: Vec<Vec<char>>,
    /// Rows claimed by an earlier pass.
    pub(super) consumed: Vec<bool>,
    /// Rows with no block-level match.
    pub(super) plain: Vec<bool>,
    /// Paragraph boundary rows.
    pub(super) separators: BTreeSet<usize>,
    pub(super) out: BlockScan,
}

impl<'i, 'a> BlockScanner<'i, 'a> {
    pub fn new(index: &'i LineIndex<'a>) -> Self {
        let rows = index.row_count();
        Self {
            index,
            chars: index.lines().map(|line| line.chars().collect()).collect(),
            consumed: vec![false; rows],
            plain: vec![false; rows],
            separators: BTreeSet::new(),
            out: BlockScan {
                edit: Vec::new(),
                clean: Vec::new(),
                continuations: ContinuationTable::with_rows(rows),
            },
        }
    }

    pub fn scan(mut self) -> BlockScan {
        self.scan_fences();
        self.trace_pass("fences");
        self.scan_lists();
        self.trace_pass("lists");
        self.scan_tables();
        self.trace_pass("tables");
        self.scan_single_lines();
        self.trace_pass("lines");
        self.finish()
    }

    fn trace_pass(&self, pass: &str) {
        log::trace!(
            "after {pass}: {} edit spans, {} clean spans, {} rows consumed",
            self.out.edit.len(),
            self.out.clean.len(),
            self.consumed.iter().filter(|&&c| c).count()
        );
    }

    fn finish(mut self) -> BlockScan {
        for row in 0..self.index.row_count() {
            let plain = self.plain[row];
            let line = self.row_span(row, SpanKind::Line { plain });
            self.out.edit.push(line);
        }
        let paragraphs = paragraph::group(self.index, &self.separators);
        self.out.clean.extend(paragraphs);
        self.out
    }

    pub(super) fn row_span(&self, row: usize, kind: SpanKind) -> MarkSpan {
        MarkSpan::new(self.index.start(row), self.index.end(row), kind)
    }

    pub(super) fn rows_span(&self, first: usize, last: usize, kind: SpanKind) -> MarkSpan {
        MarkSpan::new(self.index.start(first), self.index.end(last), kind)
    }

    pub(super) fn push_both(&mut self, span: MarkSpan) {
        self.out.edit.push(span.clone());
        self.out.clean.push(span);
    }

    /// Marks `row` as taken by a block and as a paragraph boundary.
    pub(super) fn consume(&mut self, row: usize) {
        self.consumed[row] = true;
        self.separators.insert(row);
    }

    /// Runs the inline scan over `cols` of `row` into both lists.
    pub(super) fn inline(&mut self, row: usize, cols: Range<usize>) {
        if cols.is_empty() {
            return;
        }
        let spans = scan_inline(&self.chars[row], cols, self.index.start(row));
        for span in spans {
            self.push_both(span);
        }
    }

    /// Pass 1: a fence line opens, the next fence line closes. A fence left
    /// open at the end of the text has no effect.
    fn scan_fences(&mut self) {
        let mut open = None;
        for row in 0..self.index.row_count() {
            if !CodeFence::is_fence(self.index.line(row)) {
                continue;
            }
            match open.take() {
                None => open = Some(row),
                Some(first) => self.emit_fence(first, row),
            }
        }
    }

    fn emit_fence(&mut self, first: usize, last: usize) {
        self.out.clean.push(self.rows_span(first, last, SpanKind::Pre));
        self.out.clean.push(self.rows_span(first, last, SpanKind::CodeBlock));

        self.out.edit.push(self.row_span(first, SpanKind::FenceMarker));
        for row in first + 1..last {
            if self.index.line_len(row) > 0 {
                self.out.edit.push(self.row_span(row, SpanKind::CodeLine));
            }
        }
        self.out.edit.push(self.row_span(last, SpanKind::FenceMarker));

        for row in first..=last {
            self.consume(row);
        }
    }

    /// Pass 4: rule, heading and blockquote lines, and the inline scan of
    /// everything the earlier passes left.
    fn scan_single_lines(&mut self) {
        for row in 0..self.index.row_count() {
            if self.consumed[row] {
                continue;
            }
            let len = self.index.line_len(row);
            if len == 0 {
                self.separators.insert(row);
                continue;
            }

            if Rule::matches(self.index.line(row)) {
                self.push_both(self.row_span(row, SpanKind::Rule));
                self.separators.insert(row);
            } else if let Some(level) = Heading::level(&self.chars[row]) {
                self.push_both(self.row_span(row, SpanKind::Heading { level }));
                self.inline(row, usize::from(level) + 1..len);
                self.separators.insert(row);
            } else if BlockQuote::matches(&self.chars[row]) {
                self.push_both(self.row_span(row, SpanKind::BlockQuote));
                self.inline(row, BlockQuote::PREFIX_LEN..len);
                let cur_token = self.chars[row][..BlockQuote::PREFIX_LEN].iter().collect();
                self.out.continuations.set(
                    row,
                    LineContinuationState {
                        cur_token,
                        next_token: BlockQuote::CONTINUATION.to_string(),
                        is_plain: len == BlockQuote::PREFIX_LEN,
                    },
                );
                self.separators.insert(row);
            } else {
                self.plain[row] = true;
                self.inline(row, 0..len);
            }
        }
    }
}
