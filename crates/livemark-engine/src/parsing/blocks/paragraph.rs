use std::collections::BTreeSet;

use crate::parsing::lines::LineIndex;
use crate::parsing::span::{MarkSpan, SpanKind};

/// Groups every run of rows between boundary rows into one paragraph, with
/// a line-break span over each newline joining two of its rows.
pub fn group(index: &LineIndex<'_>, separators: &BTreeSet<usize>) -> Vec<MarkSpan> {
    let mut spans = Vec::new();
    let mut run_start = None;
    for row in 0..index.row_count() {
        if separators.contains(&row) {
            if let Some(first) = run_start.take() {
                push_paragraph(index, first, row - 1, &mut spans);
            }
        } else if run_start.is_none() {
            run_start = Some(row);
        }
    }
    if let Some(first) = run_start {
        push_paragraph(index, first, index.row_count() - 1, &mut spans);
    }
    spans
}

fn push_paragraph(index: &LineIndex<'_>, first: usize, last: usize, spans: &mut Vec<MarkSpan>) {
    spans.push(MarkSpan::new(
        index.start(first),
        index.end(last),
        SpanKind::Paragraph,
    ));
    for row in first..last {
        let newline = index.end(row);
        spans.push(MarkSpan::new(newline, newline + 1, SpanKind::LineBreak));
    }
}
