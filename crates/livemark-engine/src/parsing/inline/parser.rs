use std::ops::Range;

use crate::parsing::span::{MarkSpan, SpanKind};

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Escape, Media},
};

/// Scans `line[cols]` for inline spans.
///
/// # Arguments
/// - `line`: the whole line as chars
/// - `cols`: the content region to scan, in line-local columns
/// - `base`: document offset of `line[0]`
///
/// # Unmatched delimiters
/// An opener without a closer, and any opener left open when an earlier
/// entry of the stack closes, stays literal text. A closer right next to its
/// opener (`**`, ` `` `) forms no span either.
pub fn scan_inline(line: &[char], cols: Range<usize>, base: usize) -> Vec<MarkSpan> {
    let region = &line[cols.clone()];
    let region_base = base + cols.start;
    let region_text: String = region.iter().collect();

    let mut spans = Vec::new();
    let mut claimed = Vec::new();
    for m in Media::find_all(&region_text) {
        claimed.push(m.lo..m.hi);
        spans.push(MarkSpan::new(region_base + m.lo, region_base + m.hi, m.kind));
    }

    let mut cur = Cursor::new(region, region_base);
    let mut open: Vec<(usize, Delimiter)> = Vec::new();

    while !cur.eof() {
        if let Some(end) = claimed_end(&claimed, cur.i) {
            cur.bump_n(end - cur.i);
            continue;
        }

        if let Some(len) = Escape::at(cur.s, cur.i).filter(|&len| is_free(&claimed, cur.i, len)) {
            spans.push(MarkSpan::new(cur.pos(), cur.pos() + len, SpanKind::Escape));
            cur.bump_n(len);
            continue;
        }

        let Some(delimiter) = Delimiter::at(cur.s, cur.i) else {
            cur.bump();
            continue;
        };
        let width = delimiter.width();
        match open.iter().rposition(|(_, d)| *d == delimiter) {
            Some(idx) => {
                let opener = open[idx].0;
                if opener + width < cur.pos() {
                    spans.push(MarkSpan::new(
                        opener,
                        cur.pos() + width,
                        SpanKind::Inline(delimiter),
                    ));
                }
                open.truncate(idx);
            }
            None => open.push((cur.pos(), delimiter)),
        }
        cur.bump_n(width);
    }

    prune_code_interiors(&mut spans);
    spans
}

/// End of the claimed range containing local index `i`.
fn claimed_end(claimed: &[Range<usize>], i: usize) -> Option<usize> {
    claimed.iter().find(|r| r.contains(&i)).map(|r| r.end)
}

fn is_free(claimed: &[Range<usize>], i: usize, len: usize) -> bool {
    claimed.iter().all(|r| i + len <= r.start || r.end <= i)
}

/// Code spans are verbatim: drop every span that starts strictly inside one.
fn prune_code_interiors(spans: &mut Vec<MarkSpan>) {
    let code: Vec<(usize, usize)> = spans
        .iter()
        .filter(|s| s.kind == SpanKind::Inline(Delimiter::Code))
        .map(|s| (s.lo, s.hi))
        .collect();
    if code.is_empty() {
        return;
    }
    spans.retain(|s| !code.iter().any(|&(lo, hi)| lo < s.lo && s.lo < hi));
}
