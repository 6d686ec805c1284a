use std::cmp::Reverse;

use crate::parsing::span::MarkSpan;

/// Orders spans by `(lo, -hi, tie_rank)`.
///
/// When two spans share a start, the wider one sorts first; when they share
/// both ends, the kind that must become the ancestor does. The sort is
/// stable, so fully equal keys keep scanner order.
pub fn sort_spans(spans: &mut [MarkSpan]) {
    spans.sort_by_key(|s| (s.lo, Reverse(s.hi), s.kind.tie_rank()));
}
