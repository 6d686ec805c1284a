use crate::parsing::span::SpanKind;

use super::LineContinuationState;
use super::kinds::{List, ListItemMatch, ListKind};
use super::scanner::BlockScanner;

impl BlockScanner<'_, '_> {
    /// Pass 2: lists, by recursive descent over tab depth.
    pub(super) fn scan_lists(&mut self) {
        let mut row = 0;
        while row < self.index.row_count() {
            match self.list_item_at(row, 0) {
                Some(item) => row = self.scan_list(row, 0, item.kind),
                None => row += 1,
            }
        }
    }

    fn list_item_at(&self, row: usize, depth: usize) -> Option<ListItemMatch> {
        if self.consumed[row] {
            return None;
        }
        List::item_at(&self.chars[row], depth)
    }

    /// Scans one list of `kind` at `depth` whose first item is at `first`.
    ///
    /// Nested lists are tried at `depth + 1` before each row is tested at
    /// this depth. Returns the row after the list.
    fn scan_list(&mut self, first: usize, depth: usize, kind: ListKind) -> usize {
        let mut row = first;
        let mut items = Vec::new();
        while row < self.index.row_count() {
            if let Some(inner) = self.list_item_at(row, depth + 1) {
                row = self.scan_list(row, depth + 1, inner.kind);
                continue;
            }
            match self.list_item_at(row, depth) {
                Some(item) if item.kind == kind => {
                    items.push((row, item.prefix_len));
                    row += 1;
                }
                _ => break,
            }
        }

        let last = row - 1;
        self.out
            .clean
            .push(self.rows_span(first, last, SpanKind::List(kind)));

        for (i, (item_row, prefix_len)) in items.into_iter().enumerate() {
            let number = i + 1;
            let item = SpanKind::ListItem {
                kind,
                number,
                prefix_len,
            };
            self.push_both(self.row_span(item_row, item));
            self.inline(item_row, prefix_len..self.index.line_len(item_row));

            let cur_token = self.chars[item_row][..prefix_len].iter().collect();
            self.out.continuations.set(
                item_row,
                LineContinuationState {
                    cur_token,
                    next_token: List::continuation(kind, depth, number + 1),
                    is_plain: self.index.line_len(item_row) == prefix_len,
                },
            );
            self.consume(item_row);
        }

        log::trace!("list {kind:?} at depth {depth}: rows {first}..={last}");
        row
    }
}
