use crate::parsing::span::{MarkSpan, SpanKind};

use super::kinds::Table;
use super::kinds::table::Cell;
use super::scanner::BlockScanner;

impl BlockScanner<'_, '_> {
    /// Pass 3: a `|---|` separator row turns the row above into a header
    /// when both have the same column count, and the run of same-width rows
    /// below into the body. A table needs at least one body row.
    pub(super) fn scan_tables(&mut self) {
        let mut row = 1;
        while row < self.index.row_count() {
            match self.table_at(row) {
                Some(body) => {
                    self.emit_table(row, body);
                    row += body + 1;
                }
                None => row += 1,
            }
        }
    }

    fn row_cells(&self, row: usize) -> Option<Vec<Cell>> {
        if self.consumed[row] {
            return None;
        }
        Table::cells(self.index.line(row))
    }

    /// Body height if the separator at `sep` completes a table.
    fn table_at(&self, sep: usize) -> Option<usize> {
        if self.consumed[sep] {
            return None;
        }
        let columns = Table::separator_columns(self.index.line(sep))?;
        let header = self.row_cells(sep - 1)?;
        if header.len() != columns {
            return None;
        }
        let body = (sep + 1..self.index.row_count())
            .take_while(|&row| self.row_cells(row).is_some_and(|cells| cells.len() == columns))
            .count();
        (body > 0).then_some(body)
    }

    fn emit_table(&mut self, sep: usize, body: usize) {
        let head = sep - 1;
        let last = sep + body;

        self.out.clean.push(self.rows_span(head, last, SpanKind::Table));
        self.out.clean.push(self.row_span(head, SpanKind::TableHead));
        self.out.clean.push(self.rows_span(sep, last, SpanKind::TableBody));
        self.out.edit.push(self.row_span(sep, SpanKind::TableSeparator));

        for row in head..=last {
            self.consume(row);
            if row == sep {
                continue;
            }
            self.out.clean.push(self.row_span(row, SpanKind::TableRow));

            let base = self.index.start(row);
            for col in Table::pipes(self.index.line(row)) {
                self.out
                    .edit
                    .push(MarkSpan::new(base + col, base + col + 1, SpanKind::TablePipe));
            }

            let header = row == head;
            for cell in Table::cells(self.index.line(row)).unwrap_or_default() {
                self.out.clean.push(MarkSpan::new(
                    base + cell.col,
                    base + cell.col + cell.len,
                    SpanKind::TableCell { header },
                ));
                self.inline(row, cell.col..cell.col + cell.len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parsing::blocks::BlockScanner;
    use crate::parsing::lines::LineIndex;
    use crate::parsing::span::SpanKind;
    use pretty_assertions::assert_eq;

    fn clean(text: &str) -> Vec<(usize, usize, SpanKind)> {
        let index = LineIndex::new(text);
        let mut out: Vec<_> = BlockScanner::new(&index)
            .scan()
            .clean
            .into_iter()
            .map(|s| (s.lo, s.hi, s.kind))
            .collect();
        out.sort_by_key(|(lo, hi, kind)| (*lo, std::cmp::Reverse(*hi), kind.tie_rank()));
        out
    }

    #[test]
    fn two_by_two_table() {
        assert_eq!(
            clean("| a | b |\n|---|---|\n| 1 | 2 |"),
            vec![
                (0, 29, SpanKind::Table),
                (0, 9, SpanKind::TableHead),
                (0, 9, SpanKind::TableRow),
                (1, 4, SpanKind::TableCell { header: true }),
                (5, 8, SpanKind::TableCell { header: true }),
                (10, 29, SpanKind::TableBody),
                (20, 29, SpanKind::TableRow),
                (21, 24, SpanKind::TableCell { header: false }),
                (25, 28, SpanKind::TableCell { header: false }),
            ]
        );
    }

    #[test]
    fn edit_view_gets_pipes_and_separator() {
        let index = LineIndex::new("|a|\n|---|\n|b|");
        let scan = BlockScanner::new(&index).scan();
        let pipes = scan.edit.iter().filter(|s| s.kind == SpanKind::TablePipe).count();
        assert_eq!(pipes, 4);
        assert!(
            scan.edit
                .iter()
                .any(|s| (s.lo, s.hi) == (4, 9) && s.kind == SpanKind::TableSeparator)
        );
        assert!(!scan.clean.iter().any(|s| s.kind == SpanKind::TablePipe));
    }

    #[test]
    fn header_without_body_is_not_a_table() {
        let spans = clean("| a |\n|---|");
        assert!(!spans.iter().any(|(_, _, k)| *k == SpanKind::Table));
    }

    #[test]
    fn column_mismatch_is_not_a_table() {
        let spans = clean("| a | b |\n|---|\n| 1 |");
        assert!(!spans.iter().any(|(_, _, k)| *k == SpanKind::Table));
    }

    #[test]
    fn body_stops_at_width_change() {
        let spans = clean("|a|\n|---|\n|b|\n|c|d|");
        assert!(spans.contains(&(0, 13, SpanKind::Table)));
        assert!(spans.contains(&(14, 19, SpanKind::Paragraph)));
    }

    #[test]
    fn inline_scan_runs_per_cell() {
        let spans = clean("|*a*|b|\n|---|---|\n|c|*d|");
        let inline: Vec<_> = spans
            .iter()
            .filter(|(_, _, k)| matches!(k, SpanKind::Inline(_)))
            .map(|(lo, hi, _)| (*lo, *hi))
            .collect();
        assert_eq!(inline, vec![(1, 4)]);
    }
}
