use crate::parsing::lines::LineIndex;

/// A caret in row/column terms.
///
/// `offset` is the visible offset: the sum of all prior rows' lengths plus
/// `column`. Newlines do not count toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretPosition {
    pub row: usize,
    pub column: usize,
    pub offset: usize,
}

impl LineIndex<'_> {
    /// Length of the text without its newlines.
    pub fn visible_len(&self) -> usize {
        self.text_len() + 1 - self.row_count()
    }

    /// The caret at absolute text offset `text_offset` (newlines counted).
    ///
    /// Offsets past the end clamp to the end of the last line.
    pub fn caret_at(&self, text_offset: usize) -> CaretPosition {
        let len = self.text_len();
        let offset = if text_offset > len {
            log::warn!("caret offset {text_offset} past end of text ({len}), clamped");
            len
        } else {
            text_offset
        };
        let row = self.row_of(offset);
        let column = offset - self.start(row);
        CaretPosition {
            row,
            column,
            offset: self.start(row) - row + column,
        }
    }

    /// The caret at visible offset `offset`.
    ///
    /// The row is the first whose cumulative length exceeds `offset`, so an
    /// offset equal to a row's cumulative length lands at the start of the
    /// next row. Offsets past the end clamp to the end of the last line.
    pub fn position_of_visible(&self, offset: usize) -> CaretPosition {
        let mut before = 0;
        let last = self.row_count() - 1;
        for row in 0..last {
            let len = self.line_len(row);
            if offset < before + len {
                return CaretPosition {
                    row,
                    column: offset - before,
                    offset,
                };
            }
            before += len;
        }
        let len = self.line_len(last);
        if offset > self.visible_len() {
            log::warn!(
                "visible offset {offset} past end of text ({}), clamped",
                self.visible_len()
            );
        }
        let column = (offset - before.min(offset)).min(len);
        CaretPosition {
            row: last,
            column,
            offset: before + column,
        }
    }

    /// Absolute text offset of `caret`, clamping its row and column.
    pub fn text_offset(&self, caret: &CaretPosition) -> usize {
        let row = caret.row.min(self.row_count() - 1);
        self.start(row) + caret.column.min(self.line_len(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn caret(row: usize, column: usize, offset: usize) -> CaretPosition {
        CaretPosition {
            row,
            column,
            offset,
        }
    }

    #[test]
    fn caret_at_text_offsets() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.caret_at(0), caret(0, 0, 0));
        assert_eq!(index.caret_at(2), caret(0, 2, 2));
        assert_eq!(index.caret_at(3), caret(1, 0, 2));
        assert_eq!(index.caret_at(5), caret(1, 2, 4));
    }

    #[test]
    fn caret_past_end_is_clamped() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.caret_at(50), caret(1, 2, 4));
    }

    #[test]
    fn visible_offset_ties_go_to_next_row() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.position_of_visible(1), caret(0, 1, 1));
        assert_eq!(index.position_of_visible(2), caret(1, 0, 2));
        assert_eq!(index.position_of_visible(4), caret(1, 2, 4));
        assert_eq!(index.position_of_visible(9), caret(1, 2, 4));
    }

    #[test]
    fn empty_rows_are_skipped_by_visible_offsets() {
        let index = LineIndex::new("a\n\nb");
        assert_eq!(index.position_of_visible(1), caret(2, 0, 1));
        assert_eq!(index.caret_at(2), caret(1, 0, 1));
    }

    #[test]
    fn text_offset_round_trip() {
        let text = "# x\n\n- é\n";
        let index = LineIndex::new(text);
        for offset in 0..=index.text_len() {
            assert_eq!(index.text_offset(&index.caret_at(offset)), offset);
        }
    }

    #[test]
    fn text_offset_clamps_column() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.text_offset(&caret(0, 9, 0)), 2);
        assert_eq!(index.text_offset(&caret(7, 0, 0)), 3);
    }

    #[test]
    fn visible_len_excludes_newlines() {
        assert_eq!(LineIndex::new("ab\ncd").visible_len(), 4);
        assert_eq!(LineIndex::new("").visible_len(), 0);
    }
}
