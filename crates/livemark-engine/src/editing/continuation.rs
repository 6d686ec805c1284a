use std::ops::Range;

use crate::parsing::blocks::ContinuationTable;
use crate::parsing::lines::{LineIndex, byte_offset};

/// One text rewrite at the point a line break was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Char range to replace.
    pub range: Range<usize>,
    pub insert: String,
    /// Caret text offset after the rewrite.
    pub caret: usize,
}

impl Splice {
    pub fn apply(&self, text: &str) -> String {
        let start = byte_offset(text, self.range.start);
        let end = byte_offset(text, self.range.end);
        let mut out = String::with_capacity(text.len() + self.insert.len());
        out.push_str(&text[..start]);
        out.push_str(&self.insert);
        out.push_str(&text[end..]);
        out
    }
}

/// Decides the marker rewrite after a line break.
///
/// `text` already holds the new line break and `caret` sits right after it.
/// `previous` is the continuation table of the parse before the break.
///
/// - The row above held only its marker: when the new row is empty, remove
///   that marker and the break, leaving an empty line (exit the list or
///   quote). Otherwise nothing changes.
/// - Any other row above carries a non-empty next token and still holds at least
///   its own marker: insert the next token at the caret.
pub fn on_line_break(text: &str, caret: usize, previous: &ContinuationTable) -> Option<Splice> {
    let index = LineIndex::new(text);
    let position = index.caret_at(caret);
    let above = position.row.checked_sub(1)?;
    let state = previous.get(above)?;
    let caret = index.text_offset(&position);

    let marker_len = state.cur_token.chars().count();
    let above_len = index.line_len(above);

    if state.is_plain {
        if index.line_len(position.row) > 0 || above_len != marker_len {
            return None;
        }
        let start = caret.checked_sub(marker_len + 1)?;
        log::debug!("line break after bare {:?}: removing marker", state.cur_token);
        return Some(Splice {
            range: start..caret,
            insert: String::new(),
            caret: start,
        });
    }

    if !state.next_token.is_empty() && above_len >= marker_len {
        log::debug!(
            "line break after {:?}: continuing with {:?}",
            state.cur_token,
            state.next_token
        );
        return Some(Splice {
            range: caret..caret,
            insert: state.next_token.clone(),
            caret: caret + state.next_token.chars().count(),
        });
    }

    None
}
