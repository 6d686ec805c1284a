use crate::editing::caret::CaretPosition;
use crate::parsing::blocks::ContinuationTable;
use crate::parsing::lines::LineIndex;
use crate::parsing::parse_document;
use crate::render::{CaretTarget, CleanTree, EditTree, render_clean, render_edit};

/// Everything one parse hands back to the host.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub edit: EditTree,
    pub clean: CleanTree,
    /// Leaf and in-leaf offset for the caret, when one was given.
    pub caret: Option<CaretTarget>,
    pub caret_position: Option<CaretPosition>,
    /// Input to the continuation policy on the next line break.
    pub continuations: ContinuationTable,
}

/// Full re-parse of `text`.
///
/// `caret_offset` is an absolute text offset (newlines counted); offsets past
/// the end are clamped.
pub fn parse(text: &str, caret_offset: Option<usize>) -> Rendered {
    let index = LineIndex::new(text);
    let doc = parse_document(&index);
    let caret_position = caret_offset.map(|offset| index.caret_at(offset));
    let (edit, caret) = render_edit(text, &doc.edit, caret_position);
    let clean = render_clean(text, &doc.clean);
    Rendered {
        edit,
        clean,
        caret,
        caret_position,
        continuations: doc.continuations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::to_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_one_empty_line() {
        let rendered = parse("", Some(0));
        assert_eq!(rendered.edit.lines.len(), 1);
        assert!(rendered.clean.children.is_empty());
        assert!(rendered.caret.is_some());
        assert!(rendered.continuations.iter().next().is_none());
    }

    #[test]
    fn caret_past_end_still_lands() {
        let rendered = parse("ab", Some(40));
        assert_eq!(
            rendered.caret_position,
            Some(CaretPosition {
                row: 0,
                column: 2,
                offset: 2
            })
        );
        assert_eq!(rendered.caret.map(|t| t.offset), Some(2));
    }

    #[test]
    fn without_caret_there_is_no_target() {
        let rendered = parse("# a", None);
        assert!(rendered.caret.is_none());
        assert_eq!(to_html(&rendered.clean), "<h1>a</h1>");
    }
}
