//! # Parsing
//!
//! One full scan of the text per edit: line index, block passes, inline
//! scan, then one tree per view.
//!
//! ## Modules
//!
//! - **`lines`**: `LineIndex` with per-line char offsets
//! - **`span`**: `MarkSpan`, `SpanKind` and output `Tag`s
//! - **`blocks`**: the four block passes, paragraph grouping, continuation states
//! - **`inline`**: delimiter-stack matching inside a line region
//! - **`tree`**: span sorting and the one-pass tree builder
//! - **`snapshot`**: invariant checks and outlines for tests

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;
pub mod tree;

#[cfg(test)]
mod tests;

use blocks::{BlockScanner, ContinuationTable};
use lines::LineIndex;
use tree::MarkTree;

/// Both trees of one parse and the continuation states it found.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    pub edit: MarkTree,
    pub clean: MarkTree,
    pub continuations: ContinuationTable,
}

pub fn parse_document(index: &LineIndex<'_>) -> ParsedDoc {
    let scan = BlockScanner::new(index).scan();
    log::debug!(
        "parsed {} rows: {} edit spans, {} clean spans",
        index.row_count(),
        scan.edit.len(),
        scan.clean.len()
    );
    let len = index.text_len();
    ParsedDoc {
        edit: MarkTree::from_spans(len, scan.edit),
        clean: MarkTree::from_spans(len, scan.clean),
        continuations: scan.continuations,
    }
}
