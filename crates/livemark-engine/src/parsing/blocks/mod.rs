//! # Block Parsing
//!
//! Four strictly ordered passes over the line array. Each pass marks the
//! rows it consumes so later passes skip them.
//!
//! ## Passes
//!
//! 1. **Fenced code** (`scanner`): ```` ``` ```` pairs; unclosed fences are ignored
//! 2. **Lists** (`lists`): recursive descent over tab depth, with renumbering
//! 3. **Tables** (`tables`): header, `|---|` separator, non-empty body
//! 4. **Single lines** (`scanner`): rule, heading, blockquote, else plain,
//!    with the inline scan over each line's content region
//!
//! Paragraph grouping (`paragraph`) runs last over the boundary rows the
//! passes collected.
//!
//! ## Modules
//!
//! - **`kinds`**: block pattern types with owned delimiters
//! - **`scanner`**: `BlockScanner` state and passes 1 and 4
//! - **`lists`**, **`tables`**: passes 2 and 3
//! - **`paragraph`**: plain-row runs into `p` + `br` spans
//!
//! ## Output
//!
//! Two span lists, one per view, plus one optional
//! [`LineContinuationState`] per row.

pub mod kinds;
pub mod lists;
pub mod paragraph;
pub mod scanner;
pub mod tables;

pub use scanner::{BlockScan, BlockScanner};

/// Marker continuation data for one list-item or blockquote row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContinuationState {
    /// The literal marker prefix on the row, separating space included.
    pub cur_token: String,
    /// The prefix a line continuing this one receives.
    pub next_token: String,
    /// The row holds nothing but its marker.
    pub is_plain: bool,
}

/// Continuation states of one parse, indexed by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuationTable {
    rows: Vec<Option<LineContinuationState>>,
}

impl ContinuationTable {
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows: vec![None; rows],
        }
    }

    pub fn get(&self, row: usize) -> Option<&LineContinuationState> {
        self.rows.get(row).and_then(Option::as_ref)
    }

    pub fn set(&mut self, row: usize, state: LineContinuationState) {
        self.rows[row] = Some(state);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that carry a state, in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LineContinuationState)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, state)| state.as_ref().map(|s| (row, s)))
    }
}
