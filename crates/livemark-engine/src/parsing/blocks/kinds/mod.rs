//! # Block Kinds
//!
//! Block-level pattern types, each owning its delimiter constants. Scanner
//! passes call into these; they never hardcode `#`, `>` or `|` themselves.
//!
//! ## Types
//!
//! - **`CodeFence`**: `TOKEN = "```"`, a whole-line fence
//! - **`List`** / **`ListKind`**: tab-indented `-` and `N.` items
//! - **`Table`**: `PIPE = '|'`, `SEPARATOR = "---"` header rows
//! - **`Heading`**: 1 to 6 `#` then a space
//! - **`BlockQuote`**: `PREFIX = '>'` then a space
//! - **`Rule`**: a line equal to `---`

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{List, ListItemMatch, ListKind};
pub use rule::Rule;
pub use table::Table;

/// The space that must follow a line-prefix marker: a plain space or a
/// non-breaking space (as typed into rich-text surfaces).
pub fn is_pattern_space(c: char) -> bool {
    c == ' ' || c == '\u{a0}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_space_accepts_nbsp() {
        assert!(is_pattern_space(' '));
        assert!(is_pattern_space('\u{a0}'));
        assert!(!is_pattern_space('\t'));
    }
}
