//! # Inline Parsing
//!
//! Per-region delimiter-stack matching. Block passes hand over the content
//! region of each line (after a list marker, inside a table cell, after a
//! heading or quote prefix, or the whole line) and get back spans that go
//! into both the edit and clean lists.
//!
//! ## Modules
//!
//! - **`kinds`**: inline types with owned delimiters (`Delimiter`, `Escape`, `Media`)
//! - **`cursor`**: `Cursor` for char-by-char scanning with position tracking
//! - **`parser`**: `scan_inline()` entry point
//!
//! ## Order
//!
//! 1. Images, then links, are claimed by regex.
//! 2. Escapes and paired delimiters are matched over the unclaimed rest.
//! 3. Spans starting inside a code span are pruned afterwards.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::scan_inline;
