//! # Inline Kinds
//!
//! Inline pattern types that own their delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired emphasis-like patterns in priority order
//!   (`~~`, `**`, `__`, `*`, `_`, `` ` ``, `^`, `~`)
//! - **`Escape`**: `\` followed by ASCII punctuation
//! - **`Media`**: `![alt](src)` images and `[text](href)` links, extracted
//!   before delimiter matching
//!
//! The parser calls these; it never hardcodes a delimiter itself.

pub mod delimiter;
pub mod escape;
pub mod media;

pub use delimiter::Delimiter;
pub use escape::Escape;
pub use media::{Media, MediaMatch};
