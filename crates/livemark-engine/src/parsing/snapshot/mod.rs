//! # Snapshot Testing Support
//!
//! Utilities for testing the scanner and tree builder.
//!
//! ## Modules
//!
//! - **`outline`**: renders a `MarkTree` as stable indented text for assertions
//! - **`invariants`**: runtime checks for scanner correctness (spans in bounds,
//!   pattern lengths within their span, laminar family)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use invariants::check_tree;
pub use outline::outline;
