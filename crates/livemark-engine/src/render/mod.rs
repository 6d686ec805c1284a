//! # Rendering
//!
//! Two walks over the trees of one parse.
//!
//! ## Modules
//!
//! - **`edit`**: the live-markup view. Delimiters stay visible as pattern
//!   leaves; each row is one `EditLine`; the caret is located on the way.
//! - **`clean`**: the structural view. Delimiters are stripped, no-tag nodes
//!   are transparent, containers emit no bare text.
//! - **`html`**: static markup for the clean view and standalone page export.

pub mod clean;
pub mod edit;
pub mod html;

pub use clean::{CleanNode, CleanTree, Element, render_clean};
pub use edit::{CaretTarget, EditLine, EditNode, EditTree, Leaf, LeafId, render_edit};
pub use html::{export_document, to_html};
