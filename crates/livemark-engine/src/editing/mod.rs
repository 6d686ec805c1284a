/*!
 * # Editing
 *
 * The caret model, the line-break continuation policy, and the `Session`
 * that ties them to a rope buffer.
 *
 * ## Edit Loop
 *
 * 1. The host reports the new text, the caret, and whether a line break
 *    was typed (`Input`)
 * 2. On a line break, `on_line_break` reads the continuation table of the
 *    *previous* parse and returns at most one `Splice` at the caret
 * 3. The text is re-parsed in full and both views are materialized
 * 4. The new continuation table replaces the old one
 *
 * ## Modules
 *
 * - **`caret`**: `CaretPosition` and offset conversions on `LineIndex`
 * - **`continuation`**: auto-continue and auto-exit for list items and quotes
 * - **`session`**: `Session` over an `xi_rope::Rope`, plus `EditorSnapshot`
 *   for the host's undo stack
 *
 * ```rust
 * use livemark_engine::Session;
 *
 * let mut session = Session::new("- milk");
 * session.replace(6..6, "\n");
 * assert_eq!(session.text(), "- milk\n- ");
 * ```
 */

pub mod caret;
pub mod continuation;
pub mod session;

pub use caret::CaretPosition;
pub use continuation::{Splice, on_line_break};
pub use session::{EditorSnapshot, Input, Session};
