pub mod editing;
pub mod error;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod render;

// Re-export key types for easier usage
pub use editing::{CaretPosition, EditorSnapshot, Input, Session, Splice, on_line_break};
pub use error::EngineError;
pub use parsing::blocks::{ContinuationTable, LineContinuationState};
pub use pipeline::{Rendered, parse};
