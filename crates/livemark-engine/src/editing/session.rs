use std::ops::Range;
use std::path::Path;

use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::caret::CaretPosition;
use crate::editing::continuation::{Splice, on_line_break};
use crate::error::EngineError;
use crate::io;
use crate::parsing::blocks::ContinuationTable;
use crate::parsing::lines::{LineIndex, byte_offset};
use crate::pipeline::{Rendered, parse};

/// What the host reports after the user edited: the full new text, the
/// caret as a text offset, and whether the edit was a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub caret: usize,
    pub line_break: bool,
}

/// The pair the host's undo stack keeps per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub text: String,
    pub caret: CaretPosition,
}

/// The document being edited.
///
/// Holds the text in a rope, the caret as a char offset into it, and the
/// continuation table of the most recent parse.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: Rope,
    caret: usize,
    continuations: ContinuationTable,
    version: u64,
}

impl Session {
    /// A session over `text` with the caret at the end.
    pub fn new(text: &str) -> Self {
        let mut session = Self {
            buffer: Rope::from(text),
            caret: text.chars().count(),
            continuations: ContinuationTable::default(),
            version: 0,
        };
        session.continuations = parse(text, None).continuations;
        session
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let text = io::read_file(path)?;
        log::info!("opened {}", path.display());
        Ok(Self::new(&text))
    }

    /// Writes the text verbatim.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        io::write_file(path, &self.export_markdown())?;
        log::info!("saved {}", path.display());
        Ok(())
    }

    /// Takes the host's edit, runs the continuation policy on line breaks,
    /// and re-parses.
    pub fn apply(&mut self, input: Input) -> Rendered {
        self.caret = input.caret.min(input.text.chars().count());
        self.buffer = Rope::from(input.text);
        if input.line_break {
            self.continue_line();
        }
        self.version += 1;
        self.render()
    }

    /// Replaces the chars in `range` with `insert` and leaves the caret after
    /// the insertion. Inserting exactly `"\n"` counts as a line break.
    pub fn replace(&mut self, range: Range<usize>, insert: &str) -> Rendered {
        let splice = Splice {
            caret: range.start + insert.chars().count(),
            range,
            insert: insert.to_string(),
        };
        self.splice(&splice);
        if insert == "\n" {
            self.continue_line();
        }
        self.version += 1;
        self.render()
    }

    fn continue_line(&mut self) {
        let text = self.text();
        if let Some(splice) = on_line_break(&text, self.caret, &self.continuations) {
            self.splice(&splice);
        }
    }

    fn splice(&mut self, splice: &Splice) {
        let text = self.text();
        let len = text.chars().count();
        let start = byte_offset(&text, splice.range.start.min(len));
        let end = byte_offset(&text, splice.range.end.clamp(splice.range.start.min(len), len));

        let mut builder = Builder::new(self.buffer.len());
        builder.replace(start..end, Rope::from(splice.insert.as_str()));
        self.buffer = builder.build().apply(&self.buffer);
        self.caret = splice.caret;
    }

    /// Parses the current text and keeps its continuation table for the
    /// next line break.
    pub fn render(&mut self) -> Rendered {
        let rendered = parse(&self.text(), Some(self.caret));
        self.continuations = rendered.continuations.clone();
        rendered
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn caret(&self) -> CaretPosition {
        let text = self.text();
        LineIndex::new(&text).caret_at(self.caret)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            text: self.text(),
            caret: self.caret(),
        }
    }

    /// Puts back a snapshot's text and caret and re-parses.
    pub fn restore(&mut self, snapshot: &EditorSnapshot) -> Rendered {
        self.caret = LineIndex::new(&snapshot.text).text_offset(&snapshot.caret);
        self.buffer = Rope::from(snapshot.text.as_str());
        self.version += 1;
        self.render()
    }

    /// The markdown text exactly as held.
    pub fn export_markdown(&self) -> String {
        self.text()
    }
}
