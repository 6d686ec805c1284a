/// Per-line char offsets for one scan of the document.
///
/// Lines are split on `\n` only; the newline belongs to no line but counts
/// as one char in the absolute offsets, so
/// `start(r) = start(r - 1) + line_len(r - 1) + 1`.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    lines: Vec<&'a str>,
    starts: Vec<usize>,
    lens: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Indexes `text`. Empty text yields one empty line.
    pub fn new(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut starts = Vec::new();
        let mut lens = Vec::new();
        let mut offset = 0usize;
        for line in text.split('\n') {
            let len = line.chars().count();
            lines.push(line);
            starts.push(offset);
            lens.push(len);
            offset += len + 1;
        }
        Self {
            lines,
            starts,
            lens,
        }
    }

    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> &'a str {
        self.lines[row]
    }

    /// Absolute char offset of the first char of `row`.
    pub fn start(&self, row: usize) -> usize {
        self.starts[row]
    }

    /// Absolute char offset just past the last char of `row` (its newline).
    pub fn end(&self, row: usize) -> usize {
        self.starts[row] + self.lens[row]
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lens[row]
    }

    /// Total length of the text in chars, newlines included.
    pub fn text_len(&self) -> usize {
        self.end(self.row_count() - 1)
    }

    /// Row containing absolute `offset`. The newline after a row belongs
    /// to that row; offsets past the end map to the last row.
    pub fn row_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(row) => row,
            Err(row) => row - 1,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }
}

/// Char count of a `&str` prefix, used to map regex byte matches onto char
/// offsets.
pub fn char_offset(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Byte offset of char offset `chars` in `s`, clamped to `s.len()`.
pub fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(b, _)| b)
}
