/// A cursor for char-by-char inline scanning with position tracking.
///
/// Operates over one line region while tracking the absolute char offset
/// in the document (via `base`).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The chars being scanned.
    pub s: &'a [char],
    /// Document offset of `s[0]`.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [char], base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute char offset (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i).copied()
    }

    /// Advances by one char, returning the consumed char.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        Some(c)
    }

    /// Advances by `n` chars.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
