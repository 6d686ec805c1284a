/// Backslash escape: the next char is literal and never a delimiter.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';

    /// Length of the escape at `at`, if one starts there.
    pub fn at(line: &[char], at: usize) -> Option<usize> {
        let escaped = *line.get(at + 1)?;
        (line[at] == Self::BACKSLASH && escaped.is_ascii_punctuation()).then_some(2)
    }
}
