use super::is_pattern_space;

/// Blockquote line type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Chars taken by the prefix and its space.
    pub const PREFIX_LEN: usize = 2;

    /// The prefix a continued blockquote line receives.
    pub const CONTINUATION: &'static str = "> ";

    pub fn matches(line: &[char]) -> bool {
        line.first() == Some(&Self::PREFIX) && line.get(1).is_some_and(|&c| is_pattern_space(c))
    }
}
