use crate::parsing::span::Tag;

/// A paired inline delimiter. Opener and closer are the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `~~`
    Strikethrough,
    /// `**`
    Strong,
    /// `__`
    EmphasisAlt,
    /// `*`
    Emphasis,
    /// `_`
    StrongAlt,
    /// `` ` ``
    Code,
    /// `^`
    Superscript,
    /// `~`
    Subscript,
}

impl Delimiter {
    /// Matching order; longer patterns come before their single-char prefix.
    pub const PRIORITY: [Delimiter; 8] = [
        Delimiter::Strikethrough,
        Delimiter::Strong,
        Delimiter::EmphasisAlt,
        Delimiter::Emphasis,
        Delimiter::StrongAlt,
        Delimiter::Code,
        Delimiter::Superscript,
        Delimiter::Subscript,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            Delimiter::Strikethrough => "~~",
            Delimiter::Strong => "**",
            Delimiter::EmphasisAlt => "__",
            Delimiter::Emphasis => "*",
            Delimiter::StrongAlt => "_",
            Delimiter::Code => "`",
            Delimiter::Superscript => "^",
            Delimiter::Subscript => "~",
        }
    }

    /// Pattern length in chars.
    pub fn width(self) -> usize {
        self.pattern().len()
    }

    /// `__` is emphasis and `_` is strong, the reverse of `**` and `*`.
    pub fn tag(self) -> Tag {
        match self {
            Delimiter::Strikethrough => Tag::Strikethrough,
            Delimiter::Strong | Delimiter::StrongAlt => Tag::Strong,
            Delimiter::Emphasis | Delimiter::EmphasisAlt => Tag::Emphasis,
            Delimiter::Code => Tag::Code,
            Delimiter::Superscript => Tag::Superscript,
            Delimiter::Subscript => Tag::Subscript,
        }
    }

    /// Code, sup and sub style their delimiters too.
    pub fn styles_pattern(self) -> bool {
        matches!(
            self,
            Delimiter::Code | Delimiter::Superscript | Delimiter::Subscript
        )
    }

    /// The highest-priority delimiter starting at `at` in `line`.
    pub fn at(line: &[char], at: usize) -> Option<Delimiter> {
        let rest = line.get(at..)?;
        Self::PRIORITY.into_iter().find(|d| {
            let width = d.width();
            rest.len() >= width && rest[..width].iter().copied().eq(d.pattern().chars())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longer_patterns_win() {
        assert_eq!(Delimiter::at(&chars("~~x"), 0), Some(Delimiter::Strikethrough));
        assert_eq!(Delimiter::at(&chars("**x"), 0), Some(Delimiter::Strong));
        assert_eq!(Delimiter::at(&chars("*x"), 0), Some(Delimiter::Emphasis));
        assert_eq!(Delimiter::at(&chars("~x"), 0), Some(Delimiter::Subscript));
    }

    #[test]
    fn pattern_at_end_of_line() {
        assert_eq!(Delimiter::at(&chars("a~"), 1), Some(Delimiter::Subscript));
        assert_eq!(Delimiter::at(&chars("a_"), 1), Some(Delimiter::StrongAlt));
        assert_eq!(Delimiter::at(&chars("__a"), 0), Some(Delimiter::EmphasisAlt));
        assert_eq!(Delimiter::at(&chars("ab"), 1), None);
    }

    #[test]
    fn tags() {
        assert_eq!(Delimiter::at(&chars("__"), 0).map(Delimiter::tag), Some(Tag::Emphasis));
        assert_eq!(Delimiter::at(&chars("_"), 0).map(Delimiter::tag), Some(Tag::Strong));
        assert_eq!(Delimiter::Code.tag(), Tag::Code);
    }

    #[test]
    fn only_code_like_delimiters_style_their_pattern() {
        assert!(Delimiter::Code.styles_pattern());
        assert!(Delimiter::Superscript.styles_pattern());
        assert!(!Delimiter::Strong.styles_pattern());
        assert!(!Delimiter::Strikethrough.styles_pattern());
    }
}
