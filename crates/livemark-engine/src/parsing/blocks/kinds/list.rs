use super::is_pattern_space;

/// The two list flavours. Either may nest inside the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The canonical marker for the `number`th item (1-based).
    pub fn marker(self, number: usize) -> String {
        match self {
            ListKind::Unordered => List::BULLET.to_string(),
            ListKind::Ordered => format!("{number}{}", List::ORDINAL_SUFFIX),
        }
    }
}

/// A list item recognized at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemMatch {
    pub kind: ListKind,
    /// Indent tabs, marker and the separating space.
    pub prefix_len: usize,
}

/// Tab-indented list items with owned delimiter constants.
pub struct List;

impl List {
    pub const INDENT: char = '\t';
    pub const BULLET: char = '-';
    pub const ORDINAL_SUFFIX: char = '.';

    /// Matches `line` as an item at exactly `depth` tabs of indentation.
    ///
    /// Ordered items accept any digits; numbering is assigned by position.
    pub fn item_at(line: &[char], depth: usize) -> Option<ListItemMatch> {
        if line.len() <= depth || !line[..depth].iter().all(|&c| c == Self::INDENT) {
            return None;
        }
        let rest = &line[depth..];
        if rest[0] == Self::BULLET {
            let space = *rest.get(1)?;
            return is_pattern_space(space).then_some(ListItemMatch {
                kind: ListKind::Unordered,
                prefix_len: depth + 2,
            });
        }
        let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 || rest.get(digits) != Some(&Self::ORDINAL_SUFFIX) {
            return None;
        }
        let space = *rest.get(digits + 1)?;
        is_pattern_space(space).then_some(ListItemMatch {
            kind: ListKind::Ordered,
            prefix_len: depth + digits + 2,
        })
    }

    /// The prefix a continuation line receives after item `number`.
    pub fn continuation(kind: ListKind, depth: usize, number: usize) -> String {
        let mut token: String = std::iter::repeat_n(Self::INDENT, depth).collect();
        token.push_str(&kind.marker(number));
        token.push(' ');
        token
    }
}
