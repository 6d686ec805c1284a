use super::is_pattern_space;

/// ATX heading type with owned delimiter constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level of `line`, if it opens with 1 to 6 markers and a space.
    pub fn level(line: &[char]) -> Option<u8> {
        let hashes = line.iter().take_while(|&&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        let space = *line.get(hashes)?;
        is_pattern_space(space).then_some(hashes as u8)
    }
}
