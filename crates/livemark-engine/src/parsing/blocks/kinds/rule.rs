/// Horizontal rule.
pub struct Rule;

impl Rule {
    pub const LINE: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line == Self::LINE
    }
}
