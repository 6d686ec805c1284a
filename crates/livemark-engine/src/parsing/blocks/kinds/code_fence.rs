/// Fenced code block delimiter.
pub struct CodeFence;

impl CodeFence {
    /// The fence token. A fence line is exactly this, nothing else.
    pub const TOKEN: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line == Self::TOKEN
    }
}
