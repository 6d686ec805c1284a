use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::lines::char_offset;
use crate::parsing::span::SpanKind;

/// An image or link found in a line region, in region-local char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMatch {
    pub lo: usize,
    pub hi: usize,
    pub kind: SpanKind,
}

/// `![alt](src)` images and `[text](href)` links.
pub struct Media;

impl Media {
    fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").expect("Invalid image regex")
        })
    }

    fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex")
        })
    }

    /// All non-overlapping images and links in `s`, ordered by start.
    ///
    /// Images are claimed first so a link never matches the tail of an image.
    pub fn find_all(s: &str) -> Vec<MediaMatch> {
        let mut found: Vec<MediaMatch> = Vec::new();

        for caps in Self::image_regex().captures_iter(s) {
            let Some(whole) = caps.get(0) else { continue };
            found.push(MediaMatch {
                lo: char_offset(s, whole.start()),
                hi: char_offset(s, whole.end()),
                kind: SpanKind::Image {
                    alt: caps[1].to_string(),
                    src: caps[2].to_string(),
                },
            });
        }

        for caps in Self::link_regex().captures_iter(s) {
            let Some(whole) = caps.get(0) else { continue };
            let lo = char_offset(s, whole.start());
            let hi = char_offset(s, whole.end());
            if found.iter().any(|m| lo < m.hi && m.lo < hi) {
                continue;
            }
            found.push(MediaMatch {
                lo,
                hi,
                kind: SpanKind::Link {
                    text: caps[1].to_string(),
                    href: caps[2].to_string(),
                },
            });
        }

        found.sort_by_key(|m| m.lo);
        found
    }
}
