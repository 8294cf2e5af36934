use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("ordered-list marker regex"));

/// Per-line classification, evaluated on the whitespace-trimmed line.
/// The variants are checked in declaration order; the first match wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineClass<'a> {
    /// `- item` or `* item`; carries the text after the 2-character marker.
    UnorderedItem { content: &'a str },
    /// `1. item` (digits, a period, at least one space); carries the text
    /// after the matched prefix.
    OrderedItem { content: &'a str },
    Blank,
    /// The line already begins with an HTML tag and is passed through
    /// unchanged. Carries the trimmed line.
    RawHtml { tag: &'a str },
    /// Anything else; the caller wraps the original line as a paragraph.
    Text,
}

pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if let Some(content) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return LineClass::UnorderedItem { content };
    }
    if let Some(marker) = ORDERED_MARKER.find(trimmed) {
        return LineClass::OrderedItem {
            content: &trimmed[marker.end()..],
        };
    }
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if trimmed.starts_with('<') {
        return LineClass::RawHtml { tag: trimmed };
    }
    LineClass::Text
}

#[cfg(test)]
mod tests {
    use super::{LineClass, classify};

    #[test]
    fn dash_and_star_markers_are_unordered_items() {
        assert_eq!(
            classify("- first"),
            LineClass::UnorderedItem { content: "first" }
        );
        assert_eq!(
            classify("* second"),
            LineClass::UnorderedItem { content: "second" }
        );
    }

    #[test]
    fn markers_are_recognized_after_indentation() {
        assert_eq!(
            classify("   - indented"),
            LineClass::UnorderedItem {
                content: "indented"
            }
        );
        assert_eq!(classify("  12. deep"), LineClass::OrderedItem {
            content: "deep"
        });
    }

    #[test]
    fn ordered_marker_requires_period_and_space() {
        assert_eq!(classify("3. third"), LineClass::OrderedItem {
            content: "third"
        });
        assert_eq!(classify("3.third"), LineClass::Text);
        assert_eq!(classify("3 third"), LineClass::Text);
    }

    #[test]
    fn multi_digit_markers_match() {
        assert_eq!(classify("10. tenth"), LineClass::OrderedItem {
            content: "tenth"
        });
    }

    #[test]
    fn blank_lines_include_whitespace_only_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn html_lines_pass_through_trimmed() {
        assert_eq!(classify("  <h2>Title</h2>"), LineClass::RawHtml {
            tag: "<h2>Title</h2>"
        });
    }

    #[test]
    fn bare_dash_without_space_is_text() {
        assert_eq!(classify("-no space"), LineClass::Text);
        assert_eq!(classify("plain words"), LineClass::Text);
    }
}
