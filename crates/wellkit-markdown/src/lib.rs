mod inline;
mod line;
mod sanitize;
mod segment;

pub use inline::apply as apply_inline_passes;
pub use line::{LineClass, classify};
pub use sanitize::sanitize;
pub use segment::{Fragment, ListKind, render, segment};

/// Converts a Markdown document to a sequence of HTML block fragments,
/// newline-separated.
///
/// The conversion is two explicit stages: the inline substitution passes
/// (headings, emphasis, code spans, links, task markers) run over the whole
/// document first, then the line-block segmenter wraps paragraphs and pairs
/// list container tags around runs of items. Total over any input; empty
/// input yields empty output.
pub fn convert(markdown: &str) -> String {
    let inlined = inline::apply(markdown);
    let fragments = segment::segment(inlined.lines());
    segment::render(&fragments)
}

/// Like [`convert`], but cleans the result through an allow-list sanitizer.
///
/// Plain conversion passes pre-rendered HTML lines through verbatim, so a
/// `<script>` line in the source survives it; this variant strips anything
/// outside the tags the converter itself can produce.
pub fn convert_sanitized(markdown: &str) -> String {
    sanitize::sanitize(&convert(markdown))
}

#[cfg(test)]
mod tests {
    use super::{convert, convert_sanitized};

    #[test]
    fn empty_document_converts_to_empty_output() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn inline_passes_feed_the_segmenter() {
        let html = convert("# Guide\n\n- **bold** item\n- `code` item");
        assert_eq!(
            html,
            "<h1>Guide</h1>\n<br>\n<ul>\n<li><strong>bold</strong> item</li>\n<li><code>code</code> item</li>\n</ul>"
        );
    }

    #[test]
    fn converted_headings_pass_through_as_raw_lines() {
        assert_eq!(convert("## Section"), "<h2>Section</h2>");
    }

    #[test]
    fn sanitized_output_drops_script_lines() {
        let html = convert_sanitized("<script>alert(1)</script>\n\ntext");
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn sanitized_output_keeps_converter_tags() {
        let html = convert_sanitized("# Title\n\n- [x] done");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("checkbox checked"));
    }
}
