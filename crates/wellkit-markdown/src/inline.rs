use once_cell::sync::Lazy;
use regex::Regex;

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*?)$").expect("h1 regex"));
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*?)$").expect("h2 regex"));
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*?)$").expect("h3 regex"));
static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#### (.*?)$").expect("h4 regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic regex"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link regex"));

/// Applies the whole-document inline substitution passes, in order, before
/// line segmentation. Each pass is a pure text transform over the full
/// document; none of them is aware of block structure.
pub fn apply(markdown: &str) -> String {
    let text = headings(markdown);
    let text = bold(&text);
    let text = italic(&text);
    let text = code_spans(&text);
    let text = links(&text);
    checkboxes(&text)
}

/// ATX headings `#` through `####` at the start of a line.
///
/// The single-`#` pattern cannot swallow deeper headings: `^# ` requires a
/// space directly after the first marker, so the passes can run in any
/// order. They run shallow-to-deep regardless.
fn headings(text: &str) -> String {
    let text = H1.replace_all(text, "<h1>$1</h1>");
    let text = H2.replace_all(&text, "<h2>$1</h2>");
    let text = H3.replace_all(&text, "<h3>$1</h3>");
    H4.replace_all(&text, "<h4>$1</h4>").into_owned()
}

fn bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Runs after [`bold`], which has already consumed every `**` pair.
fn italic(text: &str) -> String {
    ITALIC.replace_all(text, "<em>$1</em>").into_owned()
}

fn code_spans(text: &str) -> String {
    CODE.replace_all(text, "<code>$1</code>").into_owned()
}

fn links(text: &str) -> String {
    LINK.replace_all(text, "<a href=\"$2\">$1</a>").into_owned()
}

/// Task-list markers become pre-rendered `<li` lines; the segmenter treats
/// those as list items and keeps them inside the surrounding container.
fn checkboxes(text: &str) -> String {
    text.replace("- [ ]", "<li class=\"checkbox\">☐")
        .replace("- [x]", "<li class=\"checkbox checked\">☑")
}
