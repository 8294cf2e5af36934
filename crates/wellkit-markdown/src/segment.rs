use crate::line::{LineClass, classify};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// One block fragment of the converted document. Fragments are rendered in
/// order, one per line, with no reordering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fragment {
    Open(ListKind),
    Close(ListKind),
    /// A list item; the content is wrapped in `<li>…</li>` when rendered.
    Item(String),
    /// A pre-rendered `<li` line emitted verbatim inside the open container.
    RawItem(String),
    Paragraph(String),
    /// Any other pre-rendered HTML line, emitted verbatim.
    Raw(String),
    /// A blank source line; renders as a `<br>` marker.
    Break,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ListState {
    NotInList,
    InUnorderedList,
    InOrderedList,
}

impl ListState {
    fn open_kind(self) -> Option<ListKind> {
        match self {
            ListState::NotInList => None,
            ListState::InUnorderedList => Some(ListKind::Unordered),
            ListState::InOrderedList => Some(ListKind::Ordered),
        }
    }

    fn for_kind(kind: ListKind) -> ListState {
        match kind {
            ListKind::Unordered => ListState::InUnorderedList,
            ListKind::Ordered => ListState::InOrderedList,
        }
    }
}

/// Segments the document's lines into block fragments, opening and closing
/// list containers around contiguous runs of list items.
///
/// List blocks are delimited structurally (a blank or non-list line ends the
/// block), so the container state has to be tracked across lines; this is the
/// only cross-line state in the whole conversion. A kind switch (an ordered
/// item directly after an unordered one, or vice versa) closes the open
/// container before opening the other, so the two kinds never nest. Every
/// container opened is closed by the time this returns.
pub fn segment<'a, I>(lines: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ListState::NotInList;
    let mut fragments = Vec::new();

    for line in lines {
        match classify(line) {
            LineClass::UnorderedItem { content } => {
                enter_list(&mut fragments, &mut state, ListKind::Unordered);
                fragments.push(Fragment::Item(content.to_string()));
            }
            LineClass::OrderedItem { content } => {
                enter_list(&mut fragments, &mut state, ListKind::Ordered);
                fragments.push(Fragment::Item(content.to_string()));
            }
            LineClass::RawHtml { tag } if tag.starts_with("<li") => {
                // Pre-rendered items (e.g. checkbox lines from the inline
                // pass) join whichever container is open.
                if state == ListState::NotInList {
                    fragments.push(Fragment::Open(ListKind::Unordered));
                    state = ListState::InUnorderedList;
                }
                fragments.push(Fragment::RawItem(tag.to_string()));
            }
            LineClass::RawHtml { .. } => {
                close_list(&mut fragments, &mut state);
                fragments.push(Fragment::Raw(line.to_string()));
            }
            LineClass::Blank => {
                close_list(&mut fragments, &mut state);
                fragments.push(Fragment::Break);
            }
            LineClass::Text => {
                close_list(&mut fragments, &mut state);
                fragments.push(Fragment::Paragraph(line.to_string()));
            }
        }
    }

    close_list(&mut fragments, &mut state);
    fragments
}

/// Renders fragments in order, newline-separated.
pub fn render(fragments: &[Fragment]) -> String {
    let mut lines = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match fragment {
            Fragment::Open(kind) => lines.push(kind.open_tag().to_string()),
            Fragment::Close(kind) => lines.push(kind.close_tag().to_string()),
            Fragment::Item(content) => lines.push(format!("<li>{}</li>", content)),
            Fragment::RawItem(tag) => lines.push(tag.clone()),
            Fragment::Paragraph(text) => lines.push(format!("<p>{}</p>", text)),
            Fragment::Raw(line) => lines.push(line.clone()),
            Fragment::Break => lines.push("<br>".to_string()),
        }
    }
    lines.join("\n")
}

fn enter_list(fragments: &mut Vec<Fragment>, state: &mut ListState, kind: ListKind) {
    if let Some(open) = state.open_kind() {
        if open == kind {
            return;
        }
        // Close before switching kinds.
        fragments.push(Fragment::Close(open));
    }
    fragments.push(Fragment::Open(kind));
    *state = ListState::for_kind(kind);
}

fn close_list(fragments: &mut Vec<Fragment>, state: &mut ListState) {
    if let Some(open) = state.open_kind() {
        fragments.push(Fragment::Close(open));
        *state = ListState::NotInList;
    }
}

#[cfg(test)]
mod tests {
    use super::{Fragment, ListKind, render, segment};

    fn open(kind: ListKind) -> Fragment {
        Fragment::Open(kind)
    }

    fn close(kind: ListKind) -> Fragment {
        Fragment::Close(kind)
    }

    fn item(content: &str) -> Fragment {
        Fragment::Item(content.to_string())
    }

    #[test]
    fn empty_input_yields_no_fragments() {
        let lines: [&str; 0] = [];
        assert!(segment(lines).is_empty());
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn run_of_items_opens_and_closes_once() {
        let fragments = segment(["- a", "- b", "- c"]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            item("a"),
            item("b"),
            item("c"),
            close(ListKind::Unordered),
        ]);
    }

    #[test]
    fn blank_line_terminates_open_list() {
        let fragments = segment(["1. a", ""]);
        assert_eq!(fragments, vec![
            open(ListKind::Ordered),
            item("a"),
            close(ListKind::Ordered),
            Fragment::Break,
        ]);
    }

    #[test]
    fn kind_switch_closes_before_opening() {
        let fragments = segment(["- a", "1. b"]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            item("a"),
            close(ListKind::Unordered),
            open(ListKind::Ordered),
            item("b"),
            close(ListKind::Ordered),
        ]);
    }

    #[test]
    fn list_open_at_end_of_input_is_closed() {
        let fragments = segment(["text", "- a"]);
        assert_eq!(fragments, vec![
            Fragment::Paragraph("text".to_string()),
            open(ListKind::Unordered),
            item("a"),
            close(ListKind::Unordered),
        ]);
    }

    #[test]
    fn text_line_terminates_open_list() {
        let fragments = segment(["- a", "after"]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            item("a"),
            close(ListKind::Unordered),
            Fragment::Paragraph("after".to_string()),
        ]);
    }

    #[test]
    fn raw_html_line_terminates_open_list() {
        let fragments = segment(["- a", "<h2>Next</h2>"]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            item("a"),
            close(ListKind::Unordered),
            Fragment::Raw("<h2>Next</h2>".to_string()),
        ]);
    }

    #[test]
    fn raw_item_opens_a_list_when_none_is_open() {
        let fragments = segment(["<li class=\"checkbox\">☐ task", "<li class=\"checkbox checked\">☑ done", ""]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            Fragment::RawItem("<li class=\"checkbox\">☐ task".to_string()),
            Fragment::RawItem("<li class=\"checkbox checked\">☑ done".to_string()),
            close(ListKind::Unordered),
            Fragment::Break,
        ]);
    }

    #[test]
    fn raw_item_keeps_an_ordered_container_open() {
        let fragments = segment(["1. first", "<li>injected</li>", "2. second"]);
        assert_eq!(fragments, vec![
            open(ListKind::Ordered),
            item("first"),
            Fragment::RawItem("<li>injected</li>".to_string()),
            item("second"),
            close(ListKind::Ordered),
        ]);
    }

    #[test]
    fn mixed_runs_blank_and_text_emit_in_input_order() {
        let fragments = segment(["- a", "- b", "1. c", "", "text"]);
        assert_eq!(fragments, vec![
            open(ListKind::Unordered),
            item("a"),
            item("b"),
            close(ListKind::Unordered),
            open(ListKind::Ordered),
            item("c"),
            close(ListKind::Ordered),
            Fragment::Break,
            Fragment::Paragraph("text".to_string()),
        ]);
    }

    #[test]
    fn paragraphs_preserve_the_untrimmed_line() {
        let fragments = segment(["  indented text"]);
        assert_eq!(fragments, vec![Fragment::Paragraph(
            "  indented text".to_string()
        )]);
    }

    #[test]
    fn render_joins_fragments_with_newlines() {
        let html = render(&segment(["- a", "", "text"]));
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<br>\n<p>text</p>");
    }

    #[test]
    fn open_and_close_markers_balance() {
        let inputs: &[&[&str]] = &[
            &["- a", "1. b", "- c", "1. d"],
            &["- a"],
            &["1. a", "", "1. b"],
            &["text", "", "text"],
            &[],
        ];
        for lines in inputs {
            let fragments = segment(lines.iter().copied());
            for kind in [ListKind::Unordered, ListKind::Ordered] {
                let opens = fragments.iter().filter(|f| **f == Fragment::Open(kind)).count();
                let closes = fragments.iter().filter(|f| **f == Fragment::Close(kind)).count();
                assert_eq!(opens, closes, "unbalanced {:?} for {:?}", kind, lines);
            }
        }
    }
}
