use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Cleans converted HTML against an allow-list of the tags and attributes
/// this converter can produce. Anything else — notably raw pass-through
/// lines carrying scripts or event handlers — is stripped.
pub fn sanitize(html: &str) -> String {
    let tags: HashSet<&'static str> = [
        "a", "br", "code", "em", "h1", "h2", "h3", "h4", "li", "ol", "p", "strong", "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href", "title"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .clean(html)
        .to_string()
}
