use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};

const BASE_CSS: &str = include_str!("../assets/guide.css");

/// Cover and footer metadata for a rendered guide page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub subtitle: String,
    /// Short text inside the round cover badge.
    pub badge: String,
    /// Product name used in the footer copyright line.
    pub product: String,
    pub version: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            badge: "W".to_string(),
            product: "Wellkit".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Wraps converted body fragments in the fixed page shell: cover section,
/// inline stylesheet, content block, footer with the generation date.
#[derive(Debug, Clone)]
pub struct Renderer {
    accent: String,
    custom_vars: BTreeMap<String, String>,
}

impl Renderer {
    pub fn new(accent: impl Into<String>) -> Self {
        Self {
            accent: accent.into(),
            custom_vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }

    pub fn stylesheet(&self) -> String {
        let mut vars = BTreeMap::new();
        vars.insert("--wellkit-accent".to_string(), self.accent.clone());
        vars.extend(self.custom_vars.clone());

        let mut out = String::new();
        out.push_str(":root {\n");
        for (key, value) in &vars {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out.push_str(BASE_CSS);
        out
    }

    /// Renders the full page, stamped with today's date.
    pub fn page(&self, meta: &PageMeta, body: &str) -> String {
        self.page_at(meta, body, Local::now().date_naive())
    }

    /// Renders the full page with an explicit date, so output is
    /// deterministic under test.
    pub fn page_at(&self, meta: &PageMeta, body: &str, date: NaiveDate) -> String {
        let month_year = date.format("%B %Y").to_string();
        let full_date = date.format("%-d %B %Y").to_string();

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        out.push_str(&format!("  <title>{}</title>\n", escape_html(&meta.title)));
        out.push_str("  <style>\n");
        out.push_str(&self.stylesheet());
        out.push_str("\n  </style>\n");
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str("<div class=\"container\">\n");

        out.push_str("  <div class=\"cover\">\n");
        out.push_str(&format!(
            "    <div class=\"logo\">{}</div>\n",
            escape_html(&meta.badge)
        ));
        out.push_str(&format!("    <h1>{}</h1>\n", escape_html(&meta.title)));
        if !meta.subtitle.is_empty() {
            out.push_str(&format!(
                "    <p class=\"subtitle\">{}</p>\n",
                escape_html(&meta.subtitle)
            ));
        }
        out.push_str(&format!(
            "    <p class=\"version\">Version {} &bull; {}</p>\n",
            escape_html(&meta.version),
            month_year
        ));
        out.push_str("  </div>\n");

        out.push_str("  <div class=\"content\">\n");
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("  </div>\n");

        out.push_str("  <div class=\"footer\">\n");
        out.push_str(&format!(
            "    <p><strong>&copy; {} {}</strong> &mdash; all rights reserved</p>\n",
            date.year(),
            escape_html(&meta.product)
        ));
        out.push_str(&format!("    <p>Generated on {}</p>\n", full_date));
        out.push_str("  </div>\n");

        out.push_str("</div>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
