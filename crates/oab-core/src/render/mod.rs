pub mod context;
pub mod endpoints;
pub mod refs;
pub mod schema_section;
pub mod security;
pub mod type_renderer;

use std::fmt::Write;

use crate::normalize::DocumentView;
use crate::parse::document::Document;

/// Condense a decoded document into its plain-text summary.
///
/// Pure and synchronous: identical input yields byte-identical output, and
/// every lookup miss degrades to a placeholder or a dropped line rather than
/// an error.
pub fn summarize(doc: &Document) -> String {
    let view = DocumentView::new(doc);

    let mut out = String::new();
    header(&mut out, &view);
    out.push_str(&endpoints::endpoints_section(&view));
    if let Some(section) = schema_section::schema_section(view.schemas()) {
        out.push_str(&section);
    }
    if let Some(section) = security::security_section(view.security_schemes()) {
        out.push_str(&section);
    }
    out
}

fn header(out: &mut String, view: &DocumentView<'_>) {
    let info = &view.document().info;
    let _ = writeln!(out, "API: {} v{}", info.title, info.version);
    if let Some(description) = info.description.as_deref() {
        let _ = writeln!(out, "Description: {description}");
    }
    out.push('\n');

    if let Some(base_url) = view.base_url() {
        let _ = writeln!(out, "Base URL: {base_url}");
        let extra = view.extra_servers();
        if !extra.is_empty() {
            out.push_str("Additional URLs:\n");
            for server in extra {
                match server.description.as_deref() {
                    Some(text) => {
                        let _ = writeln!(out, "  - {} ({text})", server.url);
                    }
                    None => {
                        let _ = writeln!(out, "  - {}", server.url);
                    }
                }
            }
        }
        out.push('\n');
    }
}
