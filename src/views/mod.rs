//! Server-rendered HTML pages
//!
//! Pages are plain strings assembled with `format!`. Every value that comes
//! from a user or the store goes through [`escape`].

pub mod pages;

use std::fmt::Write;

use crate::api::notice::Notice;

pub use pages::{FormAction, book_form_page, error_page, index_page, not_found_page};

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let mut notice_html = String::new();
    if let Some(notice) = notice {
        let _ = write!(
            notice_html,
            r#"<div class="notice notice-{}" role="alert">{}</div>"#,
            notice.kind.as_str(),
            escape(&notice.message)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Catálogo de libros</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header><a href="/" class="brand">Catálogo de libros</a> <a href="/agregar" class="button">Agregar libro</a></header>
<main>
{notice_html}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape("Cortázar"), "Cortázar");
    }

    #[test]
    fn layout_renders_escaped_notice() {
        let html = layout("Inicio", Some(&Notice::warning("<b>ojo</b>")), "<p>body</p>");
        assert!(html.contains(r#"class="notice notice-warning""#));
        assert!(html.contains("&lt;b&gt;ojo&lt;/b&gt;"));
        assert!(html.contains("<p>body</p>"));
    }
}
