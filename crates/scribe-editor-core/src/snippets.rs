//! Markup snippets for `EditorCommand::InsertHtml`.

use std::fmt::Write;

use markdown_weaver_escape::{FmtWriter, escape_html, escape_html_body_text};

use crate::command::EditorCommand;

/// Escape text for use inside an element body.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String can't fail.
    let _ = escape_html_body_text(FmtWriter(&mut out), text);
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = escape_html(FmtWriter(&mut out), text);
    out
}

/// An empty bordered table.
pub fn table_html(rows: usize, cols: usize) -> String {
    let mut html =
        String::from(r#"<table border="1" style="border-collapse: collapse; width: 100%;">"#);
    for _ in 0..rows {
        html.push_str("<tr>");
        for _ in 0..cols {
            html.push_str(r#"<td style="padding: 8px;">&nbsp;</td>"#);
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

pub fn code_block_html(code: &str, language: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        escape_attr(language),
        escape_text(code)
    )
}

/// A blockquote, optionally attributed.
pub fn quote_html(text: &str, author: Option<&str>) -> String {
    let mut html = String::from(
        r#"<blockquote style="border-left: 4px solid #ccc; margin: 20px 0; padding-left: 20px;">"#,
    );
    let _ = write!(html, "<p>{}</p>", escape_text(text));
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        let _ = write!(html, "<cite>\u{2014} {}</cite>", escape_text(author));
    }
    html.push_str("</blockquote>");
    html
}

pub fn insert_table(rows: usize, cols: usize) -> EditorCommand {
    EditorCommand::InsertHtml {
        html: table_html(rows, cols),
    }
}

pub fn insert_code(code: &str, language: &str) -> EditorCommand {
    EditorCommand::InsertHtml {
        html: code_block_html(code, language),
    }
}

pub fn insert_quote(text: &str, author: Option<&str>) -> EditorCommand {
    EditorCommand::InsertHtml {
        html: quote_html(text, author),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let html = table_html(2, 3);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches("<td").count(), 6);
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_code_block_escapes() {
        assert_eq!(
            code_block_html("if a < b && c > d {}", "rust"),
            "<pre><code class=\"language-rust\">if a &lt; b &amp;&amp; c &gt; d {}</code></pre>"
        );
    }

    #[test]
    fn test_quote_with_and_without_author() {
        let html = quote_html("<hi>", None);
        assert!(html.contains("<p>&lt;hi&gt;</p>"));
        assert!(!html.contains("<cite>"));

        let html = quote_html("words", Some("Ada"));
        assert!(html.contains("<cite>\u{2014} Ada</cite>"));
        assert!(html.ends_with("</blockquote>"));
    }

    #[test]
    fn test_snippet_commands() {
        assert!(matches!(
            insert_table(1, 1),
            EditorCommand::InsertHtml { html } if html.contains("&nbsp;")
        ));
    }
}
