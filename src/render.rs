//! # Description Rendering
//!
//! Renders a [`Description`] into one of two targets:
//!
//! - **Plain text** for comment blocks in generated configuration files
//! - **HTML** for the documentation pages
//!
//! Both renderers are pure functions of the description.

use crate::policy::{DescNode, Description};

/// Output target for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescFormat {
    Text,
    Html,
}

pub fn render(desc: &Description, format: DescFormat) -> String {
    match format {
        DescFormat::Text => to_text(desc),
        DescFormat::Html => to_html(desc),
    }
}

/// Render as plain text: one line per text run or paragraph, list items
/// indented with a tab and a hyphen after a blank line.
pub fn to_text(desc: &Description) -> String {
    let mut buf = String::new();
    for node in &desc.nodes {
        match node {
            DescNode::Text(text) => {
                buf.push_str(text);
                buf.push('\n');
            }
            DescNode::Paragraph { text, lists } => {
                buf.push_str(text);
                buf.push('\n');
                for items in lists {
                    buf.push('\n');
                    for item in items {
                        buf.push_str("\t -");
                        buf.push_str(item);
                        buf.push('\n');
                    }
                }
            }
        }
    }
    buf
}

/// Render as an HTML fragment. Empty text produces no `<p>`.
pub fn to_html(desc: &Description) -> String {
    let mut buf = String::new();
    for node in &desc.nodes {
        match node {
            DescNode::Text(text) => push_paragraph(&mut buf, text),
            DescNode::Paragraph { text, lists } => {
                push_paragraph(&mut buf, text);
                for items in lists {
                    buf.push_str("<ul>");
                    for item in items {
                        buf.push_str("<li>");
                        buf.push_str(item);
                        buf.push_str("</li>");
                    }
                    buf.push_str("</ul>");
                }
            }
        }
    }
    buf
}

fn push_paragraph(buf: &mut String, text: &str) {
    if !text.is_empty() {
        buf.push_str("<p>");
        buf.push_str(text);
        buf.push_str("</p>");
    }
}

/// Render an optional description, treating absence as empty.
pub fn to_html_opt(desc: Option<&Description>) -> String {
    desc.map(to_html).unwrap_or_default()
}
