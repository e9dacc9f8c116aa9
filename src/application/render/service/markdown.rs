//! Markdown conversion backends.
//!
//! Every converter is total: malformed or hostile input still yields an HTML
//! fragment, and blank input yields an empty string.

use std::sync::Arc;

#[cfg(feature = "markdown")]
use comrak::{Arena, format_html, parse_document};
use tracing::warn;

use crate::application::render::types::MarkdownEngine;

use super::escape::escape_html;

/// Converts markdown fragments to HTML fragments.
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;

    /// Like [`to_html`](Self::to_html) but without the enclosing `<p>` when
    /// the result is a single paragraph, for use inside list items and labels.
    fn to_inline_html(&self, markdown: &str) -> String {
        strip_single_paragraph(self.to_html(markdown))
    }
}

fn strip_single_paragraph(html: String) -> String {
    let single = match html
        .trim()
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") && !inner.contains("</p>") => {
            Some(inner.to_string())
        }
        _ => None,
    };
    single.unwrap_or(html)
}

/// Escape everything; keep paragraphs (blank-line separated) and line breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapingConverter;

impl MarkdownConverter for EscapingConverter {
    fn to_html(&self, markdown: &str) -> String {
        let normalized = markdown.replace("\r\n", "\n");
        let mut html = String::new();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in normalized.lines().chain(std::iter::once("")) {
            if !line.trim().is_empty() {
                paragraph.push(line.trim_end());
                continue;
            }
            if paragraph.is_empty() {
                continue;
            }

            html.push_str("<p>");
            let escaped: Vec<String> = paragraph
                .drain(..)
                .map(escape_line)
                .collect();
            html.push_str(&escaped.join("<br>"));
            html.push_str("</p>");
        }

        html
    }
}

// Leading indentation survives HTML whitespace collapsing as `&nbsp;`.
fn escape_line(line: &str) -> String {
    let body = line.trim_start_matches([' ', '\t']);
    let indent = &line[..line.len() - body.len()];

    let mut html = String::with_capacity(line.len() + indent.len() * 5);
    for ch in indent.chars() {
        let width = if ch == '\t' { 4 } else { 1 };
        for _ in 0..width {
            html.push_str("&nbsp;");
        }
    }
    html.push_str(&escape_html(body));
    html
}

/// CommonMark with GFM extensions, sanitised through an allow-list.
#[cfg(feature = "markdown")]
pub struct ComrakConverter {
    options: comrak::Options<'static>,
    sanitizer: ammonia::Builder<'static>,
}

#[cfg(feature = "markdown")]
impl ComrakConverter {
    pub fn new() -> Self {
        Self {
            options: super::config::default_options(),
            sanitizer: super::config::build_sanitizer(),
        }
    }
}

#[cfg(feature = "markdown")]
impl Default for ComrakConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "markdown")]
impl MarkdownConverter for ComrakConverter {
    fn to_html(&self, markdown: &str) -> String {
        if markdown.trim().is_empty() {
            return String::new();
        }

        match render_html_stage(markdown, &self.options) {
            Ok(html) => sanitize_stage(&html, &self.sanitizer),
            Err(error) => {
                warn!(
                    target = "application::render::markdown",
                    error = %error,
                    "comrak formatting failed; escaping fragment instead"
                );
                EscapingConverter.to_html(markdown)
            }
        }
    }
}

#[cfg(feature = "markdown")]
fn render_html_stage(
    markdown: &str,
    options: &comrak::Options<'static>,
) -> Result<String, std::fmt::Error> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, options);
    let mut html = String::new();
    format_html(root, options, &mut html)?;
    Ok(html)
}

#[cfg(feature = "markdown")]
fn sanitize_stage(html: &str, sanitizer: &ammonia::Builder<'static>) -> String {
    sanitizer.clean(html).to_string()
}

/// Build the converter for `engine`.
pub fn converter_for(engine: MarkdownEngine) -> Arc<dyn MarkdownConverter> {
    match engine {
        #[cfg(feature = "markdown")]
        MarkdownEngine::Comrak => Arc::new(ComrakConverter::new()),
        #[cfg(not(feature = "markdown"))]
        MarkdownEngine::Comrak => {
            warn!(
                target = "application::render::markdown",
                "built without the `markdown` feature; using the escaping converter"
            );
            Arc::new(EscapingConverter)
        }
        MarkdownEngine::Plain => Arc::new(EscapingConverter),
    }
}
