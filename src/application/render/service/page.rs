use askama::Template;
use tracing::error;

use crate::application::render::types::RenderOptions;

use super::escape::escape_html;

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TocEntry {
    pub(crate) anchor: String,
    pub(crate) label: String,
}

impl TocEntry {
    pub(crate) fn new(anchor: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            label: label.into(),
        }
    }
}

/// Rendered fragments of one document, ready to be placed in the shell.
/// Every `*_html` field is trusted HTML; `title`, `topic` and TOC labels are
/// plain text and escaped on output.
#[derive(Debug, Clone, Default)]
pub(crate) struct PageParts {
    pub(crate) title: String,
    pub(crate) topic: String,
    pub(crate) toc: Vec<TocEntry>,
    pub(crate) introduction_html: String,
    pub(crate) chapters_html: String,
    pub(crate) tools_html: String,
    pub(crate) external_html: String,
    pub(crate) curated_html: String,
    pub(crate) glossary_html: String,
    pub(crate) references_html: String,
    /// Empty when the document has no summary section.
    pub(crate) summary_html: String,
}

impl PageParts {
    pub(crate) fn has_summary(&self) -> bool {
        !self.summary_html.is_empty()
    }
}

pub(crate) struct NavLink {
    pub(crate) anchor: &'static str,
    pub(crate) label: &'static str,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        anchor: "introduction",
        label: "Introduction",
    },
    NavLink {
        anchor: "chapters",
        label: "Chapters",
    },
    NavLink {
        anchor: "resources",
        label: "Resources",
    },
    NavLink {
        anchor: "glossary",
        label: "Glossary",
    },
];

const SUMMARY_LINK: NavLink = NavLink {
    anchor: "summary",
    label: "Summary",
};

#[derive(Template)]
#[template(path = "book.html")]
struct BookPage<'a> {
    parts: &'a PageParts,
    nav: Vec<NavLink>,
    footer_credit: &'a str,
}

/// Place `parts` in the page shell. Never fails: a template error yields a
/// bare document with the same section ids.
pub(crate) fn render_page(parts: &PageParts, options: &RenderOptions) -> String {
    let mut nav: Vec<NavLink> = NAV_LINKS.into_iter().collect();
    if parts.has_summary() {
        nav.push(SUMMARY_LINK);
    }

    let page = BookPage {
        parts,
        nav,
        footer_credit: &options.footer_credit,
    };

    match page.render() {
        Ok(html) => html,
        Err(err) => {
            error!(
                target = "application::render::page",
                error = %err,
                title = %parts.title,
                "book template failed; emitting minimal shell"
            );
            fallback_document(parts, options)
        }
    }
}

fn fallback_document(parts: &PageParts, options: &RenderOptions) -> String {
    let title = escape_html(&parts.title);
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>{title}</title></head>\n<body>\n<main id=\"main\">\n<h1>{title}</h1>\n"
    );

    html.push_str("<nav class=\"toc\"><ul>");
    for entry in &parts.toc {
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>",
            escape_html(&entry.anchor),
            escape_html(&entry.label)
        ));
    }
    html.push_str("</ul></nav>\n");

    html.push_str(&format!(
        "<section id=\"introduction\">{}</section>\n",
        parts.introduction_html
    ));
    html.push_str(&format!(
        "<section id=\"chapters\">{}</section>\n",
        parts.chapters_html
    ));
    html.push_str(&format!(
        "<section id=\"resources\">{}{}{}</section>\n",
        parts.tools_html, parts.external_html, parts.curated_html
    ));
    html.push_str(&format!(
        "<section id=\"glossary\">{}{}</section>\n",
        parts.glossary_html, parts.references_html
    ));
    if parts.has_summary() {
        html.push_str(&format!(
            "<section id=\"summary\">{}</section>\n",
            parts.summary_html
        ));
    }

    html.push_str(&format!(
        "</main>\n<footer><p>&copy; {title}. {}</p></footer>\n</body>\n</html>\n",
        escape_html(&options.footer_credit)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> PageParts {
        PageParts {
            title: "Rust <Basics>".into(),
            topic: "Rust".into(),
            toc: vec![
                TocEntry::new("introduction", "Introduction"),
                TocEntry::new("chapter-1-start", "Chapter 1: Start & Go"),
            ],
            introduction_html: "<p>Intro</p>".into(),
            chapters_html: "<article id=\"chapter-1-start\"></article>".into(),
            ..PageParts::default()
        }
    }

    #[test]
    fn page_escapes_text_and_keeps_fragments() {
        let html = render_page(&parts(), &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("Rust <Basics>"));
        assert!(html.contains("<article id=\"chapter-1-start\"></article>"));
        assert!(html.contains("Learn Rust from foundational concepts to confident application."));
        assert!(html.contains("Crafted with the Comprehensive Tutorial Generator."));
    }

    #[test]
    fn page_has_stable_section_ids() {
        let html = render_page(&parts(), &RenderOptions::default());

        for id in ["introduction", "chapters", "resources", "glossary"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(!html.contains("id=\"summary\""));
        assert!(!html.contains("href=\"#summary\""));
    }

    #[test]
    fn summary_adds_section_and_nav_link() {
        let mut parts = parts();
        parts.summary_html = "<p>Done</p>".into();
        parts.toc.push(TocEntry::new("summary", "Summary & Next Steps"));
        let html = render_page(&parts, &RenderOptions::default());

        assert!(html.contains("<section id=\"summary\" class=\"container\">"));
        assert!(html.contains("<li><a href=\"#summary\">Summary</a></li>"));
    }

    #[test]
    fn footer_credit_is_configurable() {
        let options = RenderOptions {
            footer_credit: "Built by the docs team.".into(),
        };
        let html = render_page(&parts(), &options);
        assert!(html.contains("Built by the docs team."));
    }

    #[test]
    fn fallback_document_keeps_section_ids() {
        let mut parts = parts();
        parts.summary_html = "<p>Done</p>".into();
        let html = fallback_document(&parts, &RenderOptions::default());

        for id in ["introduction", "chapters", "resources", "glossary", "summary"] {
            assert!(html.contains(&format!("<section id=\"{id}\">")), "missing section {id}");
        }
        assert!(html.contains("<title>Rust &lt;Basics&gt;</title>"));
        assert!(html.contains("Chapter 1: Start &amp; Go"));
    }
}
