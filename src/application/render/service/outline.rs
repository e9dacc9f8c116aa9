//! Rendering for documents recovered by the heading outline.
//!
//! Every region is one opaque markdown block; chapters always get the
//! fallback quiz because no quiz data survives segmentation.

use crate::{
    application::ingest::{Outline, title_case},
    domain::slug::AnchorSlugger,
};

use super::{
    escape::escape_html,
    markdown::MarkdownConverter,
    page::{PageParts, TocEntry},
    quiz,
    sections::{self, BACK_TO_TOP},
};

const ASSESSMENTS_ANCHOR: &str = "supplementary-assessments";

pub(crate) fn outline_parts(
    converter: &dyn MarkdownConverter,
    outline: &Outline,
    topic: &str,
    curated_html: String,
    assessments: &str,
) -> PageParts {
    let mut slugger = AnchorSlugger::new();
    let mut toc = vec![TocEntry::new("introduction", "Introduction")];
    let mut chapters_html = String::new();

    for chapter in &outline.chapters {
        let anchor = slugger.anchor_for(&format!("chapter-{}-{}", chapter.index, chapter.title));
        let index = i64::try_from(chapter.index).unwrap_or(i64::MAX);

        chapters_html.push_str(&format!(
            "<article id=\"{anchor}\">\n<h3>{}</h3>\n",
            escape_html(&chapter.title)
        ));
        chapters_html.push_str(&converter.to_html(&chapter.body));
        chapters_html.push_str(&quiz::fallback_quiz(index, &chapter.title, &anchor));
        chapters_html.push_str(BACK_TO_TOP);
        chapters_html.push_str("\n</article>\n");

        toc.push(TocEntry::new(anchor, chapter.title.clone()));
    }

    let assessments_html = converter.to_html(assessments);
    if !assessments_html.is_empty() {
        chapters_html.push_str(&format!(
            "<article id=\"{ASSESSMENTS_ANCHOR}\" class=\"assessment-card\">\n\
             <h3>Supplementary Assessments</h3>\n{assessments_html}\n</article>\n"
        ));
    }

    toc.push(TocEntry::new("resources", "Resources"));
    toc.push(TocEntry::new("glossary", "Glossary"));

    let title = outline
        .title
        .clone()
        .unwrap_or_else(|| title_case(topic));

    PageParts {
        title,
        topic: title_case(topic),
        toc,
        introduction_html: converter.to_html(&outline.introduction),
        chapters_html,
        tools_html: or_placeholder(converter.to_html(&outline.recommended_tools), sections::NO_ITEMS),
        external_html: or_placeholder(
            converter.to_html(&outline.external_resources),
            sections::NO_ITEMS,
        ),
        curated_html,
        glossary_html: or_placeholder(converter.to_html(&outline.glossary), sections::NO_GLOSSARY),
        references_html: or_placeholder(
            converter.to_html(&outline.references),
            sections::NO_REFERENCES,
        ),
        summary_html: String::new(),
    }
}

fn or_placeholder(html: String, placeholder: &str) -> String {
    if html.is_empty() {
        placeholder.to_string()
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use crate::application::{
        ingest::OutlineChapter, render::service::markdown::EscapingConverter,
    };

    use super::*;

    fn outline() -> Outline {
        Outline {
            title: None,
            introduction: "Welcome".into(),
            chapters: vec![
                OutlineChapter {
                    index: 1,
                    title: "Setup".into(),
                    body: "Install it.".into(),
                },
                OutlineChapter {
                    index: 2,
                    title: "Setup".into(),
                    body: "Again.".into(),
                },
            ],
            ..Outline::default()
        }
    }

    #[test]
    fn chapters_get_anchors_and_fallback_quizzes() {
        let parts = outline_parts(&EscapingConverter, &outline(), "rust async", String::new(), "");

        assert_eq!(parts.title, "Rust Async");
        assert!(parts.chapters_html.contains("<article id=\"chapter-1-setup\">"));
        assert!(parts.chapters_html.contains("<article id=\"chapter-2-setup\">"));
        assert_eq!(parts.chapters_html.matches("class=\"chapter-quiz\"").count(), 2);

        let anchors: Vec<&str> = parts.toc.iter().map(|entry| entry.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            ["introduction", "chapter-1-setup", "chapter-2-setup", "resources", "glossary"]
        );
        assert!(!parts.has_summary());
    }

    #[test]
    fn empty_regions_use_placeholders() {
        let parts = outline_parts(&EscapingConverter, &Outline::default(), "go", String::new(), "");

        assert_eq!(parts.title, "Go");
        assert_eq!(parts.chapters_html, "");
        assert_eq!(parts.tools_html, sections::NO_ITEMS);
        assert_eq!(parts.glossary_html, sections::NO_GLOSSARY);
        assert_eq!(parts.references_html, sections::NO_REFERENCES);
    }

    #[test]
    fn assessments_render_after_chapters() {
        let parts = outline_parts(
            &EscapingConverter,
            &outline(),
            "rust",
            String::new(),
            "Final exam",
        );

        let last_chapter = parts.chapters_html.find("chapter-2-setup").expect("chapter");
        let assessments = parts
            .chapters_html
            .find("id=\"supplementary-assessments\"")
            .expect("assessments article");
        assert!(last_chapter < assessments);
        assert!(parts.chapters_html.contains("<p>Final exam</p>"));
    }

    #[test]
    fn depth_one_heading_wins_over_topic() {
        let mut outline = outline();
        outline.title = Some("The Async Book".into());
        let parts = outline_parts(&EscapingConverter, &outline, "rust", String::new(), "");
        assert_eq!(parts.title, "The Async Book");
        assert_eq!(parts.topic, "Rust");
    }
}
