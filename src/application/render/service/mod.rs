#[cfg(feature = "markdown")]
mod config;
mod escape;
mod markdown;
mod outline;
mod page;
mod quiz;
mod sections;

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    application::ingest::{ParsedBook, parse_book, strip_fence, title_case},
    domain::{book::Book, slug::AnchorSlugger},
};

use super::types::{MarkdownEngine, RenderOptions, RenderRequest};

#[cfg(feature = "markdown")]
pub use markdown::ComrakConverter;
pub use markdown::{EscapingConverter, MarkdownConverter, converter_for};

use page::{PageParts, TocEntry, render_page};
use sections::SectionWriter;

/// Turns book payloads into complete HTML documents.
///
/// Rendering is a total function of the request: every input, including
/// malformed JSON and empty text, produces a well-formed document.
pub struct BookRenderer {
    converter: Arc<dyn MarkdownConverter>,
    options: RenderOptions,
}

impl BookRenderer {
    pub fn new(converter: Arc<dyn MarkdownConverter>, options: RenderOptions) -> Self {
        Self { converter, options }
    }

    pub fn with_engine(engine: MarkdownEngine, options: RenderOptions) -> Self {
        Self::new(converter_for(engine), options)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, request: &RenderRequest) -> String {
        let converter = self.converter.as_ref();
        let curated_html = converter.to_html(&strip_fence(&request.curated_resources_text));

        let parts = match parse_book(&request.book_text) {
            ParsedBook::Structured(book) => {
                structured_parts(converter, &book, &request.topic, curated_html)
            }
            ParsedBook::Outline(outline) => outline::outline_parts(
                converter,
                &outline,
                &request.topic,
                curated_html,
                &strip_fence(&request.assessments_text),
            ),
        };

        debug!(
            target = "application::render",
            title = %parts.title,
            toc_entries = parts.toc.len(),
            "rendering book document"
        );

        render_page(&parts, &self.options)
    }
}

impl Default for BookRenderer {
    fn default() -> Self {
        Self::with_engine(MarkdownEngine::default(), RenderOptions::default())
    }
}

fn structured_parts(
    converter: &dyn MarkdownConverter,
    book: &Book,
    topic: &str,
    curated_html: String,
) -> PageParts {
    let writer = SectionWriter::new(converter);
    let mut slugger = AnchorSlugger::new();
    let mut toc = vec![TocEntry::new("introduction", "Introduction")];
    let mut chapters_html = String::new();

    for chapter in book.chapters_in_order() {
        let anchor = slugger.anchor_for(&format!("chapter-{}-{}", chapter.number, chapter.title));
        chapters_html.push_str(&writer.chapter(chapter, &anchor));
        toc.push(TocEntry::new(anchor, chapter.label()));
    }

    toc.push(TocEntry::new("resources", "Resources"));
    toc.push(TocEntry::new("glossary", "Glossary"));

    let summary_html = converter.to_html(&book.summary);
    if !summary_html.is_empty() {
        toc.push(TocEntry::new("summary", "Summary & Next Steps"));
    }

    let title = if book.title.is_empty() {
        format!("{} Tutorial", title_case(topic))
    } else {
        book.title.clone()
    };

    let supplementary = &book.supplementary;
    PageParts {
        title,
        topic: title_case(topic),
        toc,
        introduction_html: writer.introduction(&book.introduction),
        chapters_html,
        tools_html: writer.resource_items(&supplementary.recommended_tools),
        external_html: writer.resource_items(&supplementary.external_resources),
        curated_html,
        glossary_html: writer.glossary(&supplementary.glossary),
        references_html: writer.references(&supplementary.references),
        summary_html,
    }
}

static SHARED_RENDERER: Lazy<BookRenderer> = Lazy::new(BookRenderer::default);

/// Render with the process-wide default renderer.
pub fn render_document(
    topic: &str,
    book_text: &str,
    curated_resources_text: &str,
    assessments_text: &str,
) -> String {
    let request = RenderRequest::new(topic, book_text)
        .with_curated_resources(curated_resources_text)
        .with_assessments(assessments_text);
    SHARED_RENDERER.render(&request)
}
