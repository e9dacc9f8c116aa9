//! Heading-based fallback for book text that is not a structured payload.
//!
//! The scan is line oriented and linear in the input size. It recognises ATX
//! headings of one exact depth (`## Title` at depth 2 does not match `###`),
//! and it never fails: text without headings simply yields no segments.

use std::ops::Range;

use serde::Serialize;

pub const INTRODUCTION_SECTION: &str = "1. BOOK INTRODUCTION";
pub const TUTORIAL_SECTION: &str = "2. COMPREHENSIVE TUTORIAL CONTENT";
pub const SUPPLEMENTARY_SECTION: &str = "3. SUPPLEMENTARY RESOURCES";
pub const TOOLS_SUBSECTION: &str = "3.1. Recommended Tools and Materials";
pub const EXTERNAL_SUBSECTION: &str = "3.2. External Resources";
pub const GLOSSARY_SUBSECTION: &str = "3.3. Glossary";
pub const REFERENCES_SUBSECTION: &str = "3.4. References";

const TITLE_DEPTH: usize = 1;
const SECTION_DEPTH: usize = 2;
const CHAPTER_DEPTH: usize = 3;

/// One heading-delimited region of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Heading text without the marker, trimmed.
    pub title: &'a str,
    /// Byte span of the heading line, excluding its line terminator.
    pub heading: Range<usize>,
    /// Byte span from the end of the heading line to the next heading of the
    /// same depth (or the end of the text).
    pub span: Range<usize>,
    /// The span's text, trimmed.
    pub body: &'a str,
}

/// Split `text` at every heading of exactly `depth` `#` markers.
pub fn segment(text: &str, depth: usize) -> Vec<Segment<'_>> {
    let headings = scan_headings(text, depth);
    let mut segments = Vec::with_capacity(headings.len());

    for (position, (title, heading)) in headings.iter().enumerate() {
        let end = headings
            .get(position + 1)
            .map_or(text.len(), |(_, next)| next.start);
        let span = heading.end..end;
        segments.push(Segment {
            title: *title,
            heading: heading.clone(),
            body: text[span.clone()].trim(),
            span,
        });
    }

    segments
}

fn scan_headings(text: &str, depth: usize) -> Vec<(&str, Range<usize>)> {
    let mut headings = Vec::new();
    if depth == 0 {
        return headings;
    }

    let mut offset = 0;
    for raw_line in text.split_inclusive('\n') {
        let start = offset;
        offset += raw_line.len();

        let line = raw_line.trim_end_matches(['\n', '\r']);
        if let Some(title) = heading_title(line, depth) {
            headings.push((title, start..start + line.len()));
        }
    }

    headings
}

fn heading_title(line: &str, depth: usize) -> Option<&str> {
    let markers = line.bytes().take_while(|byte| *byte == b'#').count();
    if markers != depth {
        return None;
    }

    let rest = &line[depth..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

fn find<'s, 'a>(segments: &'s [Segment<'a>], title: &str) -> Option<&'s Segment<'a>> {
    segments
        .iter()
        .find(|segment| segment.title.eq_ignore_ascii_case(title))
}

fn body_of(segments: &[Segment<'_>], title: &str) -> String {
    find(segments, title)
        .map(|segment| segment.body.to_string())
        .unwrap_or_default()
}

/// Reduced document recovered from heading conventions alone. Every body is
/// raw markdown; no exercises or quizzes are extracted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Outline {
    pub title: Option<String>,
    pub introduction: String,
    pub chapters: Vec<OutlineChapter>,
    pub recommended_tools: String,
    pub external_resources: String,
    pub glossary: String,
    pub references: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineChapter {
    /// 1-based position within the tutorial section.
    pub index: usize,
    pub title: String,
    pub body: String,
}

/// Recover an [`Outline`] from markdown that follows the numbered section
/// conventions (`# Title`, `## 1. BOOK INTRODUCTION`, `### <chapter>`, ...).
pub fn outline(text: &str) -> Outline {
    let (title, rest) = match segment(text, TITLE_DEPTH).into_iter().next() {
        Some(first) => (Some(first.title.to_string()), text[first.heading.end..].trim()),
        None => (None, text),
    };

    let sections = segment(rest, SECTION_DEPTH);
    let tutorial = find(&sections, TUTORIAL_SECTION).map_or("", |segment| segment.body);
    let supplementary = find(&sections, SUPPLEMENTARY_SECTION).map_or("", |segment| segment.body);

    let chapters = segment(tutorial, CHAPTER_DEPTH)
        .into_iter()
        .enumerate()
        .map(|(position, chapter)| OutlineChapter {
            index: position + 1,
            title: chapter.title.to_string(),
            body: chapter.body.to_string(),
        })
        .collect();

    let appendix = segment(supplementary, CHAPTER_DEPTH);

    Outline {
        title,
        introduction: body_of(&sections, INTRODUCTION_SECTION),
        chapters,
        recommended_tools: body_of(&appendix, TOOLS_SUBSECTION),
        external_resources: body_of(&appendix, EXTERNAL_SUBSECTION),
        glossary: body_of(&appendix, GLOSSARY_SUBSECTION),
        references: body_of(&appendix, REFERENCES_SUBSECTION),
    }
}
