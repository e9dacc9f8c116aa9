use std::{fmt, str::FromStr};

use thiserror::Error;

pub const DEFAULT_FOOTER_CREDIT: &str = "Crafted with the Comprehensive Tutorial Generator.";

/// The four text blobs a document is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Subject the book teaches; used for the fallback title and the tagline.
    pub topic: String,
    /// Structured JSON payload or numbered-heading markdown.
    pub book_text: String,
    /// Free-form markdown appended to the resources section.
    pub curated_resources_text: String,
    /// Free-form markdown assessments; only rendered for outline documents.
    pub assessments_text: String,
}

impl RenderRequest {
    pub fn new(topic: impl Into<String>, book_text: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            book_text: book_text.into(),
            curated_resources_text: String::new(),
            assessments_text: String::new(),
        }
    }

    pub fn with_curated_resources(mut self, text: impl Into<String>) -> Self {
        self.curated_resources_text = text.into();
        self
    }

    pub fn with_assessments(mut self, text: impl Into<String>) -> Self {
        self.assessments_text = text.into();
        self
    }
}

/// Presentation knobs that do not change document structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Sentence printed after the copyright mark in the page footer.
    pub footer_credit: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            footer_credit: DEFAULT_FOOTER_CREDIT.to_string(),
        }
    }
}

/// Selects the markdown converter backing a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkdownEngine {
    /// Full CommonMark with extensions, sanitised.
    #[default]
    Comrak,
    /// Escape everything and keep only paragraph and line breaks.
    Plain,
}

impl MarkdownEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comrak => "comrak",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for MarkdownEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown markdown engine `{0}` (expected comrak or plain)")]
pub struct UnknownEngine(pub String);

impl FromStr for MarkdownEngine {
    type Err = UnknownEngine;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "comrak" | "markdown" => Ok(Self::Comrak),
            "plain" | "escape" => Ok(Self::Plain),
            _ => Err(UnknownEngine(value.to_string())),
        }
    }
}
