//! Ingestion: turning an untrusted book blob into something renderable.
//!
//! Structured decoding is always attempted first. When it fails the blob is
//! re-read as markdown and split along its heading conventions instead, so
//! ingestion as a whole cannot fail.

pub mod normalize;
pub mod outline;
pub mod structured;
mod synonyms;

use serde::Serialize;
use tracing::debug;

use crate::domain::book::Book;

pub use normalize::{strip_fence, title_case, to_list};
pub use outline::{Outline, OutlineChapter, Segment, outline, segment};
pub use structured::{decode_structured, decode_value};

/// Result of ingesting a book blob: either the full model or the reduced
/// heading outline recovered by the fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "document", rename_all = "snake_case")]
pub enum ParsedBook {
    Structured(Book),
    Outline(Outline),
}

impl ParsedBook {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Ingest `raw`, preferring the structured decoder.
pub fn parse_book(raw: &str) -> ParsedBook {
    match decode_structured(raw) {
        Ok(book) => {
            debug!(
                target = "application::ingest",
                chapters = book.chapters.len(),
                "decoded structured book payload"
            );
            ParsedBook::Structured(book)
        }
        Err(error) => {
            let outline = outline(&strip_fence(raw));
            debug!(
                target = "application::ingest",
                error = %error,
                chapters = outline.chapters.len(),
                "structured decode failed; using heading outline"
            );
            ParsedBook::Outline(outline)
        }
    }
}
