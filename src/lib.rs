//! Quaderno turns the loosely structured text produced by a tutorial-writing
//! pipeline into a single self-contained HTML book.
//!
//! The crate is layered the same way throughout:
//!
//! * [`domain`] holds the typed document model, anchor slugs and the decode
//!   error taxonomy.
//! * [`application`] holds the ingestion stage (structured decoding with a
//!   heuristic outline fallback) and the rendering engine.
//! * [`config`] and [`infra`] back the `quaderno` binary: layered settings,
//!   telemetry and file access. The rendering pipeline itself never touches
//!   them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

pub use application::ingest::{ParsedBook, decode_structured, parse_book};
pub use application::render::{
    BookRenderer, MarkdownConverter, RenderOptions, RenderRequest, render_document,
};
pub use domain::book::Book;
