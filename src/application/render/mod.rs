//! Rendering engine: a decoded book (or its heading outline) in, one
//! self-contained HTML document out.
//!
//! The engine is pure. It reads nothing from disk, keeps no mutable state and
//! returns byte-identical output for identical requests. Markdown conversion
//! is injected through [`MarkdownConverter`] so callers can pick between the
//! full CommonMark backend and the escaping fallback.

mod service;
mod types;

#[cfg(feature = "markdown")]
pub use service::ComrakConverter;
pub use service::{
    BookRenderer, EscapingConverter, MarkdownConverter, converter_for, render_document,
};
pub use types::{
    DEFAULT_FOOTER_CREDIT, MarkdownEngine, RenderOptions, RenderRequest, UnknownEngine,
};
