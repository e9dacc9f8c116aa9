use thiserror::Error;

/// Reasons a blob could not be decoded into a [`Book`](super::book::Book).
///
/// The rendering engine recovers from every variant by switching to the
/// outline path, so these never reach callers of the renderer.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("book payload is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("book payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("book payload must contain at least one chapter")]
    NoChapters,
}

impl DecodeError {
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }
}
