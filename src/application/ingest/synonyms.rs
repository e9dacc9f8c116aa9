//! Ordered field-name synonyms for the structured decoder.
//!
//! Each field is populated from the first key in its list whose value is not
//! empty (see [`is_empty_value`]). The order is part of the output contract:
//! two payloads that differ only in which synonyms they use must decode the
//! same way everywhere.

use serde_json::{Map, Value};

use super::normalize::{is_empty_value, item_text, scalar_text, to_list};

pub(crate) type Object = Map<String, Value>;

pub(crate) mod book {
    pub const WRAPPER: &str = "book";
    pub const TITLE: &[&str] = &["title", "book_title", "name"];
    pub const INTRODUCTION: &[&str] = &["introduction"];
    pub const CHAPTERS: &[&str] = &["chapters"];
    pub const SUPPLEMENTARY: &[&str] = &["supplementary", "resources"];
    pub const SUMMARY: &[&str] = &["summary", "conclusion", "next_steps"];
}

pub(crate) mod introduction {
    pub const TOPIC_OVERVIEW: &[&str] = &["topic_overview", "overview"];
    pub const WHAT_YOU_WILL_LEARN: &[&str] = &["what_you_will_learn"];
    pub const TARGET_AUDIENCE: &[&str] = &["target_audience"];
    pub const HOW_TO_USE: &[&str] = &["how_to_use"];
    pub const PREREQUISITES: &[&str] = &["prerequisites"];
}

pub(crate) mod chapter {
    pub const NUMBER: &[&str] = &["chapter_number", "number", "index"];
    pub const TITLE: &[&str] = &["title", "name"];
    pub const ESTIMATED_MINUTES: &[&str] = &["estimated_time_minutes", "estimated_minutes"];
    pub const LEARNING_OBJECTIVES: &[&str] = &["learning_objectives"];
    pub const OVERVIEW: &[&str] = &["overview", "introduction"];
    pub const THEORETICAL_CONCEPTS: &[&str] = &["theoretical_concepts"];
    pub const PROCEDURES: &[&str] = &["procedures"];
    pub const EXAMPLES: &[&str] = &["examples"];
    pub const EXERCISES: &[&str] = &["hands_on_exercises"];
    pub const TROUBLESHOOTING: &[&str] = &["troubleshooting"];
    pub const BEST_PRACTICES: &[&str] = &["best_practices"];
    pub const SUMMARY: &[&str] = &["summary", "recap"];
    pub const QUIZ: &[&str] = &["quiz"];
}

pub(crate) mod section_block {
    pub const TITLE: &[&str] = &["title", "heading", "name"];
    pub const CONTENT: &[&str] = &["content", "body", "text"];
    pub const KIND: &[&str] = &["kind", "type"];
}

pub(crate) mod exercise {
    pub const TITLE: &[&str] = &["title", "name"];
    pub const OBJECTIVE: &[&str] = &["objective", "goal"];
    pub const STEPS: &[&str] = &["steps"];
    pub const SOLUTION: &[&str] = &["solution", "answer"];
}

pub(crate) mod troubleshooting {
    pub const PROBLEM: &[&str] = &["problem", "issue", "symptom"];
    pub const SOLUTION: &[&str] = &["solution", "resolution"];
    pub const NOTES: &[&str] = &["notes", "tip"];
}

pub(crate) mod quiz {
    pub const QUESTION: &[&str] = &["question", "prompt"];
    pub const QUESTION_TYPE: &[&str] = &["question_type", "type"];
    pub const OPTIONS: &[&str] = &["options"];
    pub const ANSWER: &[&str] = &["answer", "solution"];
    pub const EXPLANATION: &[&str] = &["explanation", "rationale"];
}

pub(crate) mod resource {
    pub const NAME: &[&str] = &["name", "title"];
    pub const DESCRIPTION: &[&str] = &["description", "summary"];
    pub const URL: &[&str] = &["url", "link"];
    pub const ACCESS: &[&str] = &["access", "notes"];
}

pub(crate) mod glossary {
    pub const TERM: &[&str] = &["term", "word"];
    pub const DEFINITION: &[&str] = &["definition", "meaning"];
}

pub(crate) mod supplementary {
    pub const RECOMMENDED_TOOLS: &[&str] = &["recommended_tools"];
    pub const EXTERNAL_RESOURCES: &[&str] = &["external_resources"];
    pub const GLOSSARY: &[&str] = &["glossary"];
    pub const REFERENCES: &[&str] = &["references"];
}

/// First non-empty value among `keys`, in order.
pub(crate) fn resolve<'a>(object: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !is_empty_value(value))
}

/// Trimmed text for the first non-empty scalar among `keys`; empty when none.
pub(crate) fn text(object: &Object, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter(|value| !is_empty_value(value))
        .find_map(scalar_text)
        .unwrap_or_default()
}

/// Like [`text`] but with a default for the missing case.
pub(crate) fn text_or(object: &Object, keys: &[&str], default: &str) -> String {
    let value = text(object, keys);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Items of the resolved field, viewed through [`to_list`].
pub(crate) fn list<'a>(object: &'a Object, keys: &[&str]) -> Vec<&'a Value> {
    to_list(resolve(object, keys))
}

/// Trimmed, non-empty text items of the resolved field.
pub(crate) fn text_list(object: &Object, keys: &[&str]) -> Vec<String> {
    list(object, keys)
        .into_iter()
        .map(item_text)
        .filter(|item| !item.is_empty())
        .collect()
}
