//! Strict(ish) decoding of a JSON book payload into the document model.
//!
//! Only the top level can fail. Every nested entity is decoded leniently:
//! a raw item that is not an object becomes the entity's primary text field,
//! numeric fields that do not parse fall back to their defaults, and list
//! fields accept either a single item or an array.

use serde_json::Value;

use crate::domain::{
    book::{
        Book, Chapter, GlossaryEntry, HandsOnExercise, Introduction, QuizQuestion, ResourceItem,
        SectionBlock, Supplementary, TroubleshootingItem,
    },
    error::DecodeError,
    quiz::QuestionType,
};

use super::{
    normalize::{item_text, strip_fence},
    synonyms::{self, Object, list, resolve, text, text_list, text_or},
};

/// Decode a (possibly fenced) JSON payload into a [`Book`].
///
/// Fails when the payload is not JSON, is not an object, or yields no
/// chapters once an optional `{"book": {...}}` wrapper has been removed.
pub fn decode_structured(raw: &str) -> Result<Book, DecodeError> {
    let cleaned = strip_fence(raw);
    let value: Value = serde_json::from_str(&cleaned)?;
    decode_value(&value)
}

/// Decode an already parsed JSON value. See [`decode_structured`].
pub fn decode_value(value: &Value) -> Result<Book, DecodeError> {
    let Value::Object(outer) = value else {
        return Err(DecodeError::not_an_object(value));
    };

    let data = match outer.get(synonyms::book::WRAPPER) {
        Some(Value::Object(inner)) => inner,
        _ => outer,
    };

    let chapters: Vec<Chapter> = list(data, synonyms::book::CHAPTERS)
        .into_iter()
        .filter_map(decode_chapter)
        .collect();

    if chapters.is_empty() {
        return Err(DecodeError::NoChapters);
    }

    Ok(Book {
        title: text(data, synonyms::book::TITLE),
        introduction: decode_introduction(resolve(data, synonyms::book::INTRODUCTION)),
        chapters,
        supplementary: decode_supplementary(resolve(data, synonyms::book::SUPPLEMENTARY)),
        summary: text(data, synonyms::book::SUMMARY),
    })
}

fn decode_introduction(value: Option<&Value>) -> Introduction {
    use synonyms::introduction as keys;

    match value {
        None => Introduction::default(),
        Some(Value::Object(data)) => Introduction {
            topic_overview: text(data, keys::TOPIC_OVERVIEW),
            what_you_will_learn: text_list(data, keys::WHAT_YOU_WILL_LEARN),
            target_audience: text_list(data, keys::TARGET_AUDIENCE),
            how_to_use: text_list(data, keys::HOW_TO_USE),
            prerequisites: text_list(data, keys::PREREQUISITES),
        },
        Some(other) => Introduction {
            topic_overview: item_text(other),
            ..Introduction::default()
        },
    }
}

fn decode_chapter(value: &Value) -> Option<Chapter> {
    use synonyms::chapter as keys;

    // A bare string still names a chapter; any other non-object item is noise.
    let Value::Object(data) = value else {
        let title = value.as_str().map(str::trim).unwrap_or_default();
        return (!title.is_empty()).then(|| Chapter {
            title: title.to_string(),
            ..Chapter::default()
        });
    };

    Some(Chapter {
        number: resolve(data, keys::NUMBER)
            .and_then(coerce_integer)
            .unwrap_or(0),
        title: text(data, keys::TITLE),
        estimated_minutes: resolve(data, keys::ESTIMATED_MINUTES)
            .and_then(coerce_integer)
            .and_then(|minutes| u32::try_from(minutes).ok()),
        learning_objectives: text_list(data, keys::LEARNING_OBJECTIVES),
        overview: text(data, keys::OVERVIEW),
        theoretical_concepts: decode_items(data, keys::THEORETICAL_CONCEPTS, decode_section_block),
        procedures: decode_items(data, keys::PROCEDURES, decode_section_block),
        examples: decode_items(data, keys::EXAMPLES, decode_section_block),
        exercises: decode_items(data, keys::EXERCISES, decode_exercise),
        troubleshooting: decode_items(data, keys::TROUBLESHOOTING, decode_troubleshooting),
        best_practices: text_list(data, keys::BEST_PRACTICES),
        summary: text(data, keys::SUMMARY),
        quiz: decode_items(data, keys::QUIZ, decode_quiz_question),
    })
}

fn decode_items<T>(data: &Object, keys: &[&str], decode: fn(&Value) -> T) -> Vec<T> {
    list(data, keys).into_iter().map(decode).collect()
}

fn decode_section_block(value: &Value) -> SectionBlock {
    use synonyms::section_block as keys;

    match value {
        Value::Object(data) => SectionBlock {
            title: text(data, keys::TITLE),
            content: text(data, keys::CONTENT),
            kind: text_or(data, keys::KIND, SectionBlock::DEFAULT_KIND),
        },
        other => SectionBlock {
            content: item_text(other),
            ..SectionBlock::default()
        },
    }
}

fn decode_exercise(value: &Value) -> HandsOnExercise {
    use synonyms::exercise as keys;

    match value {
        Value::Object(data) => HandsOnExercise {
            title: text(data, keys::TITLE),
            objective: text(data, keys::OBJECTIVE),
            steps: text_list(data, keys::STEPS),
            solution: text(data, keys::SOLUTION),
        },
        other => HandsOnExercise {
            title: item_text(other),
            ..HandsOnExercise::default()
        },
    }
}

fn decode_troubleshooting(value: &Value) -> TroubleshootingItem {
    use synonyms::troubleshooting as keys;

    match value {
        Value::Object(data) => TroubleshootingItem {
            problem: text(data, keys::PROBLEM),
            solution: text(data, keys::SOLUTION),
            notes: text(data, keys::NOTES),
        },
        other => TroubleshootingItem {
            problem: item_text(other),
            ..TroubleshootingItem::default()
        },
    }
}

fn decode_quiz_question(value: &Value) -> QuizQuestion {
    use synonyms::quiz as keys;

    match value {
        Value::Object(data) => QuizQuestion {
            question: text(data, keys::QUESTION),
            question_type: QuestionType::classify(&text(data, keys::QUESTION_TYPE)),
            options: text_list(data, keys::OPTIONS),
            answer: text(data, keys::ANSWER),
            explanation: text(data, keys::EXPLANATION),
        },
        other => QuizQuestion {
            question: item_text(other),
            ..QuizQuestion::default()
        },
    }
}

fn decode_resource(value: &Value) -> ResourceItem {
    use synonyms::resource as keys;

    match value {
        Value::Object(data) => ResourceItem {
            name: text(data, keys::NAME),
            description: text(data, keys::DESCRIPTION),
            url: text(data, keys::URL),
            access: text(data, keys::ACCESS),
        },
        other => ResourceItem {
            name: item_text(other),
            ..ResourceItem::default()
        },
    }
}

fn decode_glossary_entry(value: &Value) -> GlossaryEntry {
    use synonyms::glossary as keys;

    match value {
        Value::Object(data) => GlossaryEntry {
            term: text(data, keys::TERM),
            definition: text(data, keys::DEFINITION),
        },
        other => GlossaryEntry {
            term: item_text(other),
            ..GlossaryEntry::default()
        },
    }
}

fn decode_supplementary(value: Option<&Value>) -> Supplementary {
    use synonyms::supplementary as keys;

    let Some(Value::Object(data)) = value else {
        return Supplementary::default();
    };

    Supplementary {
        recommended_tools: decode_items(data, keys::RECOMMENDED_TOOLS, decode_resource),
        external_resources: decode_items(data, keys::EXTERNAL_RESOURCES, decode_resource),
        glossary: decode_items(data, keys::GLOSSARY, decode_glossary_entry),
        references: text_list(data, keys::REFERENCES),
    }
}

/// Best-effort integer coercion. Never fails loudly: values that do not look
/// numeric yield `None` and the caller picks the default.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate_float)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(truncate_float))
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truncate_float(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // `as` saturates, so range-check explicitly to keep out-of-range values out.
    (truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64)
        .then_some(truncated as i64)
}
