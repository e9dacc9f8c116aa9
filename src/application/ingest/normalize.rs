//! Pure helpers shared by both ingestion strategies.

use serde_json::Value;

const FENCE: &str = "```";

/// Remove a surrounding triple-backtick fence, if present.
///
/// The opening fence line (including any info string such as `json`) and the
/// closing fence line are dropped and the remainder is trimmed. Unfenced
/// input is returned trimmed.
pub fn strip_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !(trimmed.starts_with(FENCE) && trimmed.ends_with(FENCE)) {
        return trimmed.to_string();
    }

    let Some((_, after_opening)) = trimmed.split_once('\n') else {
        return String::new();
    };
    let inner = after_opening
        .rsplit_once('\n')
        .map_or(after_opening, |(head, _)| head);
    inner.trim().to_string()
}

/// View a JSON value as a list: absent or `null` becomes empty, arrays are
/// passed through and any other value becomes a one-element list.
pub fn to_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Whether a value counts as missing for synonym resolution.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Render a scalar JSON value as trimmed text. Arrays and objects are not
/// text and yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text for an arbitrary list item. Structured items fall back to their
/// compact JSON form so nothing upstream silently disappears.
pub fn item_text(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => value.to_string(),
        other => scalar_text(other).unwrap_or_default(),
    }
}

/// Capitalise the first letter of every alphabetic run and lower-case the
/// rest, so `"rust async"` becomes `"Rust Async"`.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_alphabetic = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            output.push(ch);
            previous_alphabetic = false;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strip_fence_removes_plain_and_tagged_fences() {
        assert_eq!(strip_fence("```\nhello\n```"), "hello");
        assert_eq!(strip_fence("  ```json\n{\"a\": 1}\n```  "), "{\"a\": 1}");
    }

    #[test]
    fn strip_fence_leaves_unfenced_text_trimmed() {
        assert_eq!(strip_fence("hello"), "hello");
        assert_eq!(strip_fence("  # Title\n\nbody \n"), "# Title\n\nbody");
        assert_eq!(strip_fence("```rust\nlet x = 1;"), "```rust\nlet x = 1;");
    }

    #[test]
    fn strip_fence_handles_degenerate_input() {
        assert_eq!(strip_fence(""), "");
        assert_eq!(strip_fence("   "), "");
        assert_eq!(strip_fence("```"), "");
        assert_eq!(strip_fence("``````"), "");
    }

    #[test]
    fn to_list_wraps_scalars_and_skips_null() {
        let scalar = json!("one");
        let array = json!(["a", "b"]);
        let object = json!({"k": "v"});

        assert!(to_list(None).is_empty());
        assert!(to_list(Some(&Value::Null)).is_empty());
        assert_eq!(to_list(Some(&scalar)), vec![&scalar]);
        assert_eq!(to_list(Some(&array)).len(), 2);
        assert_eq!(to_list(Some(&object)), vec![&object]);
    }

    #[test]
    fn empty_values_follow_truthiness() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!("  "),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_value(&value), "{value} should count as empty");
        }
        for value in [json!(true), json!(7), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(!is_empty_value(&value), "{value} should count as present");
        }
    }

    #[test]
    fn item_text_stringifies_everything() {
        assert_eq!(item_text(&json!("  padded ")), "padded");
        assert_eq!(item_text(&json!(3)), "3");
        assert_eq!(item_text(&json!(null)), "");
        assert_eq!(item_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("rust async"), "Rust Async");
        assert_eq!(title_case("c++ basics"), "C++ Basics");
        assert_eq!(title_case("KUBERNETES for beginners"), "Kubernetes For Beginners");
        assert_eq!(title_case(""), "");
    }
}
