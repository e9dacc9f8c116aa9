use serde::Serialize;

/// Classification of a quiz question; drives which form controls are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    MultiSelect,
    TrueFalse,
    #[default]
    ShortAnswer,
}

impl QuestionType {
    /// Classify a raw, upstream-supplied type label. Matching is
    /// case-insensitive; unknown labels collapse to [`QuestionType::ShortAnswer`].
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "multiple_choice" | "single_choice" | "mcq" => Self::MultipleChoice,
            "multi_select" | "checkbox" | "multiple_select" => Self::MultiSelect,
            "true_false" | "boolean" => Self::TrueFalse,
            _ => Self::ShortAnswer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::MultiSelect => "multi_select",
            Self::TrueFalse => "true_false",
            Self::ShortAnswer => "short_answer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QuestionType;

    #[test]
    fn classify_accepts_known_synonyms() {
        assert_eq!(QuestionType::classify("MCQ"), QuestionType::MultipleChoice);
        assert_eq!(
            QuestionType::classify(" single_choice "),
            QuestionType::MultipleChoice
        );
        assert_eq!(QuestionType::classify("Checkbox"), QuestionType::MultiSelect);
        assert_eq!(
            QuestionType::classify("multiple_select"),
            QuestionType::MultiSelect
        );
        assert_eq!(QuestionType::classify("BOOLEAN"), QuestionType::TrueFalse);
    }

    #[test]
    fn classify_defaults_unknown_labels_to_short_answer() {
        assert_eq!(QuestionType::classify(""), QuestionType::ShortAnswer);
        assert_eq!(QuestionType::classify("essay"), QuestionType::ShortAnswer);
        assert_eq!(
            QuestionType::classify("multiple choice"),
            QuestionType::ShortAnswer
        );
    }

    #[test]
    fn labels_round_trip_through_classify() {
        for kind in [
            QuestionType::MultipleChoice,
            QuestionType::MultiSelect,
            QuestionType::TrueFalse,
            QuestionType::ShortAnswer,
        ] {
            assert_eq!(QuestionType::classify(kind.as_str()), kind);
        }
    }
}
