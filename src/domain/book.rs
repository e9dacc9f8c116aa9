//! Typed document model for a tutorial book.
//!
//! Every value here is produced once by the structured decoder and never
//! mutated afterwards. Text fields are already trimmed and list fields are
//! always present (possibly empty), so renderers never need to re-check
//! either.

use serde::Serialize;

use super::quiz::QuestionType;

/// A fully decoded tutorial book. `chapters` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub introduction: Introduction,
    pub chapters: Vec<Chapter>,
    pub supplementary: Supplementary,
    pub summary: String,
}

impl Book {
    /// Chapters ordered by ascending chapter number. Chapters sharing a number
    /// keep their input order.
    pub fn chapters_in_order(&self) -> Vec<&Chapter> {
        let mut ordered: Vec<&Chapter> = self.chapters.iter().collect();
        ordered.sort_by_key(|chapter| chapter.number);
        ordered
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Introduction {
    pub topic_overview: String,
    pub what_you_will_learn: Vec<String>,
    pub target_audience: Vec<String>,
    pub how_to_use: Vec<String>,
    pub prerequisites: Vec<String>,
}

impl Introduction {
    pub fn is_empty(&self) -> bool {
        self.topic_overview.is_empty()
            && self.what_you_will_learn.is_empty()
            && self.target_audience.is_empty()
            && self.how_to_use.is_empty()
            && self.prerequisites.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Chapter {
    /// Chapter number as supplied upstream; `0` when missing or unparseable.
    pub number: i64,
    pub title: String,
    pub estimated_minutes: Option<u32>,
    pub learning_objectives: Vec<String>,
    pub overview: String,
    pub theoretical_concepts: Vec<SectionBlock>,
    pub procedures: Vec<SectionBlock>,
    pub examples: Vec<SectionBlock>,
    pub exercises: Vec<HandsOnExercise>,
    pub troubleshooting: Vec<TroubleshootingItem>,
    pub best_practices: Vec<String>,
    pub summary: String,
    pub quiz: Vec<QuizQuestion>,
}

impl Chapter {
    /// Human-facing heading, e.g. `Chapter 3: Ownership`.
    pub fn label(&self) -> String {
        match (self.number, self.title.is_empty()) {
            (0, false) => self.title.clone(),
            (0, true) => "Untitled Chapter".to_string(),
            (number, true) => format!("Chapter {number}"),
            (number, false) => format!("Chapter {number}: {}", self.title),
        }
    }
}

/// A titled chunk of markdown inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    pub title: String,
    pub content: String,
    pub kind: String,
}

impl Default for SectionBlock {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            kind: SectionBlock::DEFAULT_KIND.to_string(),
        }
    }
}

impl SectionBlock {
    pub const DEFAULT_KIND: &'static str = "content";
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HandsOnExercise {
    pub title: String,
    pub objective: String,
    pub steps: Vec<String>,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TroubleshootingItem {
    pub problem: String,
    pub solution: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub question_type: QuestionType,
    /// Only meaningful for choice question types.
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResourceItem {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Availability or cost notes.
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Supplementary {
    pub recommended_tools: Vec<ResourceItem>,
    pub external_resources: Vec<ResourceItem>,
    pub glossary: Vec<GlossaryEntry>,
    pub references: Vec<String>,
}
