use crate::domain::book::{
    Chapter, GlossaryEntry, HandsOnExercise, Introduction, ResourceItem, SectionBlock,
    TroubleshootingItem,
};

use super::{escape::escape_html, markdown::MarkdownConverter, quiz};

pub(crate) const BACK_TO_TOP: &str = "<a href=\"#\" class=\"back-to-top\">Back to Top</a>";

pub(crate) const NO_ITEMS: &str = "<p>No additional items provided.</p>";
pub(crate) const NO_GLOSSARY: &str = "<p>No glossary entries provided.</p>";
pub(crate) const NO_REFERENCES: &str = "<p>No references supplied.</p>";

/// Builds the HTML fragments of a structured book.
pub(crate) struct SectionWriter<'c> {
    converter: &'c dyn MarkdownConverter,
}

impl<'c> SectionWriter<'c> {
    pub(crate) fn new(converter: &'c dyn MarkdownConverter) -> Self {
        Self { converter }
    }

    fn list(&self, items: &[String], class: Option<&str>) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut html = match class {
            Some(class) => format!("<ul class=\"{class}\">"),
            None => String::from("<ul>"),
        };
        for item in items {
            html.push_str("<li>");
            html.push_str(&self.converter.to_inline_html(item));
            html.push_str("</li>");
        }
        html.push_str("</ul>");
        html
    }

    pub(crate) fn introduction(&self, introduction: &Introduction) -> String {
        let mut parts = Vec::new();

        if !introduction.topic_overview.is_empty() {
            parts.push(format!(
                "<h3>Topic Overview</h3>{}",
                self.converter.to_html(&introduction.topic_overview)
            ));
        }
        let lists = [
            ("What You Will Learn", &introduction.what_you_will_learn, Some("checklist")),
            ("Who This Book Is For", &introduction.target_audience, None),
            ("How to Use This Book", &introduction.how_to_use, None),
            ("Prerequisites", &introduction.prerequisites, None),
        ];
        for (heading, items, class) in lists {
            if !items.is_empty() {
                parts.push(format!("<h3>{heading}</h3>{}", self.list(items, class)));
            }
        }

        parts.join("\n")
    }

    /// Full `<article>` for one chapter, quiz included.
    pub(crate) fn chapter(&self, chapter: &Chapter, anchor: &str) -> String {
        let label = escape_html(&chapter.label());
        let mut html = format!("<article id=\"{anchor}\">\n<h3>{label}</h3>\n");

        if let Some(minutes) = chapter.estimated_minutes {
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            html.push_str(&format!(
                "<p class=\"chapter-meta\">Estimated time: {minutes} {unit}</p>\n"
            ));
        }

        if !chapter.learning_objectives.is_empty() {
            html.push_str("<div class=\"learning-objective\"><h4>Learning Objectives</h4>");
            html.push_str(&self.list(&chapter.learning_objectives, Some("checklist")));
            html.push_str("</div>\n");
        }

        html.push_str(&self.converter.to_html(&chapter.overview));
        html.push_str(&self.blocks(
            "Detailed Theoretical Explanations",
            &chapter.theoretical_concepts,
        ));
        html.push_str(&self.blocks("Step-by-Step Procedures", &chapter.procedures));
        html.push_str(&self.blocks(
            "Practical Examples and Case Studies",
            &chapter.examples,
        ));
        html.push_str(&self.exercises(&chapter.exercises));
        html.push_str(&self.troubleshooting(&chapter.troubleshooting));
        html.push_str(&self.best_practices(&chapter.best_practices));

        if !chapter.summary.is_empty() {
            html.push_str("<section class=\"chapter-section\"><h4>Chapter Summary</h4>");
            html.push_str(&self.converter.to_html(&chapter.summary));
            html.push_str("</section>\n");
        }

        if chapter.quiz.is_empty() {
            html.push_str(&quiz::fallback_quiz(chapter.number, &chapter.title, anchor));
        } else {
            html.push_str(&quiz::structured_quiz(
                self.converter,
                &chapter.quiz,
                chapter.number,
                anchor,
            ));
        }

        html.push_str(BACK_TO_TOP);
        html.push_str("\n</article>\n");
        html
    }

    fn blocks(&self, heading: &str, blocks: &[SectionBlock]) -> String {
        if blocks.is_empty() {
            return String::new();
        }

        let mut html = format!("<section class=\"chapter-section\"><h4>{heading}</h4>");
        for block in blocks {
            html.push_str(&format!(
                "<div class=\"section-block\" data-kind=\"{}\">",
                escape_html(&block.kind)
            ));
            if !block.title.is_empty() {
                html.push_str(&format!("<h5>{}</h5>", escape_html(&block.title)));
            }
            html.push_str(&self.converter.to_html(&block.content));
            html.push_str("</div>");
        }
        html.push_str("</section>\n");
        html
    }

    fn exercises(&self, exercises: &[HandsOnExercise]) -> String {
        if exercises.is_empty() {
            return String::new();
        }

        let mut html =
            String::from("<section class=\"chapter-section\"><h4>Hands-On Exercises</h4>");
        for exercise in exercises {
            let title = if exercise.title.is_empty() {
                "Hands-On Exercise".to_string()
            } else {
                escape_html(&exercise.title)
            };
            html.push_str(&format!("<div class=\"assessment-card\"><h5>{title}</h5>"));

            if !exercise.objective.is_empty() {
                html.push_str(&format!(
                    "<div class=\"exercise-objective\"><strong>Objective:</strong> {}</div>",
                    self.converter.to_inline_html(&exercise.objective)
                ));
            }
            if !exercise.steps.is_empty() {
                html.push_str("<ol class=\"exercise-steps\">");
                for step in &exercise.steps {
                    html.push_str(&format!("<li>{}</li>", self.converter.to_inline_html(step)));
                }
                html.push_str("</ol>");
            }
            if !exercise.solution.is_empty() {
                html.push_str("<details><summary>Show Solution</summary>");
                html.push_str(&self.converter.to_html(&exercise.solution));
                html.push_str("</details>");
            }

            html.push_str("</div>");
        }
        html.push_str("</section>\n");
        html
    }

    fn troubleshooting(&self, items: &[TroubleshootingItem]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut html =
            String::from("<section class=\"chapter-section\"><h4>Troubleshooting Guides</h4>");
        for item in items {
            html.push_str("<div class=\"callout-warning\"><div class=\"problem\"><strong>Problem:</strong> ");
            html.push_str(&self.converter.to_inline_html(&item.problem));
            html.push_str("</div>");
            html.push_str(&self.converter.to_html(&item.solution));
            if !item.notes.is_empty() {
                html.push_str("<div class=\"callout-note\">");
                html.push_str(&self.converter.to_html(&item.notes));
                html.push_str("</div>");
            }
            html.push_str("</div>");
        }
        html.push_str("</section>\n");
        html
    }

    fn best_practices(&self, practices: &[String]) -> String {
        if practices.is_empty() {
            return String::new();
        }

        format!(
            "<section class=\"chapter-section\"><h4>Best Practices &amp; Expert Tips</h4>{}</section>\n",
            self.list(practices, Some("checklist"))
        )
    }

    pub(crate) fn resource_items(&self, items: &[ResourceItem]) -> String {
        if items.is_empty() {
            return NO_ITEMS.to_string();
        }

        let mut html = String::from("<ul class=\"resource-list\">");
        for item in items {
            let name = if item.name.is_empty() {
                "Resource".to_string()
            } else {
                escape_html(&item.name)
            };
            html.push_str(&format!("<li><strong>{name}</strong>"));
            html.push_str(&self.converter.to_html(&item.description));

            let mut meta = Vec::new();
            if !item.url.is_empty() {
                let url = escape_html(&item.url);
                if is_safe_href(&item.url) {
                    meta.push(format!(
                        "<a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a>"
                    ));
                } else {
                    meta.push(url);
                }
            }
            if !item.access.is_empty() {
                meta.push(escape_html(&item.access));
            }
            if !meta.is_empty() {
                html.push_str(&format!(
                    "<div class=\"resource-meta\">{}</div>",
                    meta.join(" &middot; ")
                ));
            }

            html.push_str("</li>");
        }
        html.push_str("</ul>");
        html
    }

    pub(crate) fn glossary(&self, entries: &[GlossaryEntry]) -> String {
        if entries.is_empty() {
            return NO_GLOSSARY.to_string();
        }

        let mut html = String::from("<dl>");
        for entry in entries {
            html.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>",
                escape_html(&entry.term),
                self.converter.to_html(&entry.definition)
            ));
        }
        html.push_str("</dl>");
        html
    }

    pub(crate) fn references(&self, references: &[String]) -> String {
        if references.is_empty() {
            return NO_REFERENCES.to_string();
        }

        let mut html = String::from("<ol>");
        for reference in references {
            html.push_str(&format!(
                "<li>{}</li>",
                self.converter.to_inline_html(reference)
            ));
        }
        html.push_str("</ol>");
        html
    }
}

/// Whether `url` may be used as a link target. Relative references and the
/// `http`, `https` and `mailto` schemes are allowed.
fn is_safe_href(url: &str) -> bool {
    let trimmed = url.trim();
    let scheme_end = trimmed.find(':');
    let path_start = trimmed.find(['/', '?', '#']);

    match (scheme_end, path_start) {
        (Some(colon), Some(slash)) if slash < colon => true,
        (Some(colon), _) => {
            let scheme = trimmed[..colon].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        (None, _) => true,
    }
}

#[cfg(test)]
mod tests {
    use crate::application::render::service::markdown::EscapingConverter;
    use crate::domain::book::QuizQuestion;
    use crate::domain::quiz::QuestionType;

    use super::*;

    fn writer() -> SectionWriter<'static> {
        SectionWriter::new(&EscapingConverter)
    }

    #[test]
    fn introduction_renders_only_present_parts() {
        let introduction = Introduction {
            topic_overview: "Overview text".into(),
            prerequisites: vec!["A terminal".into()],
            ..Introduction::default()
        };
        let html = writer().introduction(&introduction);

        assert!(html.contains("<h3>Topic Overview</h3><p>Overview text</p>"));
        assert!(html.contains("<h3>Prerequisites</h3><ul><li>A terminal</li></ul>"));
        assert!(!html.contains("What You Will Learn"));
    }

    #[test]
    fn chapter_article_carries_anchor_label_and_time() {
        let chapter = Chapter {
            number: 2,
            title: "Borrowing <rules>".into(),
            estimated_minutes: Some(45),
            ..Chapter::default()
        };
        let html = writer().chapter(&chapter, "chapter-2-borrowing-rules");

        assert!(html.starts_with("<article id=\"chapter-2-borrowing-rules\">"));
        assert!(html.contains("<h3>Chapter 2: Borrowing &lt;rules&gt;</h3>"));
        assert!(html.contains("Estimated time: 45 minutes"));
        assert!(html.contains("class=\"chapter-quiz\""));
        assert!(html.trim_end().ends_with("</article>"));
    }

    #[test]
    fn chapter_renders_structured_quiz_when_present() {
        let chapter = Chapter {
            number: 1,
            title: "Basics".into(),
            quiz: vec![QuizQuestion {
                question: "Why?".into(),
                question_type: QuestionType::ShortAnswer,
                ..QuizQuestion::default()
            }],
            ..Chapter::default()
        };
        let html = writer().chapter(&chapter, "chapter-1-basics");

        assert!(html.contains("Question 1: Why?"));
        assert!(!html.contains("What is the primary focus"));
    }

    #[test]
    fn blocks_keep_order_and_kind() {
        let blocks = vec![
            SectionBlock {
                title: "First".into(),
                content: "one".into(),
                kind: "content".into(),
            },
            SectionBlock {
                title: String::new(),
                content: "two".into(),
                kind: "tip".into(),
            },
        ];
        let html = writer().blocks("Heading", &blocks);

        let first = html.find("<h5>First</h5>").expect("first block");
        let second = html.find("data-kind=\"tip\"").expect("second block");
        assert!(first < second);
    }

    #[test]
    fn exercises_render_steps_and_collapsible_solution() {
        let exercise = HandsOnExercise {
            title: String::new(),
            objective: "Build it".into(),
            steps: vec!["one".into(), "two".into()],
            solution: "cargo build".into(),
        };
        let html = writer().exercises(&[exercise]);

        assert!(html.contains("<h5>Hands-On Exercise</h5>"));
        assert!(html.contains("<ol class=\"exercise-steps\"><li>one</li><li>two</li></ol>"));
        assert!(html.contains("<details><summary>Show Solution</summary><p>cargo build</p></details>"));
    }

    #[test]
    fn empty_collections_use_placeholders() {
        let writer = writer();
        assert_eq!(writer.resource_items(&[]), NO_ITEMS);
        assert_eq!(writer.glossary(&[]), NO_GLOSSARY);
        assert_eq!(writer.references(&[]), NO_REFERENCES);
        assert_eq!(writer.troubleshooting(&[]), "");
    }

    #[test]
    fn resource_links_only_for_safe_schemes() {
        let items = vec![
            ResourceItem {
                name: "Docs".into(),
                url: "https://doc.rust-lang.org".into(),
                access: "Free".into(),
                ..ResourceItem::default()
            },
            ResourceItem {
                url: "javascript:alert(1)".into(),
                ..ResourceItem::default()
            },
        ];
        let html = writer().resource_items(&items);

        assert!(html.contains("<a href=\"https://doc.rust-lang.org\""));
        assert!(html.contains(" &middot; Free"));
        assert!(html.contains("<strong>Resource</strong>"));
        assert!(!html.contains("href=\"javascript:"));
    }

    #[test]
    fn safe_href_rules() {
        assert!(is_safe_href("https://example.com"));
        assert!(is_safe_href("MAILTO:someone@example.com"));
        assert!(is_safe_href("/relative/path"));
        assert!(is_safe_href("docs/page?x=a:b"));
        assert!(!is_safe_href("javascript:alert(1)"));
        assert!(!is_safe_href(" data:text/html,hi"));
    }
}
