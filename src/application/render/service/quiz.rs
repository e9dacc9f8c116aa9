//! Chapter quizzes: interactive form markup plus a collapsible answer key.

use crate::domain::{book::QuizQuestion, quiz::QuestionType};

use super::{escape::escape_html, markdown::MarkdownConverter};

const ANSWER_KEY_SUMMARY: &str = "<summary>Answer Key &amp; Mastery Guidance</summary>";

const SCORING_RUBRIC: &str = "<p><strong>Scoring rubric:</strong> Award 1 point per \
multiple-choice or true/false question, and 0-2 points for each short answer. Aim for 80%+ \
to progress confidently.</p>";

fn quiz_heading(number: i64) -> String {
    if number == 0 {
        "Chapter Quiz".to_string()
    } else {
        format!("Chapter {number} Quiz")
    }
}

/// Render the questions supplied with a chapter.
pub(crate) fn structured_quiz(
    converter: &dyn MarkdownConverter,
    questions: &[QuizQuestion],
    chapter_number: i64,
    anchor: &str,
) -> String {
    let mut form = String::new();
    let mut answers = String::new();

    for (position, question) in questions.iter().enumerate() {
        let index = position + 1;
        let name = format!("{anchor}-q{index}");
        let prompt = escape_html(&question.question);

        form.push_str(&format!(
            "<fieldset data-question-type=\"{}\"><legend>Question {index}: {prompt}</legend>",
            question.question_type.as_str()
        ));
        form.push_str(&controls(converter, question, &name, &prompt));
        form.push_str("</fieldset>");

        answers.push_str(&format!("<li><strong>Q{index}:</strong> "));
        answers.push_str(&converter.to_html(&question.answer));
        answers.push_str(&converter.to_html(&question.explanation));
        answers.push_str("</li>");
    }

    format!(
        "<section class=\"chapter-quiz\"><h4>{}</h4><form>{form}</form>\
         <details>{ANSWER_KEY_SUMMARY}<ul>{answers}</ul></details></section>\n",
        quiz_heading(chapter_number)
    )
}

fn controls(
    converter: &dyn MarkdownConverter,
    question: &QuizQuestion,
    name: &str,
    prompt: &str,
) -> String {
    match question.question_type {
        QuestionType::MultipleChoice => choices(converter, &question.options, "radio", name),
        QuestionType::MultiSelect => choices(converter, &question.options, "checkbox", name),
        QuestionType::TrueFalse => format!(
            "<label><input type=\"radio\" name=\"{name}\" value=\"True\"> True</label>\
             <label><input type=\"radio\" name=\"{name}\" value=\"False\"> False</label>"
        ),
        QuestionType::ShortAnswer => {
            format!("<textarea name=\"{name}\" aria-label=\"{prompt}\"></textarea>")
        }
    }
}

fn choices(
    converter: &dyn MarkdownConverter,
    options: &[String],
    input_type: &str,
    name: &str,
) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                "<label><input type=\"{input_type}\" name=\"{name}\" value=\"{}\"> {}</label>",
                escape_html(option),
                converter.to_inline_html(option)
            )
        })
        .collect()
}

/// Five-question formative quiz for chapters that shipped without one.
pub(crate) fn fallback_quiz(chapter_index: i64, chapter_title: &str, anchor: &str) -> String {
    let title = if chapter_title.trim().is_empty() {
        "this chapter".to_string()
    } else {
        escape_html(chapter_title)
    };
    let radio = |name: &str, value: &str, label: &str| {
        format!("<label><input type=\"radio\" name=\"{name}\" value=\"{value}\"> {label}</label>")
    };

    let focus = format!("{anchor}-mc");
    let progression = format!("{anchor}-tf");
    let reinforcement = format!("{anchor}-mc2");

    let mut html = format!(
        "<section class=\"chapter-quiz\" data-quiz=\"fallback\"><h4>{}</h4><form>",
        quiz_heading(chapter_index)
    );

    html.push_str(&format!(
        "<fieldset data-question-type=\"multiple_choice\"><legend>1. Multiple Choice: \
         What is the primary focus of {title}?</legend>"
    ));
    html.push_str(&radio(&focus, "option1", &format!("Reinforcing the key ideas from {title}")));
    html.push_str(&radio(&focus, "option2", "Exploring unrelated infrastructure topics"));
    html.push_str(&radio(&focus, "option3", "Reviewing project management methodologies"));
    html.push_str(&radio(&focus, "option4", "Designing user interface mockups"));
    html.push_str("</fieldset>");

    html.push_str(
        "<fieldset data-question-type=\"true_false\"><legend>2. True or False: Mastery of \
         this chapter prepares you for the next module.</legend>",
    );
    html.push_str(&radio(&progression, "true", "True"));
    html.push_str(&radio(&progression, "false", "False"));
    html.push_str("</fieldset>");

    html.push_str(&format!(
        "<fieldset data-question-type=\"short_answer\"><legend>3. Short Answer: Identify one \
         critical term or command from this chapter.</legend>\
         <textarea name=\"{anchor}-sa-1\" aria-label=\"List a key concept\"></textarea></fieldset>"
    ));

    html.push_str(
        "<fieldset data-question-type=\"multiple_choice\"><legend>4. Multiple Choice: Which \
         activity best reinforces the learning objectives?</legend>",
    );
    html.push_str(&radio(
        &reinforcement,
        "option1",
        "Repeat the hands-on exercise described in the chapter",
    ));
    html.push_str(&radio(&reinforcement, "option2", "Memorise definitions without practice"));
    html.push_str(&radio(
        &reinforcement,
        "option3",
        "Skip directly to advanced certification topics",
    ));
    html.push_str(&radio(
        &reinforcement,
        "option4",
        "Focus solely on command syntax flashcards",
    ));
    html.push_str("</fieldset>");

    html.push_str(&format!(
        "<fieldset data-question-type=\"short_answer\"><legend>5. Short Answer: Describe how \
         you would apply lessons from this chapter in a real scenario.</legend>\
         <textarea name=\"{anchor}-sa-2\" aria-label=\"Describe application\"></textarea></fieldset>"
    ));

    html.push_str("</form><details>");
    html.push_str(ANSWER_KEY_SUMMARY);
    html.push_str(&format!(
        "<ul><li><strong>Q1:</strong> Reinforcing the key ideas from {title}. Focus on the \
         essential concepts and workflows presented.</li>\
         <li><strong>Q2:</strong> True. Each chapter builds toward the comprehensive mastery \
         goals.</li>\
         <li><strong>Q3:</strong> Accept any term highlighted in the chapter narrative or \
         exercises.</li>\
         <li><strong>Q4:</strong> Repeat the hands-on exercise described in the chapter to \
         consolidate knowledge.</li>\
         <li><strong>Q5:</strong> Learner articulates a scenario demonstrating practical \
         transfer of the chapter&#x27;s skills.</li></ul>"
    ));
    html.push_str(SCORING_RUBRIC);
    html.push_str("</details></section>\n");
    html
}
