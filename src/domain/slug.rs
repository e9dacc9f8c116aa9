//! Chapter anchors for the table of contents and in-page links.
//!
//! Anchors are ASCII, lower-case and hyphen separated so they survive as HTML
//! ids and URL fragments. Chapter titles in other scripts are transliterated
//! rather than dropped: Han characters become pinyin syllables, everything
//! else goes through `slug`'s tables.

use std::collections::{HashMap, HashSet};

use ::slug::slugify as slugify_ascii;
use pinyin::{Pinyin, ToPinyin};

/// Returned when the input contains nothing slug-worthy.
pub const FALLBACK_SLUG: &str = "section";

/// Anchor slug for a chapter key such as `chapter-3-Error Handling`.
///
/// Runs of non-alphanumeric characters collapse to a single hyphen and
/// leading/trailing hyphens are dropped. Input with no usable characters
/// yields [`FALLBACK_SLUG`].
pub fn slugify(input: &str) -> String {
    let transliterated = transliterate_to_ascii(input);
    let candidate = slugify_ascii(&transliterated);

    if candidate.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        candidate
    }
}

/// Issues chapter anchors that are unique within one document.
///
/// A repeated slug gets the first free numeric suffix (`chapter-1-a`,
/// `chapter-1-a-2`, ...). Every issued anchor is remembered, so a later title
/// that slugs to an already issued suffixed form is pushed further along too.
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    issued: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor for `text`, never equal to one this slugger returned before.
    pub fn anchor_for(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.issued.insert(base.clone()) {
            return base;
        }

        let suffix = self.next_suffix.entry(base.clone()).or_insert(2);
        loop {
            let candidate = format!("{base}-{suffix}");
            *suffix += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

// Han syllables are space separated so each becomes its own slug word.
fn transliterate_to_ascii(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => append_pinyin(&mut output, py),
            None if ch.is_whitespace() => output.push(' '),
            // Left for `slug` to transliterate or drop.
            None => output.push(ch),
        }
    }

    output
}

fn append_pinyin(buffer: &mut String, syllable: Pinyin) {
    if !buffer.ends_with(' ') && !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(syllable.plain());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Chapter 1: C++ & Friends!!"), "chapter-1-c-friends");
        assert_eq!(slugify("chapter-2-Error Handling"), "chapter-2-error-handling");
    }

    #[test]
    fn slugify_falls_back_when_nothing_remains() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("   ---   "), "section");
        assert_eq!(slugify("!!!"), "section");
    }

    #[test]
    fn slugify_transliterates_non_ascii() {
        assert_eq!(slugify("Café Basics"), "cafe-basics");
        assert_eq!(slugify("Rust 基础教程"), "rust-ji-chu-jiao-cheng");
    }

    #[test]
    fn anchor_slugger_produces_unique_slugs() {
        let mut slugger = AnchorSlugger::new();

        let first = slugger.anchor_for("chapter-1-Overview");
        let second = slugger.anchor_for("chapter-1-Overview");
        let third = slugger.anchor_for("chapter-2-深入理解");

        assert_eq!(first, "chapter-1-overview");
        assert_eq!(second, "chapter-1-overview-2");
        assert_eq!(third, "chapter-2-shen-ru-li-jie");
    }

    #[test]
    fn anchor_slugger_skips_suffixes_taken_by_literal_titles() {
        let mut slugger = AnchorSlugger::new();

        let anchors = [
            slugger.anchor_for("chapter-1-A"),
            slugger.anchor_for("chapter-1-A"),
            slugger.anchor_for("chapter-1-A 2"),
        ];
        assert_eq!(anchors, ["chapter-1-a", "chapter-1-a-2", "chapter-1-a-2-2"]);

        let mut slugger = AnchorSlugger::new();
        let anchors = [
            slugger.anchor_for("chapter-1-A 2"),
            slugger.anchor_for("chapter-1-A"),
            slugger.anchor_for("chapter-1-A"),
        ];
        assert_eq!(anchors, ["chapter-1-a-2", "chapter-1-a", "chapter-1-a-3"]);
    }
}
