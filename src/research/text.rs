//! Body text research: tags, words, sentences, paragraphs, headings.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>.*?</h1\s*>").expect("valid regex"));

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("valid regex"));

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid regex"));

/// Replaces every markup tag with a space.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, " ").into_owned()
}

/// Lowercased words of `text`, markup removed and surrounding punctuation trimmed.
///
/// Tokens made only of punctuation are dropped.
pub fn words(text: &str) -> Vec<String> {
    strip_tags(text)
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    words(text).len()
}

pub(crate) fn normalize_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Number of top-level `<h1>` elements in `text`.
pub fn h1_count(text: &str) -> usize {
    H1.find_iter(text).count()
}

/// Sentences of `text` (markup removed), trimmed, empty ones dropped.
pub fn sentences(text: &str) -> Vec<String> {
    let plain = strip_tags(text);
    SENTENCE_END
        .split(&plain)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The first paragraph of `text`.
///
/// Uses the first `<p>` element when the text has one, otherwise the first
/// non-blank block separated by an empty line.
pub fn first_paragraph(text: &str) -> String {
    if let Some(paragraph) = PARAGRAPH
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .find(|p| !strip_tags(p).trim().is_empty())
    {
        return paragraph.to_string();
    }

    BLANK_LINE
        .split(text)
        .find(|block| !strip_tags(block).trim().is_empty())
        .unwrap_or_default()
        .to_string()
}
