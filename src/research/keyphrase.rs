//! Keyphrase matching against text, title, description and slug.

use std::collections::HashSet;

use super::function_words::content_words;
use super::text::{first_paragraph, sentences, words};
use super::url::slug_segments;

/// Where the keyphrase appears in the introduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroductionMatch {
    /// All content words occur within one sentence of the first paragraph.
    SameSentence,
    /// All content words occur in the first paragraph, spread over sentences.
    SameParagraph,
    NotFound,
}

/// How the keyphrase appears in the SEO title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMatch {
    ExactAtStart,
    ExactElsewhere,
    AllWords,
    NotFound,
}

fn contains_all(haystack: &HashSet<String>, needles: &[String]) -> bool {
    needles.iter().all(|w| haystack.contains(w))
}

fn word_set(text: &str) -> HashSet<String> {
    words(text).into_iter().collect()
}

/// Number of times the whole keyphrase occurs, word for word, in `text`.
pub fn exact_match_count(text: &str, keyphrase: &str) -> usize {
    let needle = words(keyphrase);
    if needle.is_empty() {
        return 0;
    }

    let haystack = words(text);
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle.as_slice())
        .count()
}

/// Keyphrase word count.
pub fn keyphrase_length(keyphrase: &str) -> usize {
    words(keyphrase).len()
}

pub fn introduction_match(text: &str, keyphrase: &str) -> IntroductionMatch {
    let needles = content_words(keyphrase);
    if needles.is_empty() {
        return IntroductionMatch::NotFound;
    }

    let paragraph = first_paragraph(text);
    if sentences(&paragraph)
        .iter()
        .any(|sentence| contains_all(&word_set(sentence), &needles))
    {
        return IntroductionMatch::SameSentence;
    }

    if contains_all(&word_set(&paragraph), &needles) {
        IntroductionMatch::SameParagraph
    } else {
        IntroductionMatch::NotFound
    }
}

pub fn title_match(title: &str, keyphrase: &str) -> TitleMatch {
    let needle = words(keyphrase);
    if needle.is_empty() {
        return TitleMatch::NotFound;
    }

    let title_words = words(title);
    if title_words.starts_with(&needle) {
        return TitleMatch::ExactAtStart;
    }
    if title_words
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
    {
        return TitleMatch::ExactElsewhere;
    }

    let needles = content_words(keyphrase);
    let haystack: HashSet<String> = title_words.into_iter().collect();
    if !needles.is_empty() && contains_all(&haystack, &needles) {
        TitleMatch::AllWords
    } else {
        TitleMatch::NotFound
    }
}

/// Number of sentences in `description` containing every content word.
pub fn description_match_count(description: &str, keyphrase: &str) -> usize {
    let needles = content_words(keyphrase);
    if needles.is_empty() {
        return 0;
    }

    sentences(description)
        .iter()
        .filter(|sentence| contains_all(&word_set(sentence), &needles))
        .count()
}

/// `true` when every content word of the keyphrase is a segment of the URL.
pub fn keyphrase_in_url(url: &str, keyphrase: &str) -> bool {
    let needles = content_words(keyphrase);
    if needles.is_empty() {
        return false;
    }

    let segments: HashSet<String> = slug_segments(url).into_iter().collect();
    contains_all(&segments, &needles)
}
