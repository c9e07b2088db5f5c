//! URL slug research.

use crate::constants::{MAX_SLUG_LENGTH, MAX_URL_LENGTH};

use super::function_words::is_stop_word;

/// Part of the URL after `scheme://host/`, or the whole value when it has
/// no scheme.
pub fn slug(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map_or("", |(_, path)| path),
        None => url,
    }
}

/// Lowercased alphanumeric segments of the URL slug.
pub fn slug_segments(url: &str) -> Vec<String> {
    slug(url)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A URL is too long when it exceeds both the absolute limit and the
/// keyphrase length plus the slug allowance.
pub fn url_is_too_long(url: &str, keyphrase: &str) -> bool {
    let url_length = url.chars().count();
    let keyphrase_length = keyphrase.chars().count();
    url_length > MAX_URL_LENGTH && url_length > keyphrase_length + MAX_SLUG_LENGTH
}

/// Distinct stop words found among the slug segments, in first-seen order.
pub fn stop_words_in_url(url: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for segment in slug_segments(url) {
        if is_stop_word(&segment) && !found.contains(&segment) {
            found.push(segment);
        }
    }
    found
}
