//! English function words and URL stop words.
//!
//! Function words carry no topical content: articles, prepositions,
//! pronouns, conjunctions, auxiliaries, quantifiers and a handful of
//! frequent adverbs. A keyphrase made only of these cannot be ranked for.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::text::words;

const FUNCTION_WORD_LIST: &[&str] = &[
    // articles and determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "no", "every", "each",
    "either", "neither", "another", "such", "what", "which", "whatever", "whichever",
    // pronouns
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "whoever", "one", "ones", "someone", "somebody", "something", "anyone", "anybody",
    "anything", "everyone", "everybody", "everything", "nobody", "nothing",
    // prepositions
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near",
    "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "till", "to", "toward", "towards", "under", "underneath", "until", "up", "upon",
    "via", "with", "within", "without",
    // conjunctions
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "whereas",
    "if", "unless", "whether", "than", "then", "once", "when", "whenever", "where", "wherever",
    "why", "how",
    // auxiliaries and modals
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "doing", "done",
    "have", "has", "had", "having", "can", "could", "may", "might", "must", "shall", "should",
    "will", "would", "ought",
    // quantifiers
    "all", "both", "few", "fewer", "many", "more", "most", "much", "several", "less", "least",
    "lot", "lots", "enough", "own", "other", "others", "same",
    // frequent adverbs
    "again", "almost", "already", "also", "always", "even", "ever", "here", "there", "just",
    "never", "not", "now", "often", "only", "quite", "rather", "really", "still", "too", "very",
    "well", "further", "however", "instead", "perhaps", "maybe",
];

const STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "me", "more",
    "most", "my", "myself", "nor", "of", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FUNCTION_WORD_LIST.iter().copied().collect());

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// `word` must already be normalized (lowercase, no surrounding punctuation).
pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(word)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Words of the keyphrase that are not function words, in order.
pub fn content_words(keyphrase: &str) -> Vec<String> {
    words(keyphrase)
        .into_iter()
        .filter(|w| !is_function_word(w))
        .collect()
}

/// `true` when the keyphrase has at least one word and every word is a function word.
pub fn is_function_words_only(keyphrase: &str) -> bool {
    let all = words(keyphrase);
    !all.is_empty() && all.iter().all(|w| is_function_word(w))
}
