//! English text research used by assessment predicates and scorers.
//!
//! Everything here is a pure function over strings. The assessor never calls
//! into this module directly; it only sees the predicate and scorer function
//! values registered in a [`Catalog`](crate::catalog::Catalog).

pub mod function_words;
pub mod keyphrase;
pub mod text;
pub mod url;


pub use function_words::{content_words, is_function_word, is_function_words_only, is_stop_word};
pub use keyphrase::{
    IntroductionMatch, TitleMatch, description_match_count, exact_match_count,
    introduction_match, keyphrase_in_url, keyphrase_length, title_match,
};
pub use text::{first_paragraph, h1_count, sentences, strip_tags, word_count, words};
pub use url::{slug, slug_segments, stop_words_in_url, url_is_too_long};
