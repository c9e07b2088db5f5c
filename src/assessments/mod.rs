//! Assessment descriptors and their scorers.
//!
//! Each descriptor pairs an identifier with an applicability predicate and a
//! scorer. Descriptors are plain `Copy` values; catalogs list them in order.
//!
//! Score scale: `9` good, `6`/`5` needs work, `3` and below bad. Negative
//! scores mark severe problems and `0` marks a keyphrase that cannot rank.

pub mod error;
pub mod heading;
pub mod keyword;
pub mod length;
pub mod slug;
pub mod types;


pub use error::AssessmentError;
pub use types::{Assessment, AssessmentResult, Predicate, Scorer, always};

/// Catalog identifiers.
pub mod ids {
    pub const INTRODUCTION_KEYWORD: &str = "introductionKeyword";
    pub const KEYPHRASE_LENGTH: &str = "keyphraseLength";
    pub const KEYWORD_DENSITY: &str = "keywordDensity";
    pub const META_DESCRIPTION_KEYWORD: &str = "metaDescriptionKeyword";
    pub const META_DESCRIPTION_LENGTH: &str = "metaDescriptionLength";
    pub const TAXONOMY_TEXT_LENGTH: &str = "taxonomyTextLength";
    pub const TITLE_KEYWORD: &str = "titleKeyword";
    pub const TITLE_WIDTH: &str = "titleWidth";
    pub const URL_KEYWORD: &str = "urlKeyword";
    pub const URL_LENGTH: &str = "urlLength";
    pub const URL_STOP_WORDS: &str = "urlStopWords";
    pub const FUNCTION_WORDS_IN_KEYPHRASE: &str = "functionWordsInKeyphrase";
    pub const SINGLE_H1: &str = "singleH1";
}
