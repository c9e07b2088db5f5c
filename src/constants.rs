//! Thresholds shared by research and scorers.
//!
//! Word and character thresholds are inclusive lower bounds unless noted.

/// Body texts shorter than this never get a keyphrase density check.
pub const MIN_WORDS_FOR_DENSITY: usize = 100;

/// Absolute URL length above which the slug may be too long.
pub const MAX_URL_LENGTH: usize = 40;
/// Slug allowance on top of the keyphrase length.
pub const MAX_SLUG_LENGTH: usize = 20;

pub const KEYPHRASE_RECOMMENDED_MAX_WORDS: usize = 4;
pub const KEYPHRASE_ACCEPTABLE_MAX_WORDS: usize = 8;

pub const META_DESCRIPTION_MIN_CHARS: usize = 120;
pub const META_DESCRIPTION_MAX_CHARS: usize = 156;

/// Taxonomy descriptions are shorter than posts, so the bars are lower.
pub const TAXONOMY_RECOMMENDED_MIN_WORDS: usize = 250;
pub const TAXONOMY_SLIGHTLY_BELOW_MIN_WORDS: usize = 200;
pub const TAXONOMY_BELOW_MIN_WORDS: usize = 100;
pub const TAXONOMY_FAR_BELOW_MIN_WORDS: usize = 50;

/// Title width bounds in pixels.
pub const TITLE_MIN_WIDTH: u32 = 400;
pub const TITLE_MAX_WIDTH: u32 = 600;

/// Keyphrase density bounds in percent.
pub const DENSITY_MIN_PERCENT: f64 = 0.5;
pub const DENSITY_MAX_PERCENT: f64 = 2.5;
pub const DENSITY_OVERUSE_PERCENT: f64 = 3.5;

/// Description sentences containing the keyphrase before it reads as stuffing.
pub const META_DESCRIPTION_MAX_MATCHES: usize = 2;
