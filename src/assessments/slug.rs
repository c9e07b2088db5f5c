//! Slug assessments. Only registered in the standard catalog.

use crate::i18n::{Translator, format_message};
use crate::paper::Paper;
use crate::research;

use super::error::AssessmentError;
use super::ids;
use super::types::{Assessment, AssessmentResult};

pub const URL_LENGTH: Assessment = Assessment {
    identifier: ids::URL_LENGTH,
    is_applicable: url_length_applies,
    get_result: url_length_result,
};

pub const URL_STOP_WORDS: Assessment = Assessment {
    identifier: ids::URL_STOP_WORDS,
    is_applicable: url_stop_words_applies,
    get_result: url_stop_words_result,
};

fn url_length_applies(paper: &Paper) -> bool {
    paper.has_url() && research::url_is_too_long(paper.url(), paper.keyword())
}

fn url_length_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    if !research::url_is_too_long(paper.url(), paper.keyword()) {
        return Ok(AssessmentResult::unscored());
    }

    Ok(AssessmentResult::scored(
        5,
        i18n.translate("Slug too long: the slug for this page is a bit long, consider shortening it."),
    ))
}

fn url_stop_words_applies(paper: &Paper) -> bool {
    paper.has_url() && !research::stop_words_in_url(paper.url()).is_empty()
}

fn url_stop_words_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let stop_words = research::stop_words_in_url(paper.url());
    if stop_words.is_empty() {
        return Ok(AssessmentResult::unscored());
    }

    let template = if stop_words.len() == 1 {
        "Slug stopwords: The slug for this page contains a stop word: {0}. Consider removing it."
    } else {
        "Slug stopwords: The slug for this page contains stop words: {0}. Consider removing them."
    };

    Ok(AssessmentResult::scored(
        5,
        format_message(&i18n.translate(template), &[&stop_words.join(", ")]),
    ))
}
