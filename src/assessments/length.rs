//! Length assessments that apply to every paper.

use crate::constants::{
    META_DESCRIPTION_MAX_CHARS, META_DESCRIPTION_MIN_CHARS, TAXONOMY_BELOW_MIN_WORDS,
    TAXONOMY_FAR_BELOW_MIN_WORDS, TAXONOMY_RECOMMENDED_MIN_WORDS,
    TAXONOMY_SLIGHTLY_BELOW_MIN_WORDS, TITLE_MAX_WIDTH, TITLE_MIN_WIDTH,
};
use crate::i18n::{Translator, format_message};
use crate::paper::Paper;
use crate::research;

use super::error::AssessmentError;
use super::ids;
use super::types::{Assessment, AssessmentResult, always};

pub const META_DESCRIPTION_LENGTH: Assessment = Assessment {
    identifier: ids::META_DESCRIPTION_LENGTH,
    is_applicable: always,
    get_result: meta_description_length_result,
};

pub const TAXONOMY_TEXT_LENGTH: Assessment = Assessment {
    identifier: ids::TAXONOMY_TEXT_LENGTH,
    is_applicable: always,
    get_result: taxonomy_text_length_result,
};

pub const TITLE_WIDTH: Assessment = Assessment {
    identifier: ids::TITLE_WIDTH,
    is_applicable: always,
    get_result: title_width_result,
};

fn meta_description_length_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let length = paper.description().chars().count();

    let result = if length == 0 {
        AssessmentResult::scored(
            1,
            i18n.translate(
                "Meta description length: No meta description has been specified. Search \
                 engines will display copy from the page instead. Make sure to write one!",
            ),
        )
    } else if length < META_DESCRIPTION_MIN_CHARS {
        AssessmentResult::scored(
            6,
            format_message(
                &i18n.translate(
                    "Meta description length: The meta description is too short (under {0} \
                     characters). Up to {1} characters are available. Use the space!",
                ),
                &[&META_DESCRIPTION_MIN_CHARS, &META_DESCRIPTION_MAX_CHARS],
            ),
        )
    } else if length > META_DESCRIPTION_MAX_CHARS {
        AssessmentResult::scored(
            6,
            format_message(
                &i18n.translate(
                    "Meta description length: The meta description is over {0} characters. \
                     To ensure the entire description will be visible, you should reduce the length!",
                ),
                &[&META_DESCRIPTION_MAX_CHARS],
            ),
        )
    } else {
        AssessmentResult::scored(9, i18n.translate("Meta description length: Well done!"))
    };
    Ok(result)
}

fn taxonomy_text_length_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let words = research::word_count(paper.text());

    let (score, template) = if words >= TAXONOMY_RECOMMENDED_MIN_WORDS {
        (
            9,
            "Text length: The text contains {0} words. Good job!",
        )
    } else if words >= TAXONOMY_SLIGHTLY_BELOW_MIN_WORDS {
        (
            6,
            "Text length: The text contains {0} words. This is slightly below the recommended \
             minimum of {1} words. Add a bit more copy.",
        )
    } else if words >= TAXONOMY_BELOW_MIN_WORDS {
        (
            3,
            "Text length: The text contains {0} words. This is below the recommended minimum \
             of {1} words. Add more content.",
        )
    } else if words >= TAXONOMY_FAR_BELOW_MIN_WORDS {
        (
            -10,
            "Text length: The text contains {0} words. This is far below the recommended \
             minimum of {1} words. Add more content.",
        )
    } else {
        (
            -20,
            "Text length: The text contains {0} words. This is far below the recommended \
             minimum of {1} words. Add more content.",
        )
    };

    Ok(AssessmentResult::scored(
        score,
        format_message(
            &i18n.translate(template),
            &[&words, &TAXONOMY_RECOMMENDED_MIN_WORDS],
        ),
    ))
}

fn title_width_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let width = paper.title_width();

    let result = if width == 0 {
        AssessmentResult::scored(
            1,
            i18n.translate("SEO title width: Please create an SEO title."),
        )
    } else if width < TITLE_MIN_WIDTH {
        AssessmentResult::scored(
            6,
            i18n.translate(
                "SEO title width: The SEO title is too short. Use the space to add keyphrase \
                 variations or create compelling call-to-action copy.",
            ),
        )
    } else if width > TITLE_MAX_WIDTH {
        AssessmentResult::scored(
            3,
            i18n.translate(
                "SEO title width: The SEO title is wider than the viewable limit. Try to make it \
                 shorter.",
            ),
        )
    } else {
        AssessmentResult::scored(9, i18n.translate("SEO title width: Good job!"))
    };
    Ok(result)
}
