//! Keyphrase assessments: where and how often the focus keyphrase is used.

use crate::constants::{
    DENSITY_MAX_PERCENT, DENSITY_MIN_PERCENT, DENSITY_OVERUSE_PERCENT,
    KEYPHRASE_ACCEPTABLE_MAX_WORDS, KEYPHRASE_RECOMMENDED_MAX_WORDS, META_DESCRIPTION_MAX_MATCHES,
    MIN_WORDS_FOR_DENSITY,
};
use crate::i18n::{Translator, format_message};
use crate::paper::Paper;
use crate::research::{
    self, IntroductionMatch, TitleMatch, content_words, is_function_words_only,
};

use super::error::AssessmentError;
use super::ids;
use super::types::{Assessment, AssessmentResult, always};

pub const INTRODUCTION_KEYWORD: Assessment = Assessment {
    identifier: ids::INTRODUCTION_KEYWORD,
    is_applicable: introduction_applies,
    get_result: introduction_result,
};

pub const KEYPHRASE_LENGTH: Assessment = Assessment {
    identifier: ids::KEYPHRASE_LENGTH,
    is_applicable: always,
    get_result: keyphrase_length_result,
};

pub const KEYWORD_DENSITY: Assessment = Assessment {
    identifier: ids::KEYWORD_DENSITY,
    is_applicable: density_applies,
    get_result: density_result,
};

pub const META_DESCRIPTION_KEYWORD: Assessment = Assessment {
    identifier: ids::META_DESCRIPTION_KEYWORD,
    is_applicable: meta_description_keyword_applies,
    get_result: meta_description_keyword_result,
};

pub const TITLE_KEYWORD: Assessment = Assessment {
    identifier: ids::TITLE_KEYWORD,
    is_applicable: title_keyword_applies,
    get_result: title_keyword_result,
};

pub const URL_KEYWORD: Assessment = Assessment {
    identifier: ids::URL_KEYWORD,
    is_applicable: url_keyword_applies,
    get_result: url_keyword_result,
};

pub const FUNCTION_WORDS_IN_KEYPHRASE: Assessment = Assessment {
    identifier: ids::FUNCTION_WORDS_IN_KEYPHRASE,
    is_applicable: function_words_applies,
    get_result: function_words_result,
};

fn introduction_applies(paper: &Paper) -> bool {
    paper.has_keyword() && !content_words(paper.keyword()).is_empty() && paper.has_text()
}

fn introduction_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    if content_words(paper.keyword()).is_empty() {
        return Err(AssessmentError::InvalidInput {
            reason: "keyphrase has no content words".to_string(),
        });
    }

    let result = match research::introduction_match(paper.text(), paper.keyword()) {
        IntroductionMatch::SameSentence => AssessmentResult::scored(
            9,
            i18n.translate("Keyphrase in introduction: Well done!"),
        ),
        IntroductionMatch::SameParagraph => AssessmentResult::scored(
            6,
            i18n.translate(
                "Keyphrase in introduction: Your keyphrase or its synonyms appear in the first \
                 paragraph of the copy, but not within one sentence. Fix that!",
            ),
        ),
        IntroductionMatch::NotFound => AssessmentResult::scored(
            3,
            i18n.translate(
                "Keyphrase in introduction: Your keyphrase or its synonyms do not appear in the \
                 first paragraph. Make sure the topic is clear immediately.",
            ),
        ),
    };
    Ok(result)
}

fn keyphrase_length_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let length = research::keyphrase_length(paper.keyword());

    let result = match length {
        0 => AssessmentResult::scored(
            1,
            i18n.translate(
                "Keyphrase length: No focus keyphrase was set for this page. Set a keyphrase in \
                 order to calculate your SEO score.",
            ),
        ),
        n if n <= KEYPHRASE_RECOMMENDED_MAX_WORDS => {
            AssessmentResult::scored(9, i18n.translate("Keyphrase length: Good job!"))
        }
        n if n <= KEYPHRASE_ACCEPTABLE_MAX_WORDS => AssessmentResult::scored(
            6,
            format_message(
                &i18n.translate(
                    "Keyphrase length: The keyphrase is {0} words long. That's more than the \
                     recommended maximum of {1} words. Make it shorter!",
                ),
                &[&n, &KEYPHRASE_RECOMMENDED_MAX_WORDS],
            ),
        ),
        n => AssessmentResult::scored(
            3,
            format_message(
                &i18n.translate(
                    "Keyphrase length: The keyphrase is {0} words long. That's way more than the \
                     recommended maximum of {1} words. Make it shorter!",
                ),
                &[&n, &KEYPHRASE_RECOMMENDED_MAX_WORDS],
            ),
        ),
    };
    Ok(result)
}

fn density_applies(paper: &Paper) -> bool {
    paper.has_keyword() && research::word_count(paper.text()) >= MIN_WORDS_FOR_DENSITY
}

fn density_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let word_count = research::word_count(paper.text());
    if word_count == 0 {
        return Err(AssessmentError::ResearchFailed {
            research: "keywordDensity",
            reason: "text has no words".to_string(),
        });
    }

    let matches = research::exact_match_count(paper.text(), paper.keyword());
    let density = matches as f64 / word_count as f64 * 100.0;

    let (score, template) = if density > DENSITY_OVERUSE_PERCENT {
        (
            -50,
            "Keyphrase density: The focus keyphrase was found {0} times. That's way more than \
             the recommended maximum of {1}% for a text of this length. Don't overoptimize!",
        )
    } else if density > DENSITY_MAX_PERCENT {
        (
            -10,
            "Keyphrase density: The focus keyphrase was found {0} times. That's more than the \
             recommended maximum of {1}% for a text of this length. Don't overoptimize!",
        )
    } else if density >= DENSITY_MIN_PERCENT {
        (
            9,
            "Keyphrase density: The focus keyphrase was found {0} times. This is great!",
        )
    } else {
        (
            4,
            "Keyphrase density: The focus keyphrase was found {0} times. That's less than \
             recommended for a text of this length. Focus on your keyphrase!",
        )
    };

    let text = format_message(
        &i18n.translate(template),
        &[&matches, &DENSITY_MAX_PERCENT],
    );
    Ok(AssessmentResult::scored(score, text))
}

fn meta_description_keyword_applies(paper: &Paper) -> bool {
    paper.has_description() && paper.has_keyword()
}

fn meta_description_keyword_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let matches = research::description_match_count(paper.description(), paper.keyword());

    let result = match matches {
        0 => AssessmentResult::scored(
            3,
            i18n.translate(
                "Keyphrase in meta description: The meta description has been specified, but it \
                 does not contain the keyphrase. Fix that!",
            ),
        ),
        n if n <= META_DESCRIPTION_MAX_MATCHES => AssessmentResult::scored(
            9,
            i18n.translate(
                "Keyphrase in meta description: Keyphrase or synonym appear in the meta \
                 description. Well done!",
            ),
        ),
        n => AssessmentResult::scored(
            3,
            format_message(
                &i18n.translate(
                    "Keyphrase in meta description: The meta description contains the keyphrase \
                     {0} times, which is over the advised maximum of {1} times. Limit that!",
                ),
                &[&n, &META_DESCRIPTION_MAX_MATCHES],
            ),
        ),
    };
    Ok(result)
}

fn title_keyword_applies(paper: &Paper) -> bool {
    paper.has_title() && paper.has_text() && paper.has_keyword()
}

fn title_keyword_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let result = match research::title_match(paper.title(), paper.keyword()) {
        TitleMatch::ExactAtStart => AssessmentResult::scored(
            9,
            i18n.translate(
                "Keyphrase in title: The exact match of the focus keyphrase appears at the \
                 beginning of the SEO title. Good job!",
            ),
        ),
        TitleMatch::ExactElsewhere => AssessmentResult::scored(
            6,
            i18n.translate(
                "Keyphrase in title: The exact match of the focus keyphrase appears in the SEO \
                 title, but not at the beginning. Move it to the beginning for the best results.",
            ),
        ),
        TitleMatch::AllWords => AssessmentResult::scored(
            6,
            i18n.translate(
                "Keyphrase in title: Does not contain the exact match. Try to write the exact \
                 match of your keyphrase in the SEO title and put it at the beginning of the title.",
            ),
        ),
        TitleMatch::NotFound => AssessmentResult::scored(
            2,
            format_message(
                &i18n.translate(
                    "Keyphrase in title: Not all the words from your keyphrase \"{0}\" appear in \
                     the SEO title. For the best SEO results write the exact match of your \
                     keyphrase in the SEO title, and put the keyphrase at the beginning of the title.",
                ),
                &[&paper.keyword()],
            ),
        ),
    };
    Ok(result)
}

fn url_keyword_applies(paper: &Paper) -> bool {
    paper.has_url() && paper.has_keyword()
}

fn url_keyword_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    let result = if research::keyphrase_in_url(paper.url(), paper.keyword()) {
        AssessmentResult::scored(9, i18n.translate("Keyphrase in slug: Great work!"))
    } else {
        AssessmentResult::scored(
            6,
            i18n.translate(
                "Keyphrase in slug: (Part of) your keyphrase does not appear in the slug. Change that!",
            ),
        )
    };
    Ok(result)
}

fn function_words_applies(paper: &Paper) -> bool {
    paper.has_keyword() && is_function_words_only(paper.keyword())
}

fn function_words_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    if !is_function_words_only(paper.keyword()) {
        return Ok(AssessmentResult::unscored());
    }

    Ok(AssessmentResult::scored(
        0,
        format_message(
            &i18n.translate(
                "Function words in keyphrase: Your keyphrase \"{0}\" contains function words only. \
                 Learn more about what makes a good keyphrase.",
            ),
            &[&paper.keyword()],
        ),
    ))
}
