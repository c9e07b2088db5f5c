use crate::i18n::Translator;
use crate::paper::Paper;
use crate::research;

use super::error::AssessmentError;
use super::ids;
use super::types::{Assessment, AssessmentResult};

/// Only registered in the recalibration catalog.
pub const SINGLE_H1: Assessment = Assessment {
    identifier: ids::SINGLE_H1,
    is_applicable: single_h1_applies,
    get_result: single_h1_result,
};

fn single_h1_applies(paper: &Paper) -> bool {
    research::h1_count(paper.text()) >= 2
}

fn single_h1_result(
    paper: &Paper,
    i18n: &dyn Translator,
) -> Result<AssessmentResult, AssessmentError> {
    if research::h1_count(paper.text()) < 2 {
        return Ok(AssessmentResult::unscored());
    }

    Ok(AssessmentResult::scored(
        1,
        i18n.translate(
            "Single title: H1s should only be used as your main title. Find all H1s in your text \
             that aren't your main title and change them to a lower heading level!",
        ),
    ))
}
