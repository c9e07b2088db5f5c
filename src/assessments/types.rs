use serde::Serialize;

use crate::i18n::Translator;
use crate::paper::Paper;

use super::error::AssessmentError;

/// Applicability predicate. Pure; never fails.
pub type Predicate = fn(&Paper) -> bool;

/// Scoring function. Pure; may fail on unexpected research input.
pub type Scorer = fn(&Paper, &dyn Translator) -> Result<AssessmentResult, AssessmentError>;

/// What a scorer produced for one paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    /// Higher is better; `9` is the "good" score. `None` means the scorer
    /// ran but had nothing to report.
    pub score: Option<i32>,
    /// Translated feedback. Empty when there is no score.
    pub text: String,
}

impl AssessmentResult {
    pub fn scored(score: i32, text: impl Into<String>) -> Self {
        Self {
            score: Some(score),
            text: text.into(),
        }
    }

    /// Completed without a score; excluded from valid results.
    pub fn unscored() -> Self {
        Self::default()
    }

    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }
}

/// Declarative assessment descriptor: an identifier, when it applies, and
/// how it scores.
#[derive(Clone, Copy)]
pub struct Assessment {
    pub identifier: &'static str,
    pub is_applicable: Predicate,
    pub get_result: Scorer,
}

impl std::fmt::Debug for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assessment")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// Predicate for checks that apply to every paper.
pub fn always(_paper: &Paper) -> bool {
    true
}
