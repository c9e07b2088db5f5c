use serde::Serialize;

use crate::assessments::AssessmentResult;

/// How one descriptor fared during an assessment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// Predicate returned `false`; the scorer never ran.
    NotApplicable,
    /// Scorer returned normally, with or without a score.
    Completed(AssessmentResult),
    /// Scorer returned an error; recorded and skipped.
    Failed { reason: String },
}

/// Recorded result of one descriptor against one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub identifier: &'static str,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl Outcome {
    pub fn new(identifier: &'static str, evaluation: Evaluation) -> Self {
        Self {
            identifier,
            evaluation,
        }
    }

    /// The scorer's result, if it ran to completion.
    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.evaluation {
            Evaluation::Completed(result) => Some(result),
            Evaluation::NotApplicable | Evaluation::Failed { .. } => None,
        }
    }

    /// `true` for valid outcomes, the only ones reported to callers.
    pub fn has_score(&self) -> bool {
        self.score().is_some()
    }

    pub fn score(&self) -> Option<i32> {
        self.result().and_then(|r| r.score)
    }

    /// Feedback text; only present on valid outcomes.
    pub fn feedback_text(&self) -> Option<&str> {
        self.result()
            .filter(|r| r.has_score())
            .map(|r| r.text.as_str())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.evaluation, Evaluation::Failed { .. })
    }
}
