use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("research '{research}' failed: {reason}")]
    ResearchFailed {
        research: &'static str,
        reason: String,
    },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
