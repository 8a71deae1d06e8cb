/// Failures surfaced by the scoring, classification, and description steps.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answer {index} is invalid: {violation}")]
    InvalidAnswer {
        index: usize,
        violation: AnswerViolation,
    },
    #[error("no catalog category matches '{0}'")]
    UnknownCategory(String),
    #[error("threshold factor {0} must be greater than 0 and at most 1")]
    InvalidThreshold(f64),
    #[error("cannot classify an empty score map")]
    EmptyScores,
}

/// The constraint an individual answer broke.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerViolation {
    #[error("rating {0} is outside the 1-5 scale")]
    RatingOutOfRange(i32),
    #[error("correlation weight for '{key}' must be a non-negative number, found {weight}")]
    InvalidWeight { key: String, weight: f64 },
    #[error("correlation weight for '{0}' is too large to score")]
    WeightOverflow(String),
    #[error("correlation key '{0}' does not name a catalog category")]
    UnknownKey(String),
}
