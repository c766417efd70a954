use crate::model::error::ModelError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures surfaced by the assessment boundary.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A required field was missing, a value was out of its declared
    /// range, or the probability was not a finite number in [0, 1].
    /// The message names the offending field.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The upstream risk model could not produce a probability.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// Unexpected internal fault. Not produced for validated input; if
    /// it occurs it must reach the caller unswallowed.
    #[error("internal computation fault: {0}")]
    Computation(String),
}

impl AssessmentError {
    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        AssessmentError::InvalidInput(format!("`{field}`: {}", reason.into()))
    }
}

impl From<ValidationErrors> for AssessmentError {
    fn from(errors: ValidationErrors) -> Self {
        AssessmentError::InvalidInput(errors.to_string())
    }
}
