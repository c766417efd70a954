use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model failed to produce a probability: {reason}")]
    Prediction { reason: String },
}
