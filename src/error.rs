//! Error handling

use thiserror::Error;

use crate::logic::explain::AttributionError;
use crate::logic::features::ValidationError;
use crate::logic::model::ModelError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the prediction engine
///
/// Clamping is never an error: it is part of the override policy.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A tracked profile attribute is missing or out of range.
    /// Caller contract violation, not retried.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The regressor cannot be invoked (not loaded, incompatible schema,
    /// unusable output). Fatal for the current call, no partial result.
    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    /// Attribution failed while scoring succeeded.
    /// `predict` degrades to empty factors; only `attributions` surfaces this.
    #[error("attribution unavailable: {0}")]
    AttributionUnavailable(#[from] AttributionError),

    /// Engine configuration rejected at construction/load time
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation_error",
            EngineError::ModelUnavailable(_) => "model_unavailable",
            EngineError::AttributionUnavailable(_) => "attribution_unavailable",
            EngineError::InvalidConfig(_) => "invalid_config",
        }
    }
}
