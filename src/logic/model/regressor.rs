//! Base Regressor - Model seam
//!
//! The fitted model is opaque: the engine only ever calls `predict`.
//! Implementations must be pure and reentrant (no counters mutated on
//! `predict`), since one instance is shared across concurrent calls.

use std::sync::Arc;

use thiserror::Error;

use crate::logic::features::{FeatureVector, LayoutMismatchError};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not loaded")]
    NotLoaded,

    #[error("model artifact not found: {0}")]
    NotFound(String),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("incompatible feature schema: {0}")]
    SchemaMismatch(String),

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("unsupported model artifact: {0}")]
    Unsupported(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model produced a non-finite score ({0})")]
    NonFinite(f32),
}

impl From<LayoutMismatchError> for ModelError {
    fn from(err: LayoutMismatchError) -> Self {
        ModelError::SchemaMismatch(err.to_string())
    }
}

// ============================================================================
// BASE REGRESSOR TRAIT
// ============================================================================

/// Pre-fitted regression model: feature vector → raw grade estimate
pub trait BaseRegressor: Send + Sync {
    /// Must be deterministic for identical input
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError>;

    /// Short name for logs
    fn name(&self) -> &str {
        "regressor"
    }
}

impl<R: BaseRegressor + ?Sized> BaseRegressor for &R {
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        (**self).predict(vector)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: BaseRegressor + ?Sized> BaseRegressor for Arc<R> {
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        (**self).predict(vector)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: BaseRegressor + ?Sized> BaseRegressor for Box<R> {
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        (**self).predict(vector)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Layout-checked prediction that rejects unusable (NaN/inf) output
pub fn raw_score<R: BaseRegressor + ?Sized>(
    model: &R,
    vector: &FeatureVector,
) -> Result<f32, ModelError> {
    vector.validate()?;

    let score = model.predict(vector)?;
    if !score.is_finite() {
        return Err(ModelError::NonFinite(score));
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_COUNT;

    struct Constant(f32);

    impl BaseRegressor for Constant {
        fn predict(&self, _vector: &FeatureVector) -> Result<f32, ModelError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_raw_score_passes_finite() {
        let vector = FeatureVector::from_values([0.0; FEATURE_COUNT]);
        assert_eq!(raw_score(&Constant(12.5), &vector).unwrap(), 12.5);
    }

    #[test]
    fn test_raw_score_rejects_non_finite() {
        let vector = FeatureVector::from_values([0.0; FEATURE_COUNT]);
        assert!(matches!(raw_score(&Constant(f32::NAN), &vector), Err(ModelError::NonFinite(_))));
        assert!(raw_score(&Constant(f32::INFINITY), &vector).is_err());
    }

    #[test]
    fn test_smart_pointer_impls() {
        let vector = FeatureVector::from_values([0.0; FEATURE_COUNT]);
        let shared: Arc<dyn BaseRegressor> = Arc::new(Constant(3.0));
        let boxed: Box<dyn BaseRegressor> = Box::new(Constant(4.0));

        assert_eq!(raw_score(&shared, &vector).unwrap(), 3.0);
        assert_eq!(raw_score(&boxed, &vector).unwrap(), 4.0);
        assert_eq!(shared.name(), "regressor");
    }
}
