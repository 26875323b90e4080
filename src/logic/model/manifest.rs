//! Model Manifest - Schema contract of a fitted model artifact
//!
//! Written next to the model when it is exported. Declares the feature
//! layout the model was fitted with, an optional SHA-256 of the artifact
//! and an optional background vector (training means) for attribution.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::regressor::ModelError;
use crate::logic::features::{
    layout_hash, layout::validate_layout, FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};

// ============================================================================
// MANIFEST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// e.g. "random_forest", "linear"
    pub model_type: String,
    pub feature_version: u8,
    pub layout_hash: u32,
    /// Ordered feature names the model was fitted with
    pub feature_names: Vec<String>,
    /// Hex SHA-256 of the model artifact
    #[serde(default)]
    pub sha256: Option<String>,
    /// Attribution reference point, one value per feature
    #[serde(default)]
    pub background: Option<Vec<f32>>,
}

impl ModelManifest {
    /// Manifest describing the compiled layout
    pub fn current(model_type: &str) -> Self {
        Self {
            model_type: model_type.to_string(),
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            sha256: None,
            background: None,
        }
    }

    /// Attach the artifact checksum
    pub fn with_checksum(mut self, artifact: &[u8]) -> Self {
        self.sha256 = Some(sha256_hex(artifact));
        self
    }

    pub fn with_background(mut self, background: Vec<f32>) -> Self {
        self.background = Some(background);
        self
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let manifest: ModelManifest = serde_json::from_str(&text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Version, hash and name list must all match the compiled layout
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_layout(self.feature_version, self.layout_hash)?;
        check_feature_names(&self.feature_names)?;

        if let Some(background) = &self.background {
            if background.len() != FEATURE_COUNT {
                return Err(ModelError::SchemaMismatch(format!(
                    "background has {} values, expected {}",
                    background.len(),
                    FEATURE_COUNT
                )));
            }
        }

        Ok(())
    }

    /// No-op when the manifest carries no checksum
    pub fn verify_checksum(&self, artifact: &[u8]) -> Result<(), ModelError> {
        let Some(expected) = &self.sha256 else {
            return Ok(());
        };

        let actual = sha256_hex(artifact);
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(ModelError::ChecksumMismatch {
                expected: expected.clone(),
                actual,
            });
        }

        Ok(())
    }

    pub fn background_vector(&self) -> Option<FeatureVector> {
        self.background
            .as_deref()
            .and_then(FeatureVector::from_slice)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Hex-encoded SHA-256 of an artifact
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Feature names must equal the compiled layout, in order
pub fn check_feature_names(names: &[String]) -> Result<(), ModelError> {
    if names.len() != FEATURE_COUNT {
        return Err(ModelError::SchemaMismatch(format!(
            "model declares {} features, expected {}",
            names.len(),
            FEATURE_COUNT
        )));
    }

    for (index, (declared, expected)) in names.iter().zip(FEATURE_LAYOUT).enumerate() {
        if declared != expected {
            return Err(ModelError::SchemaMismatch(format!(
                "feature {} is `{}`, expected `{}`",
                index, declared, expected
            )));
        }
    }

    Ok(())
}

/// Model metadata recorded at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: String,
    pub features: usize,
    pub layout_hash: u32,
    pub loaded_at: DateTime<Utc>,
}

impl ModelMetadata {
    pub fn new(model_path: &str, model_type: &str) -> Self {
        Self {
            model_path: model_path.to_string(),
            model_type: model_type.to_string(),
            features: FEATURE_COUNT,
            layout_hash: layout_hash(),
            loaded_at: Utc::now(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
