//! ONNX Regressor - ONNX Runtime Integration
//!
//! Runs the exported tree-ensemble regressor on a single row.
//! The session sits behind a mutex because `Session::run` needs `&mut`;
//! `predict` itself keeps no state between calls.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::manifest::{ModelManifest, ModelMetadata};
use super::regressor::{BaseRegressor, ModelError};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

pub struct OnnxRegressor {
    session: Mutex<Session>,
    output_name: String,
    metadata: ModelMetadata,
}

impl OnnxRegressor {
    /// Load model from file, checking it against its manifest first
    pub fn load(model_path: &Path, manifest: &ModelManifest) -> Result<Self, ModelError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path.display().to_string()));
        }
        manifest.validate()?;

        let bytes = std::fs::read(model_path)?;
        manifest.verify_checksum(&bytes)?;

        let mut regressor = Self::from_bytes(&bytes, &manifest.model_type)?;
        regressor.metadata.model_path = model_path.display().to_string();
        Ok(regressor)
    }

    /// Load model from bytes (no manifest checks)
    pub fn from_bytes(model_bytes: &[u8], model_type: &str) -> Result<Self, ModelError> {
        let session = Session::builder()
            .map_err(|e| ModelError::Inference(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Inference(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ModelError::Inference(format!("Load from memory error: {}", e)))?;

        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::SchemaMismatch("No output defined".to_string()))?;

        log::info!("ONNX model loaded ({} bytes, output `{}`)", model_bytes.len(), output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            metadata: ModelMetadata::new("<memory>", model_type),
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl BaseRegressor for OnnxRegressor {
    fn predict(&self, vector: &FeatureVector) -> Result<f32, ModelError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), vector.as_slice().to_vec())
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&self.output_name)
            .ok_or_else(|| ModelError::Inference("No output".to_string()))?;

        let output_tensor = output.try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        output_tensor.1
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference("Empty output tensor".to_string()))
    }

    fn name(&self) -> &str {
        "onnx"
    }
}
