//! Model Module - Base Regressor
//!
//! The fitted model is an external collaborator behind `BaseRegressor`.
//! Easy to swap: linear JSON artifact, ONNX export (feature `onnx`).

pub mod regressor;
pub mod manifest;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;

// Re-export common types
pub use regressor::{raw_score, BaseRegressor, ModelError};
pub use manifest::{sha256_hex, ModelManifest, ModelMetadata};
pub use linear::LinearModel;
#[cfg(feature = "onnx")]
pub use onnx::OnnxRegressor;
