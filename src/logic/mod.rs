//! Logic Module - Prediction Pipeline & Engines
//!
//! ## Architecture
//! - `features/` - Feature schema, student profile, vectorizer
//! - `model/` - Base regressor seam (linear, ONNX)
//! - `explain/` - Attribution + factor filter & ranker
//! - `policy/` - Absence override policy and clamping
//! - `engine/` - Prediction engine + counterfactual simulator

pub mod config;

pub mod features;
pub mod model;
pub mod explain;
pub mod policy;
pub mod engine;

#[cfg(test)]
pub(crate) mod test_support;
