//! Grade Insight Core - Hybrid Grade Prediction & Explanation Engine
//!
//! Turns a student record into a clamped grade estimate, a short list of
//! human-readable contributing factors, and what-if deltas.
//!
//! ## Pipeline
//! record → `FeatureVector` → {raw score, attributions} → override policy
//! → filtered/ranked factors → `PredictionResult`

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{EngineError, EngineResult};
pub use logic::engine::{GradeEngine, PredictionResult, Simulation, WhatIf};
pub use logic::features::{StudentProfile, StudentRecord};
