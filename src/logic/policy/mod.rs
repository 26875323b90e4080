//! Policy Module - Absence Override Policy
//!
//! Deterministic, rule-based correction layered on top of the opaque
//! regressor for its known attendance blind spots. Pure function of
//! (raw score, absences); kept separate from the model so it can be
//! audited and tested on its own.
//!
//! ## Structure
//! - `types`: Adjustment, AdjustmentKind, OverrideOutcome
//! - `config`: Rule table and presets
//! - `engine`: Evaluation and clamping
//!
//! ## Usage
//! ```ignore
//! use crate::logic::policy::{apply_override, OverrideConfig};
//!
//! let outcome = apply_override(raw, profile.absences, &OverrideConfig::default());
//! if outcome.adjustment.is_penalty() {
//!     // prepend the override note to the factors
//! }
//! ```

pub mod types;
pub mod config;
pub mod engine;

pub use types::{Adjustment, AdjustmentKind, OverrideOutcome};
pub use config::{BonusTier, OverrideConfig};
pub use engine::{apply_override, clamp_score, evaluate};
