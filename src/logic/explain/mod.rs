//! Explain Module - Attribution & Factor Ranking
//!
//! Turns raw model attributions into the short factor list shown to a
//! non-technical viewer.
//!
//! ## Structure
//! - `types`: AttributionEntry, Direction
//! - `explainer`: AttributionExplainer seam + occlusion method
//! - `names`: feature-name translation table
//! - `ranker`: factor filter & ranker

pub mod types;
pub mod explainer;
pub mod names;
pub mod ranker;

pub use types::{AttributionEntry, Direction};
pub use explainer::{attribute_entries, AttributionError, AttributionExplainer, OcclusionExplainer};
pub use names::{NameTable, FEATURE_DISPLAY_NAMES};
pub use ranker::{rank_factors, select_factors, FactorConfig, RankedFactor, MAX_ATTRIBUTION_FACTORS};
