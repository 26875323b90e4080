//! Factor Filter & Ranker
//!
//! Raw attributions → at most `max_factors` display strings, strongest
//! first, with the known low-absence artifact removed and the override
//! note prepended when the high-absence penalty fired.

use serde::{Deserialize, Serialize};

use super::names::NameTable;
use super::types::{AttributionEntry, Direction};
use crate::logic::features::ABSENCES_FEATURE;

/// Upper bound on attribution-derived factors
pub const MAX_ATTRIBUTION_FACTORS: usize = 3;

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConfig {
    /// Attribution-derived factors kept (before suppression)
    pub max_factors: usize,
    /// Feature whose negative low-value attribution is suppressed
    pub suppressed_feature: String,
    /// Suppress only when the observed value is below this
    pub suppression_below: f32,
    /// Synthetic factor shown first when the high-absence override fired
    pub override_note: String,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            max_factors: MAX_ATTRIBUTION_FACTORS,
            suppressed_feature: ABSENCES_FEATURE.to_string(),
            suppression_below: 5.0,
            override_note: "Extreme Class Absences (Negative)".to_string(),
        }
    }
}

impl FactorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_ATTRIBUTION_FACTORS).contains(&self.max_factors) {
            return Err(format!(
                "max_factors must be within 1..={}, got {}",
                MAX_ATTRIBUTION_FACTORS, self.max_factors
            ));
        }
        if !self.suppression_below.is_finite() {
            return Err("suppression_below must be finite".to_string());
        }
        if self.override_note.trim().is_empty() {
            return Err("override_note must not be empty".to_string());
        }
        Ok(())
    }

    fn is_suppressed(&self, entry: &AttributionEntry) -> bool {
        entry.feature == self.suppressed_feature
            && entry.contribution < 0.0
            && entry.value < self.suppression_below
    }
}

// ============================================================================
// RANKING
// ============================================================================

/// A surviving factor before rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFactor {
    pub feature: String,
    pub display_name: String,
    pub direction: Direction,
    pub contribution: f32,
}

impl RankedFactor {
    /// "<display name> (Positive|Negative)"
    pub fn render(&self) -> String {
        format!("{} ({})", self.display_name, self.direction)
    }
}

/// Top entries by |contribution|, then suppression
///
/// Suppression runs after the cut, so a suppressed entry is not backfilled
/// and fewer than `max_factors` may survive.
pub fn select_factors(
    entries: &[AttributionEntry],
    config: &FactorConfig,
    names: &NameTable,
) -> Vec<RankedFactor> {
    let mut ranked: Vec<&AttributionEntry> = entries.iter().collect();
    // Stable: equal magnitudes keep layout order
    ranked.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));

    ranked
        .into_iter()
        .take(config.max_factors)
        .filter(|entry| !config.is_suppressed(entry))
        .map(|entry| RankedFactor {
            feature: entry.feature.clone(),
            display_name: names.display(&entry.feature).to_string(),
            direction: Direction::of(entry.contribution),
            contribution: entry.contribution,
        })
        .collect()
}

/// Full factor list for display (0 to `max_factors + 1` entries)
pub fn rank_factors(
    entries: &[AttributionEntry],
    high_absence_override: bool,
    config: &FactorConfig,
    names: &NameTable,
) -> Vec<String> {
    let mut factors: Vec<String> = select_factors(entries, config, names)
        .iter()
        .map(RankedFactor::render)
        .collect();

    if high_absence_override {
        factors.insert(0, config.override_note.clone());
    }

    factors
}

// ============================================================================
// TESTS
// ============================================================================
