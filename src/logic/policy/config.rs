//! Override Configuration
//!
//! The absence rule is data: thresholds, penalty slope and bonus tiers.
//! Presets capture the variants seen in deployment; the piecewise shape is
//! fixed, the constants are tunable.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_GRADE;

// ============================================================================
// BONUS TIER
// ============================================================================

/// Fixed bonus for absence counts at or below `max_absences`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusTier {
    pub max_absences: u32,
    pub bonus: f32,
}

// ============================================================================
// OVERRIDE CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Inclusive upper clamp; lower clamp is always 0
    pub max_grade: f32,
    /// Penalty applies strictly above this count
    pub high_threshold: u32,
    /// Points removed per absence beyond `high_threshold`
    pub penalty_per_absence: f32,
    /// Ascending by `max_absences`; first covering tier wins
    pub bonus_tiers: Vec<BonusTier>,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            max_grade: MAX_GRADE,
            high_threshold: 15,
            penalty_per_absence: 0.3,
            bonus_tiers: vec![BonusTier { max_absences: 1, bonus: 2.0 }],
        }
    }
}

impl OverrideConfig {
    /// Two-step attendance reward: +3.0 for none, +1.5 for up to three
    pub fn tiered() -> Self {
        Self {
            bonus_tiers: vec![
                BonusTier { max_absences: 0, bonus: 3.0 },
                BonusTier { max_absences: 3, bonus: 1.5 },
            ],
            ..Default::default()
        }
    }

    /// Clamp only - model output is never adjusted
    pub fn disabled() -> Self {
        Self {
            high_threshold: u32::MAX,
            penalty_per_absence: 0.0,
            bonus_tiers: vec![],
            ..Default::default()
        }
    }

    /// Look up a preset by name ("default", "tiered", "disabled")
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "tiered" => Some(Self::tiered()),
            "disabled" | "none" => Some(Self::disabled()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_grade.is_finite() && self.max_grade > 0.0) {
            return Err(format!("max_grade must be positive, got {}", self.max_grade));
        }
        if !(self.penalty_per_absence.is_finite() && self.penalty_per_absence >= 0.0) {
            return Err(format!(
                "penalty_per_absence must be >= 0, got {}",
                self.penalty_per_absence
            ));
        }

        let mut previous: Option<&BonusTier> = None;
        for tier in &self.bonus_tiers {
            if !(tier.bonus.is_finite() && tier.bonus > 0.0) {
                return Err(format!("bonus must be positive, got {}", tier.bonus));
            }
            if tier.max_absences >= self.high_threshold {
                return Err(format!(
                    "bonus tier up to {} overlaps the penalty band (> {})",
                    tier.max_absences, self.high_threshold
                ));
            }
            if let Some(prev) = previous {
                if tier.max_absences <= prev.max_absences {
                    return Err("bonus tiers must be strictly ascending".to_string());
                }
                if tier.bonus > prev.bonus {
                    return Err("bonus must not grow with more absences".to_string());
                }
            }
            previous = Some(tier);
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
