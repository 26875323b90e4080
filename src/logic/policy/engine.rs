//! Override Engine
//!
//! Decision logic only - no type definitions.
//! Input: raw model score + absence count + OverrideConfig
//! Output: OverrideOutcome (always clamped)

use super::config::OverrideConfig;
use super::types::{Adjustment, AdjustmentKind, OverrideOutcome};

// ============================================================================
// RULE EVALUATION
// ============================================================================

/// Absence count → additive adjustment
pub fn evaluate(absences: u32, config: &OverrideConfig) -> Adjustment {
    if absences > config.high_threshold {
        let excess = (absences - config.high_threshold) as f32;
        return Adjustment {
            kind: AdjustmentKind::Penalty,
            delta: -(excess * config.penalty_per_absence),
        };
    }

    match config.bonus_tiers.iter().find(|tier| absences <= tier.max_absences) {
        Some(tier) => Adjustment {
            kind: AdjustmentKind::Bonus,
            delta: tier.bonus,
        },
        None => Adjustment::NONE,
    }
}

/// Clamp to [0, max_grade]
pub fn clamp_score(score: f32, max_grade: f32) -> f32 {
    score.clamp(0.0, max_grade)
}

/// Main override function: adjust, then clamp regardless of branch
pub fn apply_override(raw_score: f32, absences: u32, config: &OverrideConfig) -> OverrideOutcome {
    let adjustment = evaluate(absences, config);
    let score = clamp_score(raw_score + adjustment.delta, config.max_grade);

    OverrideOutcome {
        raw_score,
        adjustment,
        score,
    }
}

// ============================================================================
// TESTS
// ============================================================================
