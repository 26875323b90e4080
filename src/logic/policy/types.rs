//! Policy Types
//!
//! Core types for override decisions.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// ADJUSTMENT
// ============================================================================

/// Which branch of the absence rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Between the bands: model output used as-is
    None,
    /// Above the high threshold: linear penalty
    Penalty,
    /// Inside a low-absence tier: fixed bonus
    Bonus,
}

impl AdjustmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentKind::None => "none",
            AdjustmentKind::Penalty => "penalty",
            AdjustmentKind::Bonus => "bonus",
        }
    }
}

impl std::fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Additive correction produced by the absence rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    /// Signed delta added to the raw score (0 when `kind` is None)
    pub delta: f32,
}

impl Adjustment {
    pub const NONE: Adjustment = Adjustment { kind: AdjustmentKind::None, delta: 0.0 };

    pub fn fired(&self) -> bool {
        self.kind != AdjustmentKind::None
    }

    pub fn is_penalty(&self) -> bool {
        self.kind == AdjustmentKind::Penalty
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::NONE
    }
}

// ============================================================================
// OVERRIDE OUTCOME
// ============================================================================

/// Raw model score → corrected, clamped score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideOutcome {
    pub raw_score: f32,
    pub adjustment: Adjustment,
    /// Always within [0, max_grade]
    pub score: f32,
}
