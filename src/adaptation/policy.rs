//! Confidence policy: the single source of truth for action-class
//! thresholds.
//!
//! The thresholds `{0.9, 0.7, 0.5, 0.0}` are a stable contract with every
//! caller that relies on action-class semantics. They live only in this
//! module so they cannot drift out of sync across call sites.

use crate::error::{EnsembleError, Result};

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// ActionClass
// ---------------------------------------------------------------------------

/// The autonomy level granted to an insight, lowest to highest.
///
/// Declared in ascending rank order so the derived `Ord` ranks
/// `AutoApply` above `Suggest` above `LogOnly` above `Ignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionClass {
    /// Discard; do not surface.
    Ignore,
    /// Record for later review, no surfacing.
    LogOnly,
    /// Present to the user for approval.
    Suggest,
    /// The system may act without confirmation.
    AutoApply,
}

/// Lower-bound confidence for AUTO_APPLY.
pub const AUTO_APPLY_THRESHOLD: f64 = 0.9;

/// Lower-bound confidence for SUGGEST.
pub const SUGGEST_THRESHOLD: f64 = 0.7;

/// Lower-bound confidence for LOG_ONLY.
pub const LOG_ONLY_THRESHOLD: f64 = 0.5;

impl ActionClass {
    /// Lower-bound confidence threshold for this class.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::AutoApply => AUTO_APPLY_THRESHOLD,
            Self::Suggest => SUGGEST_THRESHOLD,
            Self::LogOnly => LOG_ONLY_THRESHOLD,
            Self::Ignore => 0.0,
        }
    }
}

impl fmt::Display for ActionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoApply => write!(f, "AUTO_APPLY"),
            Self::Suggest => write!(f, "SUGGEST"),
            Self::LogOnly => write!(f, "LOG_ONLY"),
            Self::Ignore => write!(f, "IGNORE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Validate that a confidence score is a number in [0.0, 1.0].
///
/// Shared by pattern construction, raw ingress, and [`classify`] so every
/// path rejects bad confidence identically. Out-of-range values are an
/// error, never clamped.
pub fn validate_confidence(confidence: f64) -> Result<f64> {
    if confidence.is_nan() || !(0.0..=1.0).contains(&confidence) {
        return Err(EnsembleError::InvalidConfidence { value: confidence });
    }
    Ok(confidence)
}

/// Map a confidence score to its action class.
///
/// Pure and total over [0.0, 1.0]. Intervals are closed-open: a score
/// exactly at a boundary belongs to the higher class, so 0.9 is
/// AUTO_APPLY, not SUGGEST.
pub fn classify(confidence: f64) -> Result<ActionClass> {
    let confidence = validate_confidence(confidence)?;

    let class = if confidence >= AUTO_APPLY_THRESHOLD {
        ActionClass::AutoApply
    } else if confidence >= SUGGEST_THRESHOLD {
        ActionClass::Suggest
    } else if confidence >= LOG_ONLY_THRESHOLD {
        ActionClass::LogOnly
    } else {
        ActionClass::Ignore
    };

    Ok(class)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- classify: interval membership ---

    #[test]
    fn classify_top_of_range() {
        assert_eq!(classify(1.0).unwrap(), ActionClass::AutoApply);
        assert_eq!(classify(0.95).unwrap(), ActionClass::AutoApply);
    }

    #[test]
    fn classify_suggest_band() {
        assert_eq!(classify(0.8).unwrap(), ActionClass::Suggest);
        assert_eq!(classify(0.89).unwrap(), ActionClass::Suggest);
    }

    #[test]
    fn classify_log_only_band() {
        assert_eq!(classify(0.6).unwrap(), ActionClass::LogOnly);
        assert_eq!(classify(0.69).unwrap(), ActionClass::LogOnly);
    }

    #[test]
    fn classify_ignore_band() {
        assert_eq!(classify(0.0).unwrap(), ActionClass::Ignore);
        assert_eq!(classify(0.49).unwrap(), ActionClass::Ignore);
    }

    #[test]
    fn boundary_values_belong_to_the_higher_class() {
        assert_eq!(classify(0.9).unwrap(), ActionClass::AutoApply);
        assert_eq!(classify(0.7).unwrap(), ActionClass::Suggest);
        assert_eq!(classify(0.5).unwrap(), ActionClass::LogOnly);
    }

    // --- classify: invalid input ---

    #[test]
    fn classify_rejects_above_one() {
        let error = classify(1.5).unwrap_err();
        assert!(matches!(
            error,
            EnsembleError::InvalidConfidence { value } if value == 1.5
        ));
    }

    #[test]
    fn classify_rejects_negative() {
        assert!(classify(-0.1).is_err());
    }

    #[test]
    fn classify_rejects_nan() {
        assert!(classify(f64::NAN).is_err());
    }

    // --- thresholds and ordering ---

    #[test]
    fn thresholds_match_documented_contract() {
        assert_eq!(ActionClass::AutoApply.threshold(), 0.9);
        assert_eq!(ActionClass::Suggest.threshold(), 0.7);
        assert_eq!(ActionClass::LogOnly.threshold(), 0.5);
        assert_eq!(ActionClass::Ignore.threshold(), 0.0);
    }

    #[test]
    fn auto_apply_outranks_every_other_class() {
        assert!(ActionClass::AutoApply > ActionClass::Suggest);
        assert!(ActionClass::Suggest > ActionClass::LogOnly);
        assert!(ActionClass::LogOnly > ActionClass::Ignore);
    }

    #[test]
    fn display_uses_screaming_snake_case() {
        assert_eq!(ActionClass::AutoApply.to_string(), "AUTO_APPLY");
        assert_eq!(ActionClass::LogOnly.to_string(), "LOG_ONLY");
    }
}
