//! Data types for the adaptation pipeline.

use crate::adaptation::policy::{self, ActionClass};
use crate::error::{EnsembleError, Result};
use crate::roles::Role;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A detected behavioral regularity supplied by an external detector.
///
/// The engine treats patterns as immutable input values and never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// What was observed (e.g. "preference", "recurring_topic").
    pub kind: String,
    /// Detection confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Signal strength: how often the regularity was observed.
    pub frequency: f64,
    /// Free-form supporting evidence.
    pub evidence: Option<String>,
    /// Extra detector fields, preserved opaquely.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Pattern {
    /// Construct a validated pattern.
    ///
    /// Fails with [`EnsembleError::InvalidConfidence`] rather than
    /// clamping, so callers cannot silently corrupt the action-class
    /// decision downstream.
    pub fn new(kind: impl Into<String>, confidence: f64, frequency: f64) -> Result<Self> {
        policy::validate_confidence(confidence)?;
        Ok(Self {
            kind: kind.into(),
            confidence,
            frequency,
            evidence: None,
            metadata: Map::new(),
        })
    }

    /// Attach supporting evidence.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Attach an opaque metadata field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

// ---------------------------------------------------------------------------
// RawPattern (wire ingress)
// ---------------------------------------------------------------------------

/// Wire-shaped pattern as received from external detectors.
///
/// All core fields are optional so a malformed entry still deserializes
/// and [`RawPattern::validate`] can report exactly which field is
/// missing. Fields outside the known set are captured by the flatten map
/// and carried into the resulting pattern's metadata, never dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPattern {
    pub kind: Option<String>,
    pub confidence: Option<f64>,
    pub frequency: Option<f64>,
    pub evidence: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawPattern {
    /// Parse a raw JSON value into a wire pattern.
    ///
    /// A value that is not an object, or that carries wrongly-typed core
    /// fields, is reported as an empty batch item so batch callers get a
    /// per-item outcome instead of a parse abort.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|_| EnsembleError::EmptyBatchItem { field: "pattern" })
    }

    /// Validate into an engine [`Pattern`].
    ///
    /// A missing or blank `kind`, or a missing `confidence`, fails with
    /// [`EnsembleError::EmptyBatchItem`] naming the field. An absent
    /// frequency defaults to 1.0: a single observation.
    pub fn validate(self) -> Result<Pattern> {
        let kind = match self.kind {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ => return Err(EnsembleError::EmptyBatchItem { field: "kind" }),
        };

        let confidence = self
            .confidence
            .ok_or(EnsembleError::EmptyBatchItem { field: "confidence" })?;
        policy::validate_confidence(confidence)?;

        Ok(Pattern {
            kind,
            confidence,
            frequency: self.frequency.unwrap_or(1.0),
            evidence: self.evidence,
            metadata: self.extra,
        })
    }
}

// ---------------------------------------------------------------------------
// Insight
// ---------------------------------------------------------------------------

/// A natural-language, action-classified derivation of a single pattern.
///
/// Every insight traces back to exactly one source pattern; it never
/// aggregates several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Kind of the source pattern this insight derives from.
    pub kind: String,
    /// Short natural-language label.
    pub title: String,
    /// Longer natural-language explanation.
    pub description: String,
    /// Suggested next action. Present only when the action class is
    /// AUTO_APPLY or SUGGEST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Confidence copied from the source pattern.
    pub confidence: f64,
    pub action_class: ActionClass,
    /// Opaque metadata passed through from the source pattern.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// InsightContext
// ---------------------------------------------------------------------------

/// Optional side information that biases title and description phrasing.
///
/// Never consulted for the action-class decision, which is a pure
/// function of confidence alone. Absent context degrades generation to
/// role-agnostic phrasing; it is not an error.
#[derive(Debug, Clone, Default)]
pub struct InsightContext {
    /// Role whose voice the generated text should take.
    pub role: Option<Role>,
    /// Recent interaction summaries, most recent last. Available to
    /// custom style strategies; the default templates ignore it.
    pub recent_history: Vec<String>,
}

impl InsightContext {
    /// Context carrying just a role.
    pub fn for_role(role: Role) -> Self {
        Self {
            role: Some(role),
            recent_history: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
