//! Adaptation engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the insight generator and batch coordinator.
///
/// All fields have sensible defaults for single-user use. Action-class
/// thresholds are deliberately not configurable; they are a stable
/// contract owned by the confidence policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdaptationConfig {
    /// Maximum characters of evidence quoted in a description.
    pub evidence_excerpt_max_chars: usize,
    /// Upper bound on in-flight generations in the concurrent batch path.
    pub max_concurrent_generations: usize,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            evidence_excerpt_max_chars: 120,
            max_concurrent_generations: 8,
        }
    }
}
