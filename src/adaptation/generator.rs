//! Insight generation: one pattern in, one titled, classified, actionable
//! insight out.

use crate::adaptation::config::AdaptationConfig;
use crate::adaptation::policy::{self, ActionClass};
use crate::adaptation::types::{Insight, InsightContext, Pattern};
use crate::error::Result;
use crate::roles;

use std::fmt;

// ---------------------------------------------------------------------------
// Recommendation table
// ---------------------------------------------------------------------------

/// Fixed mapping from pattern kind to recommended next action.
///
/// Kinds outside this table get [`GENERIC_RECOMMENDATION`] rather than
/// failing; detectors grow new kinds faster than this table does.
const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("preference", "Apply this preference to future responses."),
    ("recurring_topic", "Surface related material before the user asks."),
    (
        "schedule_drift",
        "Shift reminder timing to match the observed activity window.",
    ),
    ("correction", "Update the assumption the user corrected."),
    (
        "workflow_habit",
        "Offer to automate the repeated sequence of steps.",
    ),
    ("followup_gap", "Queue a follow-up for the dropped thread."),
];

/// Fallback recommendation for kinds outside the fixed table.
const GENERIC_RECOMMENDATION: &str = "Review this pattern and decide whether to act on it.";

// ---------------------------------------------------------------------------
// Style strategy
// ---------------------------------------------------------------------------

/// Formatting strategy for insight text.
///
/// The exact natural-language templates are product content, so they sit
/// behind this seam: the engine ships one deterministic template
/// implementation and tests or product layers may substitute their own.
/// Implementations must be deterministic for identical inputs.
pub trait InsightStyle: Send + Sync {
    /// Short label for the insight. `role_title` is present when the
    /// caller supplied a role-carrying context.
    fn title(&self, pattern: &Pattern, role_title: Option<&str>) -> String;

    /// Longer explanation of what was observed and how strongly.
    fn description(&self, pattern: &Pattern, excerpt_max_chars: usize) -> String;

    /// Suggested next action for this pattern kind.
    fn recommendation(&self, pattern: &Pattern) -> String;
}

/// Default template-based style.
///
/// Pure string formatting: no randomness and no wall-clock reads, so
/// identical inputs always produce byte-identical text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStyle;

impl InsightStyle for TemplateStyle {
    fn title(&self, pattern: &Pattern, role_title: Option<&str>) -> String {
        let label = humanize_kind(&pattern.kind);
        match role_title {
            Some(role_title) => format!("{role_title}: {label}"),
            None => format!("Observed: {label}"),
        }
    }

    fn description(&self, pattern: &Pattern, excerpt_max_chars: usize) -> String {
        let label = humanize_kind(&pattern.kind);
        let mut description = format!(
            "Detected {label} with signal frequency {:.1}.",
            pattern.frequency
        );
        if let Some(evidence) = &pattern.evidence {
            description.push_str(" Evidence: \"");
            description.push_str(&excerpt(evidence, excerpt_max_chars));
            description.push_str("\".");
        }
        description
    }

    fn recommendation(&self, pattern: &Pattern) -> String {
        RECOMMENDATIONS
            .iter()
            .find(|(kind, _)| *kind == pattern.kind)
            .map(|(_, text)| (*text).to_string())
            .unwrap_or_else(|| GENERIC_RECOMMENDATION.to_string())
    }
}

/// Replace underscores with spaces for display.
fn humanize_kind(kind: &str) -> String {
    kind.replace('_', " ")
}

/// Trim text to at most `max_chars` characters on a char boundary,
/// appending an ellipsis when anything was cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Turns patterns into insights using an injected style strategy.
///
/// Holds no mutable state, so a single generator is safe to share across
/// tasks and callers.
pub struct InsightGenerator {
    config: AdaptationConfig,
    style: Box<dyn InsightStyle>,
}

impl InsightGenerator {
    /// Create a generator with the default template style.
    pub fn new(config: AdaptationConfig) -> Self {
        Self {
            config,
            style: Box::new(TemplateStyle),
        }
    }

    /// Create a generator with a custom style strategy.
    pub fn with_style(config: AdaptationConfig, style: Box<dyn InsightStyle>) -> Self {
        Self { config, style }
    }

    pub fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    /// Generate a single insight from a pattern.
    ///
    /// Confidence is validated before any text is produced: a pattern
    /// with invalid confidence fails the whole generation and no partial
    /// insight is returned. The action class is a pure function of
    /// confidence; context influences phrasing only.
    pub fn generate(&self, pattern: &Pattern, context: Option<&InsightContext>) -> Result<Insight> {
        let action_class = policy::classify(pattern.confidence)?;

        let role_title = context
            .and_then(|context| context.role)
            .map(|role| roles::context(role).title.as_str());

        let title = self.style.title(pattern, role_title);
        let description = self
            .style
            .description(pattern, self.config.evidence_excerpt_max_chars);

        // Only classes that surface to the user or act autonomously carry
        // a recommendation.
        let recommendation = match action_class {
            ActionClass::AutoApply | ActionClass::Suggest => {
                Some(self.style.recommendation(pattern))
            }
            ActionClass::LogOnly | ActionClass::Ignore => None,
        };

        Ok(Insight {
            kind: pattern.kind.clone(),
            title,
            description,
            recommendation,
            confidence: pattern.confidence,
            action_class,
            metadata: pattern.metadata.clone(),
        })
    }
}

impl fmt::Debug for InsightGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
