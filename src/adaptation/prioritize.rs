//! Insight prioritization: a total order for presentation and execution.

use crate::adaptation::types::Insight;

use std::cmp::Ordering;

/// Sort insights by (action class desc, confidence desc), stable.
///
/// Equal-key insights retain their original relative order, so the
/// output is deterministic for any input. Every element of the input
/// appears in the output exactly once.
pub fn prioritize(mut insights: Vec<Insight>) -> Vec<Insight> {
    // Confidence is validated at construction, so partial_cmp only fails
    // if a caller hand-built an insight with NaN; treat that as equal
    // and let the stable sort keep input order.
    insights.sort_by(|a, b| {
        b.action_class.cmp(&a.action_class).then_with(|| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        })
    });
    insights
}
