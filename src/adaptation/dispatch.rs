//! Routing of classified insights to downstream consumers.

use crate::adaptation::policy::ActionClass;
use crate::adaptation::types::Insight;

use serde::{Deserialize, Serialize};

use std::fmt;

/// What a downstream consumer should do with an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Act without confirmation.
    Execute,
    /// Present to the user for approval.
    Prompt,
    /// Record silently for later review.
    Record,
    /// Discard.
    Drop,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Execute => write!(f, "execute"),
            Self::Prompt => write!(f, "prompt"),
            Self::Record => write!(f, "record"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// Map an insight's action class to its consumer disposition.
///
/// Total over [`ActionClass`]; consumers need no engine-internal types
/// beyond the insight itself to route it.
pub fn disposition(insight: &Insight) -> Disposition {
    match insight.action_class {
        ActionClass::AutoApply => Disposition::Execute,
        ActionClass::Suggest => Disposition::Prompt,
        ActionClass::LogOnly => Disposition::Record,
        ActionClass::Ignore => Disposition::Drop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptation::config::AdaptationConfig;
    use crate::adaptation::generator::InsightGenerator;
    use crate::adaptation::types::Pattern;

    fn insight_with_confidence(confidence: f64) -> Insight {
        let generator = InsightGenerator::new(AdaptationConfig::default());
        let pattern = Pattern::new("preference", confidence, 1.0).unwrap();
        generator.generate(&pattern, None).unwrap()
    }

    #[test]
    fn each_action_class_maps_to_its_disposition() {
        assert_eq!(disposition(&insight_with_confidence(0.95)), Disposition::Execute);
        assert_eq!(disposition(&insight_with_confidence(0.75)), Disposition::Prompt);
        assert_eq!(disposition(&insight_with_confidence(0.55)), Disposition::Record);
        assert_eq!(disposition(&insight_with_confidence(0.2)), Disposition::Drop);
    }

    #[test]
    fn boundary_confidence_routes_with_the_higher_class() {
        assert_eq!(disposition(&insight_with_confidence(0.9)), Disposition::Execute);
        assert_eq!(disposition(&insight_with_confidence(0.7)), Disposition::Prompt);
        assert_eq!(disposition(&insight_with_confidence(0.5)), Disposition::Record);
    }
}
