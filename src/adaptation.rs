//! Adaptation engine: behavioral patterns in, action-classified insights
//! out.
//!
//! The pipeline converts patterns observed about a user into
//! human-readable insights, classifies each into a graded action policy
//! from its confidence score, orders the results for presentation, and
//! fans batches through with per-item failure isolation. Everything here
//! is a pure transformation: no network, no storage, no clock.

mod batch;
mod config;
mod dispatch;
mod generator;
mod policy;
mod prioritize;
mod types;

pub use config::AdaptationConfig;
pub use dispatch::{disposition, Disposition};
pub use generator::{InsightGenerator, InsightStyle, TemplateStyle};
pub use policy::{
    classify, validate_confidence, ActionClass, AUTO_APPLY_THRESHOLD, LOG_ONLY_THRESHOLD,
    SUGGEST_THRESHOLD,
};
pub use prioritize::prioritize;
pub use types::{Insight, InsightContext, Pattern, RawPattern};
