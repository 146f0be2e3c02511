//! Adaptation core for the Ensemble personal assistant platform.
//!
//! Six cooperating roles (Orb, Sol, Te, Mav, Luna, Forge) share one
//! adaptation engine: behavioral patterns observed about the user come
//! in, graded natural-language insights come out. Each insight carries
//! an action class that tells downstream consumers how autonomously
//! they may act on it.
//!
//! The crate is a side-effect-free library. Persistence, transport, and
//! UI layers sit outside it and call through the types re-exported
//! here; external failures reach this core only as absent input, never
//! as errors it must time out or retry.

pub mod adaptation;
pub mod error;
pub mod planning;
pub mod reflection;
pub mod roles;

pub use adaptation::{
    classify, disposition, prioritize, ActionClass, AdaptationConfig, Disposition, Insight,
    InsightContext, InsightGenerator, InsightStyle, Pattern, RawPattern, TemplateStyle,
};
pub use error::{EnsembleError, Result};
pub use planning::{build_action_plan, ActionItem, ActionPlan, ActionStatus};
pub use reflection::{build_reflection, Reflection, SEED_DIMENSIONS};
pub use roles::{Palette, Role, RoleContext};
