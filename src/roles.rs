//! Role registry: the six capability domains, their display metadata,
//! and color palettes.
//!
//! Role metadata is process-wide constant state, built once behind a
//! [`std::sync::LazyLock`] and exposed only through accessor functions.
//! Callers that need a variant of a role's context derive one through the
//! override constructors on [`RoleContext`] without touching the shared
//! base.

mod palette;
mod registry;

pub use palette::Palette;
pub use registry::{context, context_for, list_roles, palette, Role, RoleContext};
