//! Static role registry and context lookup.

use crate::error::{EnsembleError, Result};
use crate::roles::palette::{self, Palette};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The six fixed capability domains of the assistant platform.
///
/// Closed set with no dynamic registration. Variant order is the canonical
/// display order and must match [`CONTEXTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Orb,
    Sol,
    Te,
    Mav,
    Luna,
    Forge,
}

impl Role {
    /// All roles in canonical display order.
    pub const ALL: [Role; 6] = [
        Role::Orb,
        Role::Sol,
        Role::Te,
        Role::Mav,
        Role::Luna,
        Role::Forge,
    ];

    /// Lowercase wire token for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orb => "orb",
            Self::Sol => "sol",
            Self::Te => "te",
            Self::Mav => "mav",
            Self::Luna => "luna",
            Self::Forge => "forge",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EnsembleError;

    /// Parse a role token. There is no default role: an unrecognized
    /// token is an error, not a fallback.
    fn from_str(token: &str) -> Result<Self> {
        match token {
            "orb" => Ok(Self::Orb),
            "sol" => Ok(Self::Sol),
            "te" => Ok(Self::Te),
            "mav" => Ok(Self::Mav),
            "luna" => Ok(Self::Luna),
            "forge" => Ok(Self::Forge),
            _ => Err(EnsembleError::UnknownRole {
                token: token.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// RoleContext
// ---------------------------------------------------------------------------

/// Display metadata for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleContext {
    pub role: Role,
    /// Display name.
    pub title: String,
    /// One-line summary of the role's domain.
    pub description: String,
    /// Capability names in presentation order.
    pub capabilities: Vec<String>,
    pub palette: Palette,
}

impl RoleContext {
    /// Derive a context with a replaced title.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Derive a context with a replaced description.
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Derive a context with a replaced capability list.
    pub fn with_capabilities(&self, capabilities: Vec<String>) -> Self {
        Self {
            capabilities,
            ..self.clone()
        }
    }

    /// Derive a context with a replaced palette.
    pub fn with_palette(&self, palette: Palette) -> Self {
        Self {
            palette,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Static registry
// ---------------------------------------------------------------------------

fn capabilities(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Constant per-role metadata, indexed by `Role as usize`.
static CONTEXTS: LazyLock<[RoleContext; 6]> = LazyLock::new(|| {
    [
        RoleContext {
            role: Role::Orb,
            title: "Orb".to_string(),
            description: "Conversational inference: answers, summaries, and drafts".to_string(),
            capabilities: capabilities(&["chat", "summarize", "draft", "answer"]),
            palette: palette::ORB,
        },
        RoleContext {
            role: Role::Sol,
            title: "Sol".to_string(),
            description: "Day planning: schedules, reminders, and energy pacing".to_string(),
            capabilities: capabilities(&["plan_day", "schedule", "remind"]),
            palette: palette::SOL,
        },
        RoleContext {
            role: Role::Te,
            title: "Te".to_string(),
            description: "Action execution: running tasks and following through".to_string(),
            capabilities: capabilities(&["execute", "automate", "follow_up"]),
            palette: palette::TE,
        },
        RoleContext {
            role: Role::Mav,
            title: "Mav".to_string(),
            description: "Preference modeling: ranking and personalization".to_string(),
            capabilities: capabilities(&["model_preferences", "rank", "recommend"]),
            palette: palette::MAV,
        },
        RoleContext {
            role: Role::Luna,
            title: "Luna".to_string(),
            description: "Memory and reflection: recall, journaling, and review".to_string(),
            capabilities: capabilities(&["remember", "reflect", "journal"]),
            palette: palette::LUNA,
        },
        RoleContext {
            role: Role::Forge,
            title: "Forge".to_string(),
            description: "Identity and build: profile, configuration, and integrations".to_string(),
            capabilities: capabilities(&["build_profile", "configure", "integrate"]),
            palette: palette::FORGE,
        },
    ]
});

/// Look up the constant metadata for a role.
pub fn context(role: Role) -> &'static RoleContext {
    &CONTEXTS[role as usize]
}

/// Look up role metadata from an external string token.
///
/// This is the ingress path for layers that carry roles as strings; it
/// fails with [`EnsembleError::UnknownRole`] for tokens outside the
/// closed set.
pub fn context_for(token: &str) -> Result<&'static RoleContext> {
    let role = token.parse::<Role>()?;
    Ok(context(role))
}

/// Just the color subset of a role's context.
pub fn palette(role: Role) -> Palette {
    context(role).palette
}

/// The fixed six-element role order used wherever roles are iterated for
/// display.
pub fn list_roles() -> [Role; 6] {
    Role::ALL
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- ordering ---

    #[test]
    fn list_roles_returns_fixed_six_element_order() {
        let roles = list_roles();
        assert_eq!(
            roles,
            [Role::Orb, Role::Sol, Role::Te, Role::Mav, Role::Luna, Role::Forge]
        );
    }

    #[test]
    fn orb_is_position_zero() {
        assert_eq!(list_roles()[0], Role::Orb);
        assert_eq!(context(Role::Orb).role, Role::Orb);
    }

    #[test]
    fn contexts_table_order_matches_role_discriminants() {
        for role in Role::ALL {
            assert_eq!(context(role).role, role);
        }
    }

    // --- parsing ---

    #[test]
    fn every_role_round_trips_through_its_token() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_token_fails_with_unknown_role() {
        let error = context_for("bogus").unwrap_err();
        assert!(matches!(
            error,
            EnsembleError::UnknownRole { ref token } if token == "bogus"
        ));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Orb".parse::<Role>().is_err());
    }

    // --- metadata ---

    #[test]
    fn every_role_has_title_description_and_capabilities() {
        for role in Role::ALL {
            let context = context(role);
            assert!(!context.title.is_empty());
            assert!(!context.description.is_empty());
            assert!(!context.capabilities.is_empty());
        }
    }

    #[test]
    fn palette_accessor_matches_context_palette() {
        for role in Role::ALL {
            assert_eq!(palette(role), context(role).palette);
        }
    }

    #[test]
    fn accents_are_distinct_across_roles() {
        let mut accents: Vec<&str> = Role::ALL.iter().map(|role| palette(*role).accent).collect();
        accents.sort_unstable();
        accents.dedup();
        assert_eq!(accents.len(), Role::ALL.len());
    }

    // --- override construction ---

    #[test]
    fn with_title_produces_new_value_without_mutating_base() {
        let base = context(Role::Sol);
        let derived = base.with_title("Morning Sol");
        assert_eq!(derived.title, "Morning Sol");
        assert_eq!(derived.description, base.description);
        assert_eq!(context(Role::Sol).title, "Sol");
    }

    #[test]
    fn with_capabilities_replaces_only_capabilities() {
        let base = context(Role::Te);
        let derived = base.with_capabilities(vec!["execute".to_string()]);
        assert_eq!(derived.capabilities, vec!["execute".to_string()]);
        assert_eq!(derived.title, base.title);
        assert_eq!(context(Role::Te).capabilities.len(), 3);
    }
}
