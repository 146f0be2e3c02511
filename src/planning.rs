//! Action-plan builder for role-scoped goal lists.

use crate::roles::{self, Role};

use serde::{Deserialize, Serialize};

use std::fmt;

/// Minutes of estimated work added per successive action item.
const ETA_STEP_MINUTES: u32 = 15;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Lifecycle status of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Queued,
    InFlight,
    Done,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::InFlight => write!(f, "in_flight"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A single step in a role's action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Role responsible for carrying this item out.
    pub owner: Role,
    pub summary: String,
    /// Estimated completion time; strictly increasing down the plan.
    pub eta_minutes: u32,
    pub status: ActionStatus,
}

/// An ordered plan of action items owned by one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub role: Role,
    pub items: Vec<ActionItem>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build an ordered action plan from goal strings.
///
/// The first goal-derived item starts in flight and the rest are queued;
/// estimated completion times increase strictly down the list. An empty
/// goal list produces a single queued calibration item, so the plan is
/// never empty.
pub fn build_action_plan(role: Role, goals: &[String]) -> ActionPlan {
    if goals.is_empty() {
        let title = &roles::context(role).title;
        tracing::debug!(%role, "no goals supplied; emitting calibration plan");
        return ActionPlan {
            role,
            items: vec![ActionItem {
                owner: role,
                summary: format!("Calibrate {title} priorities with the user"),
                eta_minutes: ETA_STEP_MINUTES,
                status: ActionStatus::Queued,
            }],
        };
    }

    let items = goals
        .iter()
        .enumerate()
        .map(|(index, goal)| ActionItem {
            owner: role,
            summary: goal.clone(),
            eta_minutes: (index as u32 + 1) * ETA_STEP_MINUTES,
            status: if index == 0 {
                ActionStatus::InFlight
            } else {
                ActionStatus::Queued
            },
        })
        .collect();

    ActionPlan { role, items }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| (*text).to_string()).collect()
    }

    #[test]
    fn empty_goals_produce_one_queued_calibration_item() {
        let plan = build_action_plan(Role::Sol, &[]);
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.items[0].status, ActionStatus::Queued);
        assert!(plan.items[0].summary.contains("Sol"));
    }

    #[test]
    fn first_goal_item_starts_in_flight_and_rest_are_queued() {
        let plan = build_action_plan(Role::Te, &goals(&["ship report", "file expenses"]));
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[0].status, ActionStatus::InFlight);
        assert_eq!(plan.items[1].status, ActionStatus::Queued);
    }

    #[test]
    fn eta_minutes_increase_strictly() {
        let plan = build_action_plan(Role::Te, &goals(&["a", "b", "c", "d"]));
        for window in plan.items.windows(2) {
            assert!(window[0].eta_minutes < window[1].eta_minutes);
        }
    }

    #[test]
    fn items_preserve_goal_order_and_owner() {
        let plan = build_action_plan(Role::Forge, &goals(&["first", "second"]));
        assert_eq!(plan.items[0].summary, "first");
        assert_eq!(plan.items[1].summary, "second");
        assert!(plan.items.iter().all(|item| item.owner == Role::Forge));
    }

    #[test]
    fn plan_is_never_empty() {
        for role in Role::ALL {
            assert!(!build_action_plan(role, &[]).items.is_empty());
        }
    }
}
