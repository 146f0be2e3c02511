//! Reflection builder: bounded remedial actions plus a deterministic
//! numeric seed for downstream similarity lookups.

use crate::roles::{self, Role};

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// Fixed dimensionality of the reflection seed vector.
pub const SEED_DIMENSIONS: usize = 8;

/// Maximum number of remedial actions per reflection.
const MAX_ACTIONS: usize = 3;

/// Separator byte between signals when hashing, so re-slicing or
/// reordering the input text always changes the digest.
const SIGNAL_SEPARATOR: u8 = 0x1f;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A bounded reflection over recent signals for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub role: Role,
    /// Suggested remedial actions: one per signal, at most three, in
    /// input order.
    pub actions: Vec<String>,
    /// Deterministic seed derived from the concatenated signal text.
    pub seed: [f32; SEED_DIMENSIONS],
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a reflection from signal strings.
///
/// Signals beyond the first three contribute to the seed but not to the
/// action list.
pub fn build_reflection(role: Role, signals: &[String]) -> Reflection {
    let title = &roles::context(role).title;

    let actions = signals
        .iter()
        .take(MAX_ACTIONS)
        .map(|signal| format!("{title} should address: {signal}"))
        .collect();

    Reflection {
        role,
        actions,
        seed: seed_from_signals(signals),
    }
}

/// Derive a fixed-length seed from the concatenated signal text.
///
/// SHA-256 over the separator-joined signals, split into eight
/// little-endian u32 words normalized to [0.0, 1.0]. Pure and
/// order-sensitive: permuting the signals changes the digest and with it
/// every component.
pub fn seed_from_signals(signals: &[String]) -> [f32; SEED_DIMENSIONS] {
    let mut hasher = Sha256::new();
    for (index, signal) in signals.iter().enumerate() {
        if index > 0 {
            hasher.update([SIGNAL_SEPARATOR]);
        }
        hasher.update(signal.as_bytes());
    }
    let digest = hasher.finalize();

    let mut seed = [0.0_f32; SEED_DIMENSIONS];
    for (component, chunk) in seed.iter_mut().zip(digest.chunks_exact(4)) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        *component = word as f32 / u32::MAX as f32;
    }
    seed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| (*text).to_string()).collect()
    }

    // --- actions ---

    #[test]
    fn one_action_per_signal_in_input_order() {
        let reflection = build_reflection(
            Role::Luna,
            &signals(&["missed journal entry", "late review"]),
        );
        assert_eq!(reflection.actions.len(), 2);
        assert_eq!(reflection.actions[0], "Luna should address: missed journal entry");
        assert_eq!(reflection.actions[1], "Luna should address: late review");
    }

    #[test]
    fn actions_are_capped_at_three() {
        let reflection = build_reflection(Role::Luna, &signals(&["a", "b", "c", "d", "e"]));
        assert_eq!(reflection.actions.len(), 3);
        assert!(reflection.actions[2].ends_with("c"));
    }

    #[test]
    fn no_signals_means_no_actions() {
        let reflection = build_reflection(Role::Orb, &[]);
        assert!(reflection.actions.is_empty());
        assert_eq!(reflection.seed.len(), SEED_DIMENSIONS);
    }

    // --- seed ---

    #[test]
    fn seed_is_deterministic_for_identical_input() {
        let input = signals(&["x", "y"]);
        assert_eq!(seed_from_signals(&input), seed_from_signals(&input));
    }

    #[test]
    fn seed_is_order_sensitive() {
        let forward = seed_from_signals(&signals(&["x", "y"]));
        let reversed = seed_from_signals(&signals(&["y", "x"]));
        assert_ne!(forward, reversed);
    }

    #[test]
    fn seed_distinguishes_concatenation_from_separate_signals() {
        // "ab" + "c" and "a" + "bc" concatenate identically; the
        // separator keeps their digests apart.
        let first = seed_from_signals(&signals(&["ab", "c"]));
        let second = seed_from_signals(&signals(&["a", "bc"]));
        assert_ne!(first, second);
    }

    #[test]
    fn seed_components_are_normalized() {
        let seed = seed_from_signals(&signals(&["some signal text"]));
        for component in seed {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn seed_ignores_role_and_depends_only_on_text() {
        let input = signals(&["shared signal"]);
        let luna = build_reflection(Role::Luna, &input);
        let forge = build_reflection(Role::Forge, &input);
        assert_eq!(luna.seed, forge.seed);
    }
}
