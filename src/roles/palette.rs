//! Color palettes for the six roles.

use serde::Serialize;

/// Five color tokens that define a role's visual identity.
///
/// Tokens are design-time constants, so the fields borrow static strings
/// and the whole palette is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Card and panel fill.
    pub surface: &'static str,
    /// Page background behind surfaces.
    pub background: &'static str,
    /// High-emphasis text.
    pub text_primary: &'static str,
    /// Secondary and label text.
    pub text_muted: &'static str,
    /// Role signature color for controls and highlights.
    pub accent: &'static str,
}

pub(crate) const ORB: Palette = Palette {
    surface: "#1e1b2e",
    background: "#13111c",
    text_primary: "#ece9f7",
    text_muted: "#8d87a8",
    accent: "#8b5cf6",
};

pub(crate) const SOL: Palette = Palette {
    surface: "#2b2415",
    background: "#1c180e",
    text_primary: "#f7f1e3",
    text_muted: "#a89a78",
    accent: "#f59e0b",
};

pub(crate) const TE: Palette = Palette {
    surface: "#122b22",
    background: "#0c1c16",
    text_primary: "#e4f5ee",
    text_muted: "#7fa795",
    accent: "#10b981",
};

pub(crate) const MAV: Palette = Palette {
    surface: "#2d1620",
    background: "#1d0e15",
    text_primary: "#f9e8ee",
    text_muted: "#aa8191",
    accent: "#f43f5e",
};

pub(crate) const LUNA: Palette = Palette {
    surface: "#132534",
    background: "#0c1822",
    text_primary: "#e6f2fb",
    text_muted: "#7f9cb2",
    accent: "#38bdf8",
};

pub(crate) const FORGE: Palette = Palette {
    surface: "#2c1d12",
    background: "#1d130b",
    text_primary: "#f8ede4",
    text_muted: "#a98e78",
    accent: "#f97316",
};
