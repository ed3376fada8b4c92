//! Light/dark theme palettes applied through CSS custom properties

use serde::{Deserialize, Serialize};

/// localStorage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Custom property that identifies the active palette
pub const BACKGROUND_PROPERTY: &str = "--bg";

const DARK_BACKGROUND: &str = "#0b0f19";

const LIGHT_PALETTE: [(&str, &str); 5] = [
    ("--bg", "#ffffff"),
    ("--panel", "#f7f7f8"),
    ("--text", "#111827"),
    ("--muted", "#6b7280"),
    ("--primary", "#2563eb"),
];

const DARK_PALETTE: [(&str, &str); 5] = [
    ("--bg", DARK_BACKGROUND),
    ("--panel", "#121826"),
    ("--text", "#e5e7eb"),
    ("--muted", "#9ca3af"),
    ("--primary", "#3b82f6"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Infer the active theme from the current `--bg` value
    ///
    /// Only the dark background counts as dark; an unset or unknown value is
    /// treated as light.
    pub fn from_background(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case(DARK_BACKGROUND) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Custom properties and values making up this theme
    pub const fn palette(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
