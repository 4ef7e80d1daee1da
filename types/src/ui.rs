//! UI option types shared by the engine (state ownership) and the tui
//! (palette selection). No ratatui dependency.

use serde::{Deserialize, Serialize};

/// Color theme. The flag is the only state persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Config-file spelling (`theme = "dark"` / `"light"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse the config-file spelling. Unknown values are `None`; the caller
    /// falls back to the default.
    #[must_use]
    pub fn from_str_opt(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Render options resolved from session state, passed to the tui per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_config_spelling_round_trips() {
        assert_eq!(Theme::from_str_opt("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str_opt(" Light "), Some(Theme::Light));
        assert_eq!(Theme::from_str_opt("solarized"), None);
        assert_eq!(Theme::from_str_opt(Theme::Light.as_str()), Some(Theme::Light));
    }
}
