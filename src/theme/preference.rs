//! Theme preference values and the appearance they resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The user's stored theme choice.
///
/// `System` defers to the host's dark-scheme signal at the moment the
/// appearance is applied. The textual form (`"dark"`, `"light"`, `"system"`)
/// is what gets written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    System,
}

impl ThemePreference {
    /// All preferences, in menu order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
            ThemePreference::System => "system",
        }
    }

    /// Resolves this preference to a concrete appearance.
    ///
    /// `prefers_dark` is only consulted for [`ThemePreference::System`].
    pub fn resolve(self, prefers_dark: impl FnOnce() -> bool) -> Appearance {
        match self {
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::Light => Appearance::Light,
            ThemePreference::System => {
                if prefers_dark() {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

impl From<Appearance> for ThemePreference {
    fn from(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => ThemePreference::Dark,
            Appearance::Light => ThemePreference::Light,
        }
    }
}

/// The concrete appearance applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Class tokens managed on the document root.
    pub const CLASS_NAMES: [&'static str; 2] = ["light", "dark"];

    /// The styling class token for this appearance.
    pub fn class_name(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
