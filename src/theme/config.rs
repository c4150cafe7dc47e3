//! Activation options for the theme provider.

use serde::{Deserialize, Serialize};

use super::preference::ThemePreference;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "popup-theme-value";

/// Options accepted by [`ThemeProvider::activate`](super::ThemeProvider::activate).
///
/// # Example
///
/// ```rust
/// use popup_theme::{ThemeConfig, ThemePreference};
///
/// let config = ThemeConfig::new()
///     .with_default_theme(ThemePreference::Dark)
///     .with_storage_key("settings-theme");
/// assert_eq!(config.storage_key, "settings-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Preference used when storage holds nothing under `storage_key`.
    pub default_theme: ThemePreference,
    /// Key the preference is persisted under.
    pub storage_key: String,
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_theme(mut self, theme: ThemePreference) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemePreference::System,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, ThemePreference::System);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: ThemeConfig = serde_json::from_str(r#"{"defaultTheme":"light"}"#).unwrap();
        assert_eq!(config.default_theme, ThemePreference::Light);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);

        let config: ThemeConfig = serde_json::from_str(r#"{"storageKey":"k"}"#).unwrap();
        assert_eq!(config.default_theme, ThemePreference::System);
        assert_eq!(config.storage_key, "k");
    }
}
