//! The popup's theme menu.

use crate::error::ThemeError;
use crate::theme::{Appearance, ThemeHandle, ThemePreference, ThemeScope};

/// One entry in the theme menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOption {
    pub preference: ThemePreference,
    pub label: &'static str,
    pub selected: bool,
}

/// Menu offering Light, Dark and System, backed by the provider's handle.
///
/// Must be built inside an active provider scope.
#[derive(Debug, Clone)]
pub struct ModeToggle {
    theme: ThemeHandle,
}

impl ModeToggle {
    pub fn new(scope: &ThemeScope) -> Result<Self, ThemeError> {
        Ok(Self {
            theme: scope.theme()?.clone(),
        })
    }

    /// Menu entries in display order, with the current preference marked.
    pub fn options(&self) -> Vec<ModeOption> {
        let current = self.theme.theme();
        ThemePreference::ALL
            .into_iter()
            .map(|preference| ModeOption {
                preference,
                label: label(preference),
                selected: preference == current,
            })
            .collect()
    }

    pub fn select(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.theme.set_theme(preference)
    }

    /// Which icon the trigger button shows: sun for light, moon for dark.
    pub fn trigger_appearance(&self) -> Appearance {
        self.theme.effective_appearance()
    }
}

fn label(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
        ThemePreference::System => "System",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::theme::{FixedSignal, ThemeProvider};

    fn handle() -> ThemeHandle {
        ThemeProvider::new(MemoryStore::new())
            .with_signal(FixedSignal(true))
            .activate()
            .unwrap()
    }

    #[test]
    fn test_options_order_and_selection() {
        let toggle = ModeToggle::new(&handle().scope()).unwrap();
        let options = toggle.options();
        let labels: Vec<_> = options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Light", "Dark", "System"]);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].preference, ThemePreference::System);
    }

    #[test]
    fn test_select_updates_shared_handle() {
        let theme = handle();
        let toggle = ModeToggle::new(&theme.scope()).unwrap();
        toggle.select(ThemePreference::Light).unwrap();
        assert_eq!(theme.theme(), ThemePreference::Light);
        assert_eq!(toggle.trigger_appearance(), Appearance::Light);
        assert!(toggle.options()[0].selected);
    }

    #[test]
    fn test_outside_provider_fails() {
        let err = ModeToggle::new(&ThemeScope::detached()).unwrap_err();
        assert!(matches!(err, ThemeError::OutsideProvider));
    }
}
