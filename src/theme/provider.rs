//! The theme state manager.
//!
//! [`ThemeProvider`] reads the persisted preference once, applies it to the
//! document root, and hands out a [`ThemeHandle`]. The handle is the single
//! source of truth for the preference: clone it into every consumer that
//! needs to read or change the theme.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::config::ThemeConfig;
use super::preference::{Appearance, ThemePreference};
use super::signal::{AppearanceSignal, SystemSignal};
use crate::document::{ClassList, StyleRoot};
use crate::error::ThemeError;
use crate::storage::PreferenceStore;

/// Collaborators and options for activating a theme manager.
///
/// # Example
///
/// ```rust
/// use popup_theme::{FixedSignal, MemoryStore, ThemePreference, ThemeProvider};
///
/// let theme = ThemeProvider::new(MemoryStore::new())
///     .with_signal(FixedSignal(true))
///     .activate()
///     .unwrap();
///
/// assert_eq!(theme.theme(), ThemePreference::System);
/// assert_eq!(theme.classes(), vec!["dark"]);
///
/// theme.set_theme(ThemePreference::Light).unwrap();
/// assert_eq!(theme.classes(), vec!["light"]);
/// ```
pub struct ThemeProvider {
    config: ThemeConfig,
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn AppearanceSignal>,
    root: Box<dyn StyleRoot>,
}

impl ThemeProvider {
    /// Creates a provider over `store` with the default configuration, the
    /// OS color-scheme signal and an empty class list as the document root.
    pub fn new<S>(store: S) -> Self
    where
        S: PreferenceStore + 'static,
    {
        Self {
            config: ThemeConfig::default(),
            store: Box::new(store),
            signal: Box::new(SystemSignal),
            root: Box::new(ClassList::new()),
        }
    }

    pub fn with_config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_default_theme(mut self, theme: ThemePreference) -> Self {
        self.config.default_theme = theme;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn with_signal<H>(mut self, signal: H) -> Self
    where
        H: AppearanceSignal + 'static,
    {
        self.signal = Box::new(signal);
        self
    }

    pub fn with_root<R>(mut self, root: R) -> Self
    where
        R: StyleRoot + 'static,
    {
        self.root = Box::new(root);
        self
    }

    /// Reads the stored preference and applies it to the document root.
    ///
    /// An absent or empty stored value falls back to the configured default.
    /// A stored value outside `dark`/`light`/`system` is also replaced by the
    /// default, with a warning. Storage read faults are returned as is.
    pub fn activate(self) -> Result<ThemeHandle, ThemeError> {
        let ThemeProvider {
            config,
            store,
            signal,
            root,
        } = self;

        let preference = match store.get(&config.storage_key)? {
            None => config.default_theme,
            Some(raw) if raw.is_empty() => config.default_theme,
            Some(raw) => raw.parse::<ThemePreference>().unwrap_or_else(|_| {
                warn!(
                    key = %config.storage_key,
                    value = %raw,
                    fallback = %config.default_theme,
                    "stored theme is not dark, light or system; using default"
                );
                config.default_theme
            }),
        };
        debug!(key = %config.storage_key, %preference, "theme provider activated");

        let mut state = ThemeState {
            preference,
            applied: Appearance::Light,
            config,
            store,
            signal,
            root,
        };
        state.apply();

        Ok(ThemeHandle {
            state: Rc::new(RefCell::new(state)),
        })
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

struct ThemeState {
    preference: ThemePreference,
    applied: Appearance,
    config: ThemeConfig,
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn AppearanceSignal>,
    root: Box<dyn StyleRoot>,
}

impl ThemeState {
    /// Clears both appearance classes, then adds the resolved one.
    fn apply(&mut self) {
        for class in Appearance::CLASS_NAMES {
            self.root.remove(class);
        }
        let signal = &self.signal;
        let appearance = self.preference.resolve(|| signal.prefers_dark());
        self.root.add(appearance.class_name());
        self.applied = appearance;
        debug!(preference = %self.preference, %appearance, "applied theme class");
    }
}

/// Shared access to the current theme preference.
///
/// Clones share one state. Handles are single-threaded; the manager's
/// collaborators must not call back into the handle while it is working.
#[derive(Clone)]
pub struct ThemeHandle {
    state: Rc<RefCell<ThemeState>>,
}

impl ThemeHandle {
    /// The current preference.
    pub fn theme(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    /// Persists `theme`, then makes it current.
    ///
    /// The write happens first: if storage fails the error is returned and
    /// the in-memory preference and document classes are left unchanged.
    /// The document classes are only re-applied when the preference changes.
    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        state.store.set(&state.config.storage_key, theme.as_str())?;
        debug!(key = %state.config.storage_key, %theme, "persisted theme");

        if state.preference != theme {
            state.preference = theme;
            state.apply();
        }
        Ok(())
    }

    /// The appearance most recently applied to the document root.
    pub fn effective_appearance(&self) -> Appearance {
        self.state.borrow().applied
    }

    /// Re-resolves the current preference against the host signal and
    /// re-applies the document classes.
    ///
    /// Hosts that watch the platform color scheme call this when it changes;
    /// the manager never polls on its own.
    pub fn refresh_appearance(&self) -> Appearance {
        let mut state = self.state.borrow_mut();
        state.apply();
        state.applied
    }

    pub fn storage_key(&self) -> String {
        self.state.borrow().config.storage_key.clone()
    }

    pub fn default_theme(&self) -> ThemePreference {
        self.state.borrow().config.default_theme
    }

    /// Class tokens currently on the document root.
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().root.tokens()
    }

    /// A scope through which consumers reach this handle.
    pub fn scope(&self) -> ThemeScope {
        ThemeScope {
            handle: Some(self.clone()),
        }
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ThemeHandle")
            .field("preference", &state.preference)
            .field("applied", &state.applied)
            .field("config", &state.config)
            .finish_non_exhaustive()
    }
}

/// What a UI element was given to reach the theme, if anything.
///
/// Elements built under an active provider receive [`ThemeHandle::scope`];
/// elements built without one receive [`ThemeScope::detached`] and fail
/// loudly when they ask for the theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeScope {
    handle: Option<ThemeHandle>,
}

impl ThemeScope {
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// The provider's handle, or [`ThemeError::OutsideProvider`].
    pub fn theme(&self) -> Result<&ThemeHandle, ThemeError> {
        self.handle.as_ref().ok_or(ThemeError::OutsideProvider)
    }
}
