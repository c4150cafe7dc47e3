//! # Popup Theme - persisted dark/light/system theme for extension popups
//!
//! `popup-theme` keeps a user's theme preference in a key-value store,
//! resolves `system` against the host's color-scheme signal, and writes the
//! resulting `light` or `dark` class onto a document root.
//!
//! ## Quick Start
//!
//! ```rust
//! use popup_theme::{FixedSignal, MemoryStore, ModeToggle, ThemePreference, ThemeProvider};
//! use std::rc::Rc;
//!
//! let storage = Rc::new(MemoryStore::new());
//!
//! let theme = ThemeProvider::new(storage.clone())
//!     .with_signal(FixedSignal(false))
//!     .activate()
//!     .unwrap();
//!
//! let toggle = ModeToggle::new(&theme.scope()).unwrap();
//! toggle.select(ThemePreference::Dark).unwrap();
//! assert_eq!(theme.classes(), vec!["dark"]);
//!
//! // A fresh provider over the same storage sees the saved choice.
//! let reopened = ThemeProvider::new(storage)
//!     .with_signal(FixedSignal(false))
//!     .activate()
//!     .unwrap();
//! assert_eq!(reopened.theme(), ThemePreference::Dark);
//! ```
//!
//! ## Collaborators
//!
//! The provider talks to three host facilities, each behind a trait:
//!
//! - [`PreferenceStore`]: synchronous `get`/`set` of strings
//!   ([`MemoryStore`], [`FileStore`])
//! - [`AppearanceSignal`]: "does the platform prefer dark?"
//!   ([`SystemSignal`], [`FixedSignal`], any `Fn() -> bool`)
//! - [`StyleRoot`]: class tokens on the document root ([`ClassList`])
//!
//! The signal is read once per preference change. Hosts that want to follow
//! live platform changes call [`ThemeHandle::refresh_appearance`].

mod document;
mod error;
mod popup;
mod storage;
mod theme;

pub use document::{ClassList, StyleRoot};
pub use error::ThemeError;
pub use popup::{ModeOption, ModeToggle};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StorageError};
pub use theme::{
    reset_system_detector, set_system_detector, Appearance, AppearanceSignal, FixedSignal,
    SystemSignal, ThemeConfig, ThemeHandle, ThemePreference, ThemeProvider, ThemeScope,
    DEFAULT_STORAGE_KEY,
};
