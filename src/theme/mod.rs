//! Theme preference state and its application to the document.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: dark, light or system
//! - [`Appearance`]: the concrete light/dark value a preference resolves to
//! - [`AppearanceSignal`]: the host's "prefers dark" query, with
//!   [`SystemSignal`] (OS detection) and [`FixedSignal`]
//! - [`ThemeConfig`]: default preference and storage key
//! - [`ThemeProvider`] / [`ThemeHandle`]: the state manager and the shared
//!   handle consumers receive
//! - [`ThemeScope`]: how a consumer reaches the handle, or learns it has none

mod config;
mod preference;
mod provider;
mod signal;

pub use config::{ThemeConfig, DEFAULT_STORAGE_KEY};
pub use preference::{Appearance, ThemePreference};
pub use provider::{ThemeHandle, ThemeProvider, ThemeScope};
pub use signal::{
    reset_system_detector, set_system_detector, AppearanceSignal, FixedSignal, SystemSignal,
};
