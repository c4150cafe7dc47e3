//! Host appearance signal: does the platform prefer a dark color scheme?

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// A synchronous query for the host's dark-scheme preference.
///
/// The manager polls this once per preference change; it never subscribes.
pub trait AppearanceSignal {
    fn prefers_dark(&self) -> bool;
}

impl<F> AppearanceSignal for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// A signal that always reports the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSignal(pub bool);

impl AppearanceSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// The operating system's color-scheme setting.
///
/// Queries go through the process-wide detector, which defaults to the OS
/// and can be replaced with [`set_system_detector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSignal;

impl AppearanceSignal for SystemSignal {
    fn prefers_dark(&self) -> bool {
        let detector = SYSTEM_DETECTOR
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (*detector)()
    }
}

type SystemDetector = fn() -> bool;

static SYSTEM_DETECTOR: Lazy<Mutex<SystemDetector>> = Lazy::new(|| Mutex::new(os_prefers_dark));

/// Overrides the detector behind [`SystemSignal`].
///
/// Useful in tests or on hosts where the OS query is unavailable.
pub fn set_system_detector(detector: SystemDetector) {
    let mut guard = SYSTEM_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_system_detector() {
    set_system_detector(os_prefers_dark);
}

fn os_prefers_dark() -> bool {
    match detect_os_theme() {
        OsThemeMode::Dark => true,
        OsThemeMode::Light => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::cell::Cell;

    #[test]
    fn test_fixed_signal() {
        assert!(FixedSignal(true).prefers_dark());
        assert!(!FixedSignal(false).prefers_dark());
    }

    #[test]
    fn test_closure_signal_is_polled_each_time() {
        let calls = Cell::new(0);
        let signal = || {
            calls.set(calls.get() + 1);
            calls.get() % 2 == 1
        };
        assert!(signal.prefers_dark());
        assert!(!signal.prefers_dark());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    #[serial]
    fn test_system_signal_uses_detector() {
        set_system_detector(|| true);
        assert!(SystemSignal.prefers_dark());

        set_system_detector(|| false);
        assert!(!SystemSignal.prefers_dark());

        reset_system_detector();
    }
}
