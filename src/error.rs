//! Errors surfaced by the theme provider.

use thiserror::Error;

use crate::storage::StorageError;

/// Error returned by theme operations.
///
/// Storage faults are passed through unmodified; nothing is retried.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme capability was requested from a scope with no active provider.
    #[error("theme used outside a ThemeProvider")]
    OutsideProvider,

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A value that is not one of `dark`, `light` or `system`.
    #[error("invalid theme preference '{0}': expected dark, light or system")]
    InvalidPreference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_provider_display() {
        assert!(ThemeError::OutsideProvider.to_string().contains("outside"));
    }

    #[test]
    fn test_invalid_preference_display() {
        let msg = ThemeError::InvalidPreference("sepia".into()).to_string();
        assert!(msg.contains("sepia"));
        assert!(msg.contains("dark, light or system"));
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let inner = StorageError::QuotaExceeded {
            key: "theme".into(),
            limit: 4,
        };
        let expected = inner.to_string();
        let err = ThemeError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
