//! Core error types for tabview-core
//!
//! This module provides the error type shared by the tab view, its bar
//! and the configuration loader.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::tab::TabItemId;

/// Errors that can occur while managing a tab view.
///
/// A failed operation never leaves the view in a partially mutated
/// state: selection and ordering invariants hold after every error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tab item with the specified ID is not attached to the view.
    #[error("tab not found: {0}")]
    TabNotFound(TabItemId),

    /// Positional access past the end of the tab list.
    #[error("tab index {index} out of range (len {len})")]
    TabIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of tabs at the time of the request
        len: usize,
    },

    /// A tab item with the same ID is already attached.
    #[error("duplicate tab id: {0}")]
    DuplicateTab(TabItemId),

    /// Disabled tab items cannot become the selection.
    #[error("tab is disabled: {0}")]
    TabDisabled(TabItemId),

    /// Event system error.
    ///
    /// This occurs when the event bus cannot deliver a notification,
    /// typically because no receiver is subscribed.
    #[error("event error: {0}")]
    EventError(String),

    /// Underlying IO error bubbled up from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("invalid config at {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No platform configuration directory is available.
    #[error("could not determine configuration directory")]
    NoConfigDir,
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_not_found_error_display() {
        let err = CoreError::TabNotFound(42);
        assert_eq!(err.to_string(), "tab not found: 42");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = CoreError::TabIndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "tab index 5 out of range (len 3)");
    }

    #[test]
    fn test_disabled_display() {
        let err = CoreError::TabDisabled(7);
        assert_eq!(err.to_string(), "tab is disabled: 7");
    }

    #[test]
    fn test_duplicate_display() {
        let err = CoreError::DuplicateTab(1);
        assert_eq!(err.to_string(), "duplicate tab id: 1");
    }

    #[test]
    fn test_event_error_display() {
        let err = CoreError::EventError("channel closed".to_string());
        assert_eq!(err.to_string(), "event error: channel closed");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
