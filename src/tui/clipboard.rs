//! Clipboard abstraction for testing
//!
//! Form fields accept pasted text through a trait so tests can supply a mock
//! instead of the system clipboard.

use std::fmt;

/// Result type for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Clipboard error types
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// Clipboard initialization failed
    InitFailed(String),
    /// Read operation failed
    ReadFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::InitFailed(msg) => write!(f, "Clipboard init failed: {}", msg),
            ClipboardError::ReadFailed(msg) => write!(f, "Clipboard read failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Trait for clipboard reads (allows mocking in tests)
pub trait ClipboardProvider {
    /// Get text from clipboard
    fn get_text(&mut self) -> ClipboardResult<String>;
}

/// System clipboard implementation using arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Create new system clipboard handle
    pub fn new() -> ClipboardResult<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Ok(Self { inner: clipboard }),
            Err(e) => Err(ClipboardError::InitFailed(e.to_string())),
        }
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> ClipboardResult<String> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }
}

#[cfg(test)]
/// Mock clipboard implementation for testing
pub mod mock {
    use super::*;

    /// Mock clipboard with preset content
    pub struct MockClipboard {
        content: Option<String>,
    }

    impl MockClipboard {
        /// Create mock holding the given text
        pub fn with_text(text: &str) -> Self {
            Self {
                content: Some(text.to_string()),
            }
        }

        /// Create mock that always fails (simulates a headless environment)
        pub fn new_failing() -> Self {
            Self { content: None }
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn get_text(&mut self) -> ClipboardResult<String> {
            self.content.clone().ok_or_else(|| {
                ClipboardError::ReadFailed("Mock clipboard unavailable".to_string())
            })
        }
    }
}
