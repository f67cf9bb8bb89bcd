//! Session token storage
//!
//! The platform issues an opaque session token at login. Clients read it on
//! every authenticated request through a trait-based store that can be backed
//! by a file, by memory, or by a mock in tests.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default location of the persisted session token
pub const DEFAULT_TOKEN_PATH: &str = "./app_data/token";

/// Trait for session token storage (allows mocking in tests)
pub trait SessionStore: Send + Sync {
    /// Get the stored token, if any
    fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous one
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token
    fn clear(&self) -> Result<()>;
}

/// File-backed session store
///
/// Persists the token as a single plain-text file so a session survives
/// application restarts. A missing or empty file means no session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_PATH)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        let token = data.trim();

        if token.is_empty() {
            return None;
        }

        Some(token.to_string())
    }

    fn set(&self, token: &str) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Session(format!("Failed to create token directory: {}", e)))?;
        }

        std::fs::write(&self.path, token)
            .map_err(|e| Error::Session(format!("Failed to write token: {}", e)))?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Session(format!("Failed to remove token: {}", e))),
        }
    }
}

/// In-memory session store
///
/// Holds the token for the lifetime of the process. Used by embedders that
/// manage persistence themselves, and by tests.
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    /// Create a store pre-loaded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| Error::Session("Token lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| Error::Session("Token lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
