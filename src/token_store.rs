//! Durable client-local storage for the persisted bearer token.
//!
//! DESIGN
//! ======
//! There is exactly one token to remember, so durable storage is one small
//! file holding one token string. The trait seam lets tests (and embedders
//! that want ephemeral sessions) swap in an in-memory store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Errors from token persistence. These never fail a session operation; the
/// session store logs them and carries on with its in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("token store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage for the single persisted bearer token.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any. An absent or empty store is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the underlying storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the token cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the persisted token. Clearing an absent token succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when removal fails for reasons other than
    /// the token already being absent.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Token store backed by a plain file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with a token, as if a previous run had persisted it.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "token_store_test.rs"]
mod tests;
