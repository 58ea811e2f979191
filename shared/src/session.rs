//! Bearer-token session.
//!
//! The session is an explicit value handed to whoever needs authorization
//! state; persistence is delegated to a `TokenStore`. Token presence is the
//! only signal used: the token itself is never inspected.

use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("failed to persist session token: {0}")]
    Persist(String),
}

/// Persistent storage for the bearer token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), SessionError>;
    fn clear(&self);
}

/// Process-local token store, used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| SessionError::Persist(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Shared handle to the current session.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session that forgets everything on drop.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// Current token, read from the store on every call.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)?;
        log::info!("session established");
        Ok(())
    }

    pub fn logout(&self) {
        self.store.clear();
        log::info!("session cleared");
    }
}
