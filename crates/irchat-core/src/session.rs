use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Key under which the session identifier is persisted.
pub const SESSION_KEY: &str = "session_id";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read session store: {0}")]
    Read(String),

    #[error("failed to write session store: {0}")]
    Write(String),
}

/// Key-value persistence that survives reloads (browser storage, a file, ...)
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Client-generated token sent with every request so the backend can
/// correlate a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Read the stored identifier, creating and persisting one if absent.
    pub fn bootstrap<S>(store: &mut S) -> Result<Self, StoreError>
    where
        S: SessionStore + ?Sized,
    {
        Self::bootstrap_with(store, || Self::generate().0)
    }

    /// Like [`SessionId::bootstrap`], with the generator supplied by the caller.
    /// `generate` is only invoked when the store holds no identifier.
    pub fn bootstrap_with<S, F>(store: &mut S, generate: F) -> Result<Self, StoreError>
    where
        S: SessionStore + ?Sized,
        F: FnOnce() -> String,
    {
        match store.get(SESSION_KEY)? {
            Some(stored) if !stored.is_empty() => {
                log::debug!("Reusing stored session {}", stored);
                Ok(Self(stored))
            }
            _ => {
                let id = generate();
                store.set(SESSION_KEY, &id)?;
                log::debug!("Created session {}", id);
                Ok(Self(id))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory store, mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
