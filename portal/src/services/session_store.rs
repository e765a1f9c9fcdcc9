//! # Persisted Session Store
//!
//! Flat key/value string storage for the session credentials, plus the typed
//! loader used once at startup.
//!
//! Two entries are kept:
//!
//! | Key     | Value                          |
//! |---------|--------------------------------|
//! | `token` | bearer token                   |
//! | `user`  | JSON-serialized `UserProfile`  |
//!
//! [`FileSessionStore`] keeps them in a small JSON object file next to the
//! binary; [`MemorySessionStore`] is used by tests and ephemeral runs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use shared::UserProfile;

use crate::auth::Session;
use crate::core::error::{AppError, Result};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key/value string store for persisted client state.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// JSON-file backed store.
///
/// The file is read once on open and rewritten in full (temp file + rename)
/// on every change. The in-memory map only changes once the write succeeded.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing or unreadable file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(entries) => {
                    tracing::debug!(path = %path.display(), keys = entries.len(), "Loaded session file");
                    entries
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Session file is not a string map, ignoring it");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
                HashMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.flush(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.flush(&updated)?;
        *entries = updated;
        Ok(())
    }
}

/// Restore a persisted session.
///
/// Returns `Some` only when both entries exist and the profile parses. A
/// profile that does not parse clears both entries; the caller just sees
/// `None`.
pub fn load_session(store: &dyn SessionStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let user = store.get(USER_KEY);

    let (token, user) = match (token, user) {
        (Some(token), Some(user)) => (token, user),
        _ => return None,
    };

    match serde_json::from_str::<UserProfile>(&user) {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Restored persisted session");
            Some(Session { token, user })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Persisted user profile is corrupt, discarding session");
            if let Err(e) = clear_session(store) {
                tracing::error!(error = %e, "Failed to clear corrupt session");
            }
            None
        }
    }
}

/// Persist the token and serialized profile.
///
/// If the profile cannot be written the previous token entry is restored.
pub fn persist_session(store: &dyn SessionStore, session: &Session) -> Result<()> {
    let user = serde_json::to_string(&session.user).map_err(|e| AppError::Storage(e.to_string()))?;
    let previous_token = store.get(TOKEN_KEY);
    store.set(TOKEN_KEY, &session.token)?;

    if let Err(e) = store.set(USER_KEY, &user) {
        let rollback = match &previous_token {
            Some(token) => store.set(TOKEN_KEY, token),
            None => store.remove(TOKEN_KEY),
        };
        if let Err(rollback_err) = rollback {
            tracing::error!(error = %rollback_err, "Failed to roll back session token");
        }
        return Err(e);
    }
    Ok(())
}

/// Remove both session entries.
pub fn clear_session(store: &dyn SessionStore) -> Result<()> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)
}
