//! Durable session record storage.
//! One key holding the serialized session user, read once at startup,
//! written on login and deleted on logout.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

use super::user::SessionUser;

/// Key under which the session record is persisted.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Minimal key-value persistence seam for the session record. Implementations
/// must not fail the caller: login/logout never error out, so store problems
/// are logged and swallowed behind this trait.
pub trait SessionStore: Send + Sync {
    /// Read the persisted record, if any. A record that cannot be decoded
    /// counts as absent.
    fn load(&self) -> Option<SessionUser>;
    fn save(&self, user: &SessionUser);
    fn clear(&self);
}

/// File-backed store keeping the single record as flat JSON under the data
/// root, e.g. `data/user.json`.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self { path: data_root.as_ref().join(format!("{}.json", SESSION_KEY)) }
    }

    fn try_load(&self) -> Result<Option<SessionUser>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn try_save(&self, user: &SessionUser) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string(user)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<SessionUser> {
        match self.try_load() {
            Ok(found) => found,
            Err(e) => {
                // Malformed or unreadable record hydrates as an anonymous session.
                warn!("session store unreadable at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, user: &SessionUser) {
        if let Err(e) = self.try_save(user) {
            warn!("session store write failed at {:?}: {}", self.path, e);
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("session store delete failed at {:?}: {}", self.path, e);
            }
        }
    }
}

/// In-memory store for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionUser>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionUser> {
        self.slot.lock().clone()
    }

    fn save(&self, user: &SessionUser) {
        *self.slot.lock() = Some(user.clone());
    }

    fn clear(&self) {
        *self.slot.lock() = None;
    }
}
