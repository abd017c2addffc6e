use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::tprintln;

use super::provider::CredentialProvider;
use super::store::SessionStore;
use super::user::SessionUser;

/// Stand-in for the network round trip of a real authentication backend.
const LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Owner of the single current session.
///
/// Two states: Anonymous and Authenticated. A successful `login` moves to
/// Authenticated, `logout` moves back; a failed `login` is a self-loop that
/// leaves any existing session untouched. The record is hydrated once at
/// construction from the durable store and every consumer receives a
/// read-only snapshot via `current_user`.
///
/// Overlapping `login` calls are not serialized: both run to completion and
/// the last writer wins the stored session. `is_loading` exists so callers
/// can suppress duplicate submissions, not to guard that race.
pub struct SessionManager {
    directory: Arc<dyn CredentialProvider>,
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<SessionUser>>,
    in_flight: AtomicUsize,
    login_delay: Duration,
}

impl SessionManager {
    pub fn new(directory: Arc<dyn CredentialProvider>, store: Arc<dyn SessionStore>) -> Self {
        let current = store.load();
        if let Some(user) = &current {
            tprintln!("session.hydrate user={} role={:?}", user.email, user.role);
        }
        Self {
            directory,
            store,
            current: RwLock::new(current),
            in_flight: AtomicUsize::new(0),
            login_delay: LOGIN_DELAY,
        }
    }

    /// Shorten the artificial login latency; used by tests.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Verify a credential pair against the directory and, on success, make
    /// the resulting session current and durable. Wrong credentials return
    /// `false` and change nothing; this operation never errors out.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.login_delay).await;

        let outcome = match self.directory.verify(email, password) {
            Some(user) => {
                *self.current.write() = Some(user.clone());
                self.store.save(&user);
                tprintln!("session.login user={} role={:?}", user.email, user.role);
                true
            }
            None => {
                tprintln!("session.login rejected email={}", email);
                false
            }
        };
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }

    /// Drop the current session and its durable record. Safe to call in any
    /// state; logging out twice is a no-op.
    pub fn logout(&self) {
        let had = self.current.write().take();
        self.store.clear();
        if let Some(user) = had {
            tprintln!("session.logout user={}", user.email);
        }
    }

    /// Read-only snapshot of the current session.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.current.read().clone()
    }

    /// True only while a `login` call is in flight. A UX signal for
    /// suppressing duplicate submissions, not a correctness mechanism.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}
