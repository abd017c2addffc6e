//! Session manager integration tests: allow-list login, durable hydration,
//! logout idempotence and the documented concurrent-login behavior.

use std::sync::Arc;
use std::time::Duration;

use studiosite::identity::{
    AllowListDirectory, FileSessionStore, MemorySessionStore, Role, SessionManager, SessionStore,
};

const DELAY: Duration = Duration::from_millis(10);

fn manager_with(store: Arc<dyn SessionStore>) -> SessionManager {
    SessionManager::new(Arc::new(AllowListDirectory::studio_accounts()), store).with_login_delay(DELAY)
}

fn manager() -> SessionManager {
    manager_with(Arc::new(MemorySessionStore::new()))
}

#[tokio::test]
async fn login_with_known_credentials_creates_a_full_session() {
    let sessions = manager();
    assert!(sessions.current_user().is_none());

    assert!(sessions.login("admin@gamestudio.com", "admin123").await);

    let user = sessions.current_user().expect("session after login");
    assert_eq!(user.email, "admin@gamestudio.com");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Admin User");

    // The stored record carries exactly id/email/role/name; the password is stripped.
    let json = serde_json::to_value(&user).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys.len(), 4);
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn login_with_unknown_credentials_changes_nothing() {
    let sessions = manager();

    // No session existed: none is created.
    assert!(!sessions.login("admin@gamestudio.com", "wrong").await);
    assert!(sessions.current_user().is_none());

    // A session existed: it stays untouched.
    assert!(sessions.login("admin@gamestudio.com", "admin123").await);
    assert!(!sessions.login("member@gamestudio.com", "nope").await);
    let user = sessions.current_user().expect("session survives failed login");
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn logout_always_clears_and_is_idempotent() {
    let sessions = manager();

    // Logging out while anonymous is a no-op.
    sessions.logout();
    assert!(sessions.current_user().is_none());

    assert!(sessions.login("member@gamestudio.com", "member123").await);
    sessions.logout();
    assert!(sessions.current_user().is_none());
    sessions.logout();
    assert!(sessions.current_user().is_none());
}

#[tokio::test]
async fn session_survives_a_restart_via_the_durable_store() {
    let tmp = tempfile::tempdir().unwrap();

    let before = {
        let sessions = manager_with(Arc::new(FileSessionStore::new(tmp.path())));
        assert!(sessions.login("admin@gamestudio.com", "admin123").await);
        sessions.current_user().unwrap()
    };

    // New process, same data root: the session hydrates from the store.
    let restarted = manager_with(Arc::new(FileSessionStore::new(tmp.path())));
    assert_eq!(restarted.current_user(), Some(before));

    // Logout deletes the durable record too.
    restarted.logout();
    let again = manager_with(Arc::new(FileSessionStore::new(tmp.path())));
    assert!(again.current_user().is_none());
}

#[tokio::test]
async fn is_loading_tracks_the_in_flight_window() {
    let sessions = Arc::new(
        manager_with(Arc::new(MemorySessionStore::new())).with_login_delay(Duration::from_millis(200)),
    );
    assert!(!sessions.is_loading());

    let task = {
        let sessions = sessions.clone();
        tokio::spawn(async move { sessions.login("admin@gamestudio.com", "admin123").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(sessions.is_loading());

    assert!(task.await.unwrap());
    assert!(!sessions.is_loading());
}

#[tokio::test]
async fn overlapping_logins_both_complete_and_one_wins() {
    let sessions = Arc::new(manager());
    let (a, b) = tokio::join!(
        sessions.login("admin@gamestudio.com", "admin123"),
        sessions.login("member@gamestudio.com", "member123"),
    );
    assert!(a && b);

    // Whichever call resolved last owns the stored session; either way the
    // session is fully populated from the allow-list.
    let user = sessions.current_user().expect("one of the two sessions");
    assert!(user.role == Role::Admin || user.role == Role::Member);
    assert!(!sessions.is_loading());
}

#[tokio::test]
async fn end_to_end_scenario() {
    let sessions = manager();

    assert!(sessions.login("admin@gamestudio.com", "admin123").await);
    assert_eq!(sessions.current_user().unwrap().role, Role::Admin);

    assert!(!sessions.login("admin@gamestudio.com", "wrong").await);
    assert_eq!(sessions.current_user().unwrap().role, Role::Admin);

    sessions.logout();
    assert!(sessions.current_user().is_none());

    assert!(sessions.login("member@gamestudio.com", "member123").await);
    assert_eq!(sessions.current_user().unwrap().role, Role::Member);
}
