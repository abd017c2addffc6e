// Keep the provider surface a plain trait so a database-backed directory can
// substitute for the fixed allow-list without touching the session machinery.

use super::user::{Role, SessionUser};

/// One entry of the credential directory. The password lives only here; the
/// session record handed out after verification never carries it.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
}

pub trait CredentialProvider: Send + Sync {
    /// Exact-match verification of an email/password pair. Wrong credentials
    /// are a normal outcome, not an error; unknown email and wrong password
    /// are indistinguishable to the caller.
    fn verify(&self, email: &str, password: &str) -> Option<SessionUser>;
}

/// Fixed in-memory allow-list standing in for an authentication backend.
pub struct AllowListDirectory {
    entries: Vec<Credential>,
}

impl AllowListDirectory {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// The two studio accounts used by the demo deployment.
    pub fn studio_accounts() -> Self {
        Self::new(vec![
            Credential {
                id: "1",
                email: "admin@gamestudio.com",
                password: "admin123",
                role: Role::Admin,
                name: "Admin User",
            },
            Credential {
                id: "2",
                email: "member@gamestudio.com",
                password: "member123",
                role: Role::Member,
                name: "Team Member",
            },
        ])
    }
}

impl CredentialProvider for AllowListDirectory {
    fn verify(&self, email: &str, password: &str) -> Option<SessionUser> {
        self.entries
            .iter()
            .find(|c| c.email == email && c.password == password)
            .map(|c| SessionUser {
                id: c.id.to_string(),
                email: c.email.to_string(),
                role: c.role,
                name: c.name.to_string(),
            })
    }
}
