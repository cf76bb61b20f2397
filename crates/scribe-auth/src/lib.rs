//! Scribe Authentication Capability
//!
//! The bridge sees only the [`Authenticator`] trait; implementations
//! swap without touching the command catalog. The stub variant ships
//! as the baseline — it is a development placeholder, not a security
//! boundary.

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub enum LoginOutcome {
    Granted { token: String },
    Denied { error: String },
}

pub trait Authenticator: Send + Sync {
    fn login(&self, username: &str, password: &str) -> LoginOutcome;
}

/// Single hardcoded credential pair, fresh token per grant.
pub struct StubAuthenticator {
    username: String,
    password: String,
}

impl StubAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

impl Authenticator for StubAuthenticator {
    fn login(&self, username: &str, password: &str) -> LoginOutcome {
        if username == self.username && password == self.password {
            tracing::info!(username, "Login granted");
            LoginOutcome::Granted {
                token: Uuid::new_v4().to_string(),
            }
        } else {
            tracing::warn!(username, "Login denied");
            LoginOutcome::Denied {
                error: "Invalid credentials".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_granted_with_token() {
        let auth = StubAuthenticator::default();
        match auth.login("admin", "admin") {
            LoginOutcome::Granted { token } => assert!(!token.is_empty()),
            LoginOutcome::Denied { .. } => panic!("expected grant"),
        }
    }

    #[test]
    fn test_any_other_pair_is_denied_with_error() {
        let auth = StubAuthenticator::default();
        for (u, p) in [("admin", "wrong"), ("root", "admin"), ("", "")] {
            match auth.login(u, p) {
                LoginOutcome::Denied { error } => assert!(!error.is_empty()),
                LoginOutcome::Granted { .. } => panic!("expected denial for {u}/{p}"),
            }
        }
    }

    #[test]
    fn test_tokens_are_not_reused() {
        let auth = StubAuthenticator::default();
        let first = match auth.login("admin", "admin") {
            LoginOutcome::Granted { token } => token,
            _ => unreachable!(),
        };
        let second = match auth.login("admin", "admin") {
            LoginOutcome::Granted { token } => token,
            _ => unreachable!(),
        };
        assert_ne!(first, second);
    }
}
