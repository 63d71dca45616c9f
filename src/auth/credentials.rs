//! # Credential Store
//!
//! Fixed username/password list. Passwords are compared in constant time.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};

/// An authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone)]
struct Credential {
    username: String,
    password: String,
    role: String,
}

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The list of accepted logins
#[derive(Debug, Clone)]
pub struct CredentialStore {
    credentials: Vec<Credential>,
}

impl CredentialStore {
    /// Empty store; every login fails
    pub fn empty() -> Self {
        Self {
            credentials: Vec::new(),
        }
    }

    /// The built-in dashboard accounts
    pub fn builtin() -> Self {
        Self::empty()
            .with_user("admin", "admin123", "admin")
            .with_user("user", "user123", "user")
            .with_user("demo", "demo123", "viewer")
    }

    pub fn with_user(mut self, username: &str, password: &str, role: &str) -> Self {
        self.credentials.push(Credential {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        });
        self
    }

    /// Check a username/password pair.
    ///
    /// Every entry is compared so timing does not reveal which part
    /// mismatched.
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult<Principal> {
        let mut found = None;

        for cred in &self.credentials {
            let user_ok = cred.username.as_bytes().ct_eq(username.as_bytes());
            let pass_ok = cred.password.as_bytes().ct_eq(password.as_bytes());
            if bool::from(user_ok & pass_ok) && found.is_none() {
                found = Some(Principal {
                    username: cred.username.clone(),
                    role: cred.role.clone(),
                });
            }
        }

        found.ok_or(AuthError::InvalidCredentials)
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::builtin()
    }
}
