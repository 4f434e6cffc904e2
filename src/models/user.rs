//! Users and sessions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user
///
/// The password is kept in plaintext, matching the on-disk `users.json`
/// format this ledger reads and writes. This is a known weakness of the
/// format: anyone who can read the data directory can read every password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// The logged-in user of this installation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session {
    pub username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let user = User::new("alice", "s3cret");
        assert!(user.matches("alice", "s3cret"));
        assert!(!user.matches("Alice", "s3cret"));
        assert!(!user.matches("alice", "S3cret"));
    }

    #[test]
    fn test_user_wire_format() {
        let user = User::new("bob", "pw");
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"username":"bob","password":"pw"}"#
        );
    }
}
