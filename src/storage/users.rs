//! User repository
//!
//! Registered users live in their own flat file (`users.json`), a JSON array
//! of `{username, password}` objects, separate from the preference store.

use std::path::PathBuf;

use crate::error::PocketError;
use crate::models::User;

use super::file_io::{load_json, save_json};

pub struct UserRepository {
    path: PathBuf,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All registered users, empty when the file doesn't exist yet
    pub fn get_all(&self) -> Result<Vec<User>, PocketError> {
        load_json(&self.path)
    }

    pub fn find(&self, username: &str) -> Result<Option<User>, PocketError> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|u| u.username == username))
    }

    /// Append a user and rewrite the file
    pub fn insert(&self, user: User) -> Result<(), PocketError> {
        let mut users = self.get_all()?;
        users.push(user);
        save_json(&self.path, &users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_insert_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("users.json"));

        assert!(repo.get_all().unwrap().is_empty());

        repo.insert(User::new("alice", "pw1")).unwrap();
        repo.insert(User::new("bob", "pw2")).unwrap();

        assert_eq!(repo.get_all().unwrap().len(), 2);
        assert_eq!(repo.find("bob").unwrap(), Some(User::new("bob", "pw2")));
        assert_eq!(repo.find("BOB").unwrap(), None);
    }

    #[test]
    fn test_file_is_flat_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let repo = UserRepository::new(path.clone());
        repo.insert(User::new("alice", "pw")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "username": "alice", "password": "pw" }])
        );
    }
}
