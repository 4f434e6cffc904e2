//! Authentication service
//!
//! Local accounts only. Credentials live in `users.json` and are compared
//! verbatim; see [`User`] for the storage caveat.

use crate::error::{PocketError, PocketResult};
use crate::models::{Session, User};
use crate::storage::Storage;

/// Service for registration, login and logout
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create an account
    ///
    /// Inputs are trimmed. Usernames are unique, compared exactly.
    pub fn register(&self, username: &str, password: &str) -> PocketResult<User> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(PocketError::Validation(
                "Username and password are required".into(),
            ));
        }

        if self.storage.users.find(username)?.is_some() {
            return Err(PocketError::DuplicateUser(username.to_string()));
        }

        let user = User::new(username, password);
        self.storage.users.insert(user.clone())?;
        tracing::info!(username, "registered user");
        Ok(user)
    }

    /// Register after checking the password was typed the same twice
    pub fn register_with_confirmation(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> PocketResult<User> {
        if password.trim() != confirm.trim() {
            return Err(PocketError::Validation("Passwords do not match".into()));
        }
        self.register(username, password)
    }

    /// Look up the user whose username and password both match
    pub fn authenticate(&self, username: &str, password: &str) -> PocketResult<User> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(PocketError::Validation(
                "Username and password are required".into(),
            ));
        }

        self.storage
            .users
            .get_all()?
            .into_iter()
            .find(|u| u.matches(username, password))
            .ok_or(PocketError::InvalidCredentials)
    }

    /// Authenticate and record the session
    pub fn login(&self, username: &str, password: &str) -> PocketResult<Session> {
        let user = match self.authenticate(username, password) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(username = username.trim(), "login failed");
                return Err(e);
            }
        };

        let session = Session::new(user.username);
        self.storage
            .settings
            .set_logged_in_user(Some(&session.username))?;
        tracing::info!(username = %session.username, "logged in");
        Ok(session)
    }

    pub fn logout(&self) -> PocketResult<()> {
        if let Some(username) = self.storage.settings.logged_in_user()? {
            tracing::info!(username = %username, "logged out");
        }
        self.storage.settings.set_logged_in_user(None)
    }

    /// The logged-in session, if any
    pub fn current_session(&self) -> PocketResult<Option<Session>> {
        Ok(self.storage.settings.logged_in_user()?.map(Session::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_then_authenticate() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        let user = auth.authenticate("alice", "pw1").unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        assert!(matches!(
            auth.authenticate("alice", "pw2"),
            Err(PocketError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.authenticate("bob", "pw1"),
            Err(PocketError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        assert!(matches!(
            auth.register("alice", "other"),
            Err(PocketError::DuplicateUser(name)) if name == "alice"
        ));
        // Exact comparison: case differs, so this is a new user
        auth.register("Alice", "pw").unwrap();
        assert_eq!(storage.users.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_register_form_checks() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        assert!(auth.register("  ", "pw").unwrap_err().is_validation());
        assert!(auth.register("carol", "").unwrap_err().is_validation());
        assert!(auth
            .register_with_confirmation("carol", "pw1", "pw2")
            .unwrap_err()
            .is_validation());

        let user = auth
            .register_with_confirmation(" carol ", "pw1", "pw1 ")
            .unwrap();
        assert_eq!(user.username, "carol");
    }

    #[test]
    fn test_login_records_session_and_logout_clears_it() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        assert!(auth.login("alice", "nope").is_err());
        assert_eq!(auth.current_session().unwrap(), None);

        let session = auth.login("alice", "pw1").unwrap();
        assert_eq!(session, Session::new("alice"));
        assert_eq!(auth.current_session().unwrap(), Some(session));

        auth.logout().unwrap();
        assert_eq!(auth.current_session().unwrap(), None);
    }

    #[test]
    fn test_users_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            AuthService::new(&storage).register("dave", "secret").unwrap();
        }

        let storage = Storage::new(paths).unwrap();
        assert!(AuthService::new(&storage).authenticate("dave", "secret").is_ok());
    }
}
