//! Scalar settings kept in the preference store
//!
//! Budget limit, currency symbol, onboarding flag and the logged-in user.

use std::sync::Arc;

use crate::error::PocketError;

use super::prefs::PreferenceStore;

pub const BUDGET_KEY: &str = "budget";
pub const CURRENCY_KEY: &str = "currency";
pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding_completed";
pub const LOGGED_IN_USER_KEY: &str = "logged_in_user";

/// Currency symbol used until one is chosen
pub const DEFAULT_CURRENCY: &str = "$";

/// Snapshot of all settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// 0 (or any non-positive value) means "use the fallback budget"
    pub budget_limit: f64,
    pub currency_symbol: String,
    pub onboarding_completed: bool,
    pub logged_in_user: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_limit: 0.0,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            onboarding_completed: false,
            logged_in_user: None,
        }
    }
}

/// Typed access to the settings keys
pub struct SettingsRepository {
    prefs: Arc<PreferenceStore>,
}

impl SettingsRepository {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    pub fn budget(&self) -> Result<f64, PocketError> {
        Ok(self.prefs.get_f64(BUDGET_KEY)?.unwrap_or(0.0))
    }

    pub fn set_budget(&self, value: f64) -> Result<(), PocketError> {
        self.prefs.put_f64(BUDGET_KEY, value)
    }

    pub fn currency(&self) -> Result<String, PocketError> {
        Ok(self
            .prefs
            .get_string(CURRENCY_KEY)?
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
    }

    pub fn set_currency(&self, symbol: &str) -> Result<(), PocketError> {
        self.prefs.put_string(CURRENCY_KEY, symbol)
    }

    pub fn onboarding_completed(&self) -> Result<bool, PocketError> {
        Ok(self.prefs.get_bool(ONBOARDING_COMPLETED_KEY)?.unwrap_or(false))
    }

    pub fn set_onboarding_completed(&self, completed: bool) -> Result<(), PocketError> {
        self.prefs.put_bool(ONBOARDING_COMPLETED_KEY, completed)
    }

    pub fn logged_in_user(&self) -> Result<Option<String>, PocketError> {
        self.prefs.get_string(LOGGED_IN_USER_KEY)
    }

    /// Store the username, or remove the key when `None`
    pub fn set_logged_in_user(&self, username: Option<&str>) -> Result<(), PocketError> {
        match username {
            Some(name) => self.prefs.put_string(LOGGED_IN_USER_KEY, name),
            None => self.prefs.remove(LOGGED_IN_USER_KEY),
        }
    }

    pub fn snapshot(&self) -> Result<Settings, PocketError> {
        Ok(Settings {
            budget_limit: self.budget()?,
            currency_symbol: self.currency()?,
            onboarding_completed: self.onboarding_completed()?,
            logged_in_user: self.logged_in_user()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, SettingsRepository) {
        let temp_dir = TempDir::new().unwrap();
        let prefs = Arc::new(PreferenceStore::open(temp_dir.path().join("prefs.json")).unwrap());
        (temp_dir, SettingsRepository::new(prefs))
    }

    #[test]
    fn test_defaults() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.snapshot().unwrap(), Settings::default());
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, repo) = create_test_repo();
        repo.set_budget(2500.0).unwrap();
        repo.set_currency("£").unwrap();
        repo.set_onboarding_completed(true).unwrap();
        repo.set_logged_in_user(Some("alice")).unwrap();

        let settings = repo.snapshot().unwrap();
        assert_eq!(settings.budget_limit, 2500.0);
        assert_eq!(settings.currency_symbol, "£");
        assert!(settings.onboarding_completed);
        assert_eq!(settings.logged_in_user.as_deref(), Some("alice"));

        repo.set_logged_in_user(None).unwrap();
        assert_eq!(repo.logged_in_user().unwrap(), None);
    }
}
