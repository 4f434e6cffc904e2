//! Storage layer for Pocket Money
//!
//! A namespaced key-value preference store (transactions and scalar
//! settings) plus a separate flat file of users. Writes are atomic and
//! always replace whole files.

pub mod file_io;
pub mod prefs;
pub mod settings;
pub mod transactions;
pub mod users;

pub use file_io::{load_json, save_json};
pub use prefs::PreferenceStore;
pub use settings::{Settings, SettingsRepository, DEFAULT_CURRENCY};
pub use transactions::{TransactionRepository, TRANSACTIONS_KEY};
pub use users::UserRepository;

use std::sync::Arc;

use crate::config::paths::PocketPaths;
use crate::error::PocketError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketPaths,
    pub transactions: TransactionRepository,
    pub settings: SettingsRepository,
    pub users: UserRepository,
}

impl Storage {
    /// Open (or create) the stores under `paths`
    pub fn new(paths: PocketPaths) -> Result<Self, PocketError> {
        paths.ensure_directories()?;

        let prefs = Arc::new(PreferenceStore::open(paths.prefs_file())?);

        Ok(Self {
            transactions: TransactionRepository::new(Arc::clone(&prefs)),
            settings: SettingsRepository::new(prefs),
            users: UserRepository::new(paths.users_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PocketPaths {
        &self.paths
    }
}
