//! Path management for Pocket Money
//!
//! Resolves where the preference store, user list and exports live.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the CLI `--data-dir` flag)
//! 2. `POCKET_MONEY_DATA_DIR` environment variable (if set)
//! 3. The platform data directory reported by `directories`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PocketError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "POCKET_MONEY_DATA_DIR";

/// Manages all paths used by Pocket Money
#[derive(Debug, Clone)]
pub struct PocketPaths {
    base_dir: PathBuf,
}

impl PocketPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PocketError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PocketPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `explicit` when given, otherwise fall back to [`PocketPaths::new`]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PocketError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The namespaced key-value preference store
    pub fn prefs_file(&self) -> PathBuf {
        self.base_dir.join("prefs.json")
    }

    /// The flat user list used for authentication
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.json")
    }

    /// Default destination for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), PocketError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| PocketError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, PocketError> {
    ProjectDirs::from("com", "example", "pocket-money")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PocketError::Config("Could not determine a home directory".into()))
}
