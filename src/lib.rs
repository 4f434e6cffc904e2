//! Pocket Money - personal finance ledger
//!
//! This library provides the core of the Pocket Money tracker: a local
//! ledger of income and expense transactions, a handful of settings
//! (budget, currency, onboarding), a single-user login session, and the
//! aggregations shown on the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution
//! - `error`: Custom error types
//! - `models`: Transactions, categories, money and users
//! - `storage`: JSON preference store and user file
//! - `services`: Ledger, authentication and budget logic
//! - `reports`: Pure aggregations over transaction snapshots
//! - `export`: JSON export/import and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_money::config::PocketPaths;
//! use pocket_money::services::LedgerService;
//! use pocket_money::storage::Storage;
//!
//! let storage = Storage::new(PocketPaths::new()?)?;
//! let balance = LedgerService::new(&storage).balance()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{PocketError, PocketResult};

static INIT_TRACING: Once = Once::new();

/// Directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "pocket_money=warn";

/// Initializes the global tracing subscriber once; logs go to stderr.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
