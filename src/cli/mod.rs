//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod data;
pub mod report;
pub mod settings;
pub mod transaction;

pub use auth::{handle_login, handle_logout, handle_register, handle_status, handle_whoami};
pub use data::{handle_data_command, DataCommands, ExportFormat};
pub use report::{handle_history, handle_stats, handle_summary};
pub use settings::{handle_onboard, handle_settings_command, SettingsCommands, SUPPORTED_CURRENCIES};
pub use transaction::{handle_transaction_command, TransactionCommands};
