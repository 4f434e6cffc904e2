//! JSON export and import
//!
//! The export file is a bare JSON array of transactions in the same record
//! format the preference store uses, so an export can be restored as-is.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{PocketError, PocketResult};
use crate::models::Transaction;
use crate::services::LedgerService;
use crate::storage::Storage;

/// File name prefix shared by every export format
pub const EXPORT_FILE_PREFIX: &str = "PocketMoney_Export_";

/// `PocketMoney_Export_<millis>.json`
pub fn export_filename(unix_millis: i64) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, unix_millis)
}

/// Write all transactions as a JSON array
pub fn export_transactions_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> PocketResult<usize> {
    let transactions = storage.transactions.get_all()?;
    if transactions.is_empty() {
        return Err(PocketError::Validation("No transactions to export".into()));
    }

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &transactions)
    } else {
        serde_json::to_writer(&mut *writer, &transactions)
    }
    .map_err(|e| PocketError::Export(e.to_string()))?;

    Ok(transactions.len())
}

/// Export into `dir` under a timestamped file name, returning the path
pub fn export_to_dir(storage: &Storage, dir: &Path) -> PocketResult<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| PocketError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

    let path = dir.join(export_filename(Utc::now().timestamp_millis()));

    let mut buffer = Vec::new();
    let count = export_transactions_json(storage, &mut buffer, true)?;
    fs::write(&path, buffer)
        .map_err(|e| PocketError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), count, "exported transactions");
    Ok(path)
}

/// Parse export content without touching storage
pub fn import_from_json(json_str: &str) -> PocketResult<Vec<Transaction>> {
    if json_str.trim().is_empty() {
        return Err(PocketError::Format("Import file is empty".into()));
    }

    serde_json::from_str(json_str)
        .map_err(|e| PocketError::Format(format!("Invalid transaction data: {}", e)))
}

/// Replace the ledger with the contents of an export file
///
/// Nothing is written unless the whole file parses.
pub fn import_transactions(storage: &Storage, path: &Path) -> PocketResult<usize> {
    let content = fs::read_to_string(path).map_err(|e| {
        PocketError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let transactions = import_from_json(&content)?;
    let count = transactions.len();
    LedgerService::new(storage).replace_all(transactions)?;

    tracing::info!(path = %path.display(), count, "imported transactions");
    Ok(count)
}
