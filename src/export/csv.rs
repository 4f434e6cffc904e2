//! CSV export
//!
//! One row per transaction for spreadsheets. There is no CSV import.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::json::EXPORT_FILE_PREFIX;
use crate::error::{PocketError, PocketResult};
use crate::models::{format_time, DATE_FORMAT};
use crate::storage::Storage;

const HEADER: [&str; 7] = ["ID", "Date", "Time", "Type", "Category", "Amount", "Note"];

/// `PocketMoney_Export_<millis>.csv`
pub fn csv_filename(unix_millis: i64) -> String {
    format!("{}{}.csv", EXPORT_FILE_PREFIX, unix_millis)
}

/// Write all transactions as CSV with a header row
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> PocketResult<usize> {
    let transactions = storage.transactions.get_all()?;
    if transactions.is_empty() {
        return Err(PocketError::Validation("No transactions to export".into()));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)
        .map_err(|e| PocketError::Export(e.to_string()))?;

    for txn in &transactions {
        let date = txn.date.format(DATE_FORMAT).to_string();
        let time = format_time(txn.time);
        let amount = txn.amount.format_with_symbol("");
        wtr.write_record([
            txn.id.as_str(),
            date.as_str(),
            time.as_str(),
            txn.kind().as_str(),
            txn.category.name(),
            amount.as_str(),
            txn.note.as_deref().unwrap_or(""),
        ])
        .map_err(|e| PocketError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| PocketError::Export(e.to_string()))?;
    Ok(transactions.len())
}

/// Export into `dir` under a timestamped file name, returning the path
pub fn export_csv_to_dir(storage: &Storage, dir: &Path) -> PocketResult<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| PocketError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

    let path = dir.join(csv_filename(Utc::now().timestamp_millis()));
    let mut buffer = Vec::new();
    let count = export_transactions_csv(storage, &mut buffer)?;
    fs::write(&path, buffer)
        .map_err(|e| PocketError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), count, "exported transactions as csv");
    Ok(path)
}
