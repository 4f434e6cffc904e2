//! Export and import of the transaction ledger
//!
//! - JSON: the restorable format, a bare array of transaction records
//! - CSV: one row per transaction for spreadsheets (export only)

pub mod csv;
pub mod json;

pub use self::csv::{csv_filename, export_csv_to_dir, export_transactions_csv};
pub use json::{
    export_filename, export_to_dir, export_transactions_json, import_from_json,
    import_transactions, EXPORT_FILE_PREFIX,
};
