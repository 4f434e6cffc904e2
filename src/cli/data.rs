//! Data management CLI commands: export, import and clear

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::PocketResult;
use crate::export::{export_csv_to_dir, export_to_dir, import_transactions};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Restorable JSON array
    #[default]
    Json,
    /// Spreadsheet rows (cannot be imported)
    Csv,
}

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export all transactions to a timestamped file
    Export {
        /// Output directory (defaults to the data directory's exports folder)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Replace all transactions with the contents of a JSON export
    Import {
        /// Path to the export file
        file: PathBuf,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_data_command(storage: &Storage, cmd: DataCommands) -> PocketResult<()> {
    let ledger = LedgerService::new(storage);
    ledger.require_session()?;

    match cmd {
        DataCommands::Export { dir, format } => {
            let dir = dir.unwrap_or_else(|| storage.paths().export_dir());
            let path = match format {
                ExportFormat::Json => export_to_dir(storage, &dir)?,
                ExportFormat::Csv => export_csv_to_dir(storage, &dir)?,
            };
            println!("Exported to {}", path.display());
        }

        DataCommands::Import { file } => {
            let count = import_transactions(storage, &file)?;
            println!("Imported {} transactions from {}", count, file.display());
        }

        DataCommands::Clear { force } => {
            if !force {
                let count = ledger.list()?.len();
                println!("About to delete all {} transactions.", count);
                println!("Use --force to confirm");
                return Ok(());
            }

            ledger.clear()?;
            println!("All transactions deleted.");
        }
    }

    Ok(())
}
