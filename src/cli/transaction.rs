//! Transaction CLI commands
//!
//! Implements CLI commands for adding, editing and browsing transactions.
//! Every command here needs a logged-in session.

use clap::Subcommand;

use crate::display::{
    format_transaction_amount, format_transaction_details, format_transaction_register,
};
use crate::error::{PocketError, PocketResult};
use crate::models::{parse_date, TransactionKind};
use crate::services::{
    BudgetService, CreateTransactionInput, LedgerService, TransactionChanges, TransactionFilter,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// expense or income
        kind: TransactionKind,
        /// Amount (e.g., "50" or "12.99")
        amount: String,
        /// Category name (e.g., Food, Salary)
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Transaction time (HH:MM), defaults to now
        #[arg(short, long)]
        time: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List transactions
    List {
        /// Only expense or income
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Number of most recent transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        /// New type
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New time
        #[arg(short, long)]
        time: Option<String>,
        /// New note (empty to remove)
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> PocketResult<()> {
    let service = LedgerService::new(storage);
    service.require_session()?;
    let symbol = service.currency()?;

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            time,
            note,
        } => {
            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                category,
                date,
                time,
                note,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {} {}", txn.date, txn.time.format("%H:%M"));
            println!("  Category: {}", txn.category);
            println!("  Amount:   {}", format_transaction_amount(&txn, &symbol));

            if txn.is_expense() {
                if let Some(alert) = BudgetService::new(storage).alert()? {
                    println!();
                    println!("{}: {}", alert.title, alert.message);
                }
            }
        }

        TransactionCommands::List {
            kind,
            category,
            limit,
            from,
            to,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            filter.kind = kind;
            filter.category = category;
            filter.start_date = from.as_deref().map(parse_date_arg).transpose()?;
            filter.end_date = to.as_deref().map(parse_date_arg).transpose()?;

            let transactions = service.list_filtered(&filter)?;
            print!("{}", format_transaction_register(&transactions, &symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, &symbol));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            time,
            note,
        } => {
            let txn = service.find(&id)?;
            let updated = service.edit(
                &txn.id,
                TransactionChanges {
                    kind,
                    amount,
                    category,
                    date,
                    time,
                    note,
                },
            )?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {} {}", updated.date, updated.time.format("%H:%M"));
            println!("  Category: {}", updated.category);
            println!("  Amount:   {}", format_transaction_amount(&updated, &symbol));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", txn.date);
                println!("  Category: {}", txn.category);
                println!("  Amount:   {}", format_transaction_amount(&txn, &symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = service.delete(&txn.id)?;
            println!("Deleted transaction: {} ({} removed)", txn.id, removed);
        }
    }

    Ok(())
}

fn parse_date_arg(s: &str) -> PocketResult<chrono::NaiveDate> {
    parse_date(s)
        .ok_or_else(|| PocketError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s)))
}
