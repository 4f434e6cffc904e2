//! Report CLI commands: history, dashboard summary and category stats

use crate::display::{format_breakdown, format_history, format_summary};
use crate::error::PocketResult;
use crate::models::TransactionKind;
use crate::services::{BudgetService, LedgerService};
use crate::storage::Storage;

pub fn handle_history(storage: &Storage) -> PocketResult<()> {
    let ledger = LedgerService::new(storage);
    ledger.require_session()?;

    print!("{}", format_history(&ledger.history()?, &ledger.currency()?));
    Ok(())
}

pub fn handle_summary(storage: &Storage) -> PocketResult<()> {
    let ledger = LedgerService::new(storage);
    let session = ledger.require_session()?;

    let totals = ledger.totals()?;
    let status = BudgetService::new(storage).status()?;

    println!("Hello, {}!", session);
    println!();
    print!("{}", format_summary(&totals, &status, &ledger.currency()?));
    Ok(())
}

/// Category breakdown; both kinds when none is given
pub fn handle_stats(storage: &Storage, kind: Option<TransactionKind>) -> PocketResult<()> {
    let ledger = LedgerService::new(storage);
    ledger.require_session()?;
    let symbol = ledger.currency()?;

    let kinds = match kind {
        Some(k) => vec![k],
        None => TransactionKind::ALL.to_vec(),
    };

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_breakdown(&ledger.breakdown(kind)?, &symbol));
    }
    Ok(())
}
