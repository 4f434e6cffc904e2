//! Service layer for Pocket Money
//!
//! Services sit on top of the storage layer and own validation, session
//! checks and the derived figures shown on the dashboard.

pub mod auth;
pub mod budget;
pub mod ledger;

pub use auth::AuthService;
pub use budget::{AlertLevel, BudgetAlert, BudgetService, BudgetStatus, FALLBACK_BUDGET};
pub use ledger::{
    CreateTransactionInput, LaunchRoute, LedgerService, TransactionChanges, TransactionFilter,
    ONBOARDING_DEFAULT_BUDGET,
};
