//! Display formatting for terminal output
//!
//! Plain-text rendering of transactions, history and dashboards. Every
//! function takes the currency symbol to print with.

pub mod report;
pub mod transaction;

pub use report::{format_breakdown, format_settings, format_summary};
pub use transaction::{
    format_history, format_signed_money, format_transaction_amount, format_transaction_details,
    format_transaction_register, format_transaction_row,
};
