//! Core data models for Pocket Money
//!
//! Transactions, their kinds and categories, money amounts, users and the
//! login session.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use category::{Category, CategoryError, ExpenseCategory, IncomeCategory, TransactionKind};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{
    format_time, parse_date, parse_time, Transaction, TransactionValidationError, DATE_FORMAT,
    TIME_FORMAT,
};
pub use user::{Session, User};
