//! Transaction model
//!
//! A transaction is an immutable record of money coming in or going out,
//! filed under one category of its kind.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionKind};
use super::ids::TransactionId;
use super::money::Money;

/// Canonical date encoding
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Older records spell dates out, e.g. "January, 01 2024"
pub const LEGACY_DATE_FORMAT: &str = "%B, %d %Y";
/// Canonical time encoding
pub const TIME_FORMAT: &str = "%H:%M";
/// Time encoding when seconds (or a fraction) are present
pub const PRECISE_TIME_FORMAT: &str = "%H:%M:%S%.f";

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Category, which also fixes the kind
    pub category: Category,

    /// Non-negative amount; the kind decides the sign
    pub amount: Money,

    pub date: NaiveDate,

    pub time: NaiveTime,

    pub note: Option<String>,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        category: Category,
        amount: Money,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self {
            id: TransactionId::new(),
            category,
            amount,
            date,
            time,
            note: None,
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Replace the id, e.g. when editing an existing entry
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = normalize_note(Some(note.into()));
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Icon reference derived from kind + category
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TransactionValidationError::EmptyId);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.category,
            self.signed_amount()
        )
    }
}

/// Parse a date in the canonical or legacy encoding
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, LEGACY_DATE_FORMAT))
        .ok()
}

/// Parse a wall-clock time as `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, PRECISE_TIME_FORMAT))
        .ok()
}

/// Encode a time losslessly: `HH:MM` on the minute, otherwise with seconds
pub fn format_time(time: NaiveTime) -> String {
    if time.second() == 0 && time.nanosecond() == 0 {
        time.format(TIME_FORMAT).to_string()
    } else {
        time.format(PRECISE_TIME_FORMAT).to_string()
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Flat on-disk shape of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    id: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Money,
    category: String,
    date: String,
    time: String,
    // Re-derived on read; older files stored a numeric resource id here
    #[serde(default)]
    category_icon: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            kind: txn.kind(),
            amount: txn.amount,
            category: txn.category.name().to_string(),
            date: txn.date.format(DATE_FORMAT).to_string(),
            time: format_time(txn.time),
            category_icon: serde_json::Value::String(txn.icon().to_string()),
            note: txn.note,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionValidationError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let category = Category::parse(record.kind, &record.category)
            .map_err(|e| TransactionValidationError::Category(e.to_string()))?;
        let date = parse_date(&record.date)
            .ok_or_else(|| TransactionValidationError::InvalidDate(record.date.clone()))?;
        let time = parse_time(&record.time)
            .ok_or_else(|| TransactionValidationError::InvalidTime(record.time.clone()))?;

        let txn = Self {
            id: TransactionId::from(record.id),
            category,
            amount: record.amount,
            date,
            time,
            note: record.note,
        };
        txn.validate()?;
        Ok(txn)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyId,
    NegativeAmount(Money),
    Category(String),
    InvalidDate(String),
    InvalidTime(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Transaction id cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::Category(msg) => write!(f, "{}", msg),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", s),
            Self::InvalidTime(s) => write!(f, "Invalid time '{}' (expected HH:MM)", s),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
