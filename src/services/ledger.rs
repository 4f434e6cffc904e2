//! Ledger service
//!
//! The ledger's public operations: validated CRUD over the transaction
//! collection, scalar settings, the login session, and the aggregation
//! queries evaluated over a fresh snapshot.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};

use crate::error::{PocketError, PocketResult};
use crate::models::{
    parse_date, parse_time, Category, Money, Session, Transaction, TransactionId,
    TransactionKind,
};
use crate::reports::{self, CategoryBreakdown, CategoryTotals, DateGroup, LedgerTotals};
use crate::storage::Storage;

/// Budget recorded when onboarding finishes without one
pub const ONBOARDING_DEFAULT_BUDGET: f64 = 1000.0;

/// Input for creating a new transaction from user-entered text
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    /// Defaults to today
    pub date: Option<String>,
    /// Defaults to the current time
    pub time: Option<String>,
    pub note: Option<String>,
}

/// Fields to change on an existing transaction; `None` keeps the old value
#[derive(Debug, Clone, Default)]
pub struct TransactionChanges {
    pub kind: Option<TransactionKind>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub note: Option<String>,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    /// Category name, matched case-insensitively
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Keep only the most recently added matches
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind() == k)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category.name().eq_ignore_ascii_case(c.trim()))
            && self.start_date.map_or(true, |d| txn.date >= d)
            && self.end_date.map_or(true, |d| txn.date <= d)
    }
}

/// Where a fresh launch should take the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRoute {
    Onboarding,
    Login,
    Home(Session),
}

/// Service for ledger operations
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    // --- transactions -----------------------------------------------------

    /// Append a transaction; fails if its id is already present
    pub fn add(&self, txn: Transaction) -> PocketResult<()> {
        txn.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        if self.storage.transactions.get(&txn.id)?.is_some() {
            return Err(PocketError::Validation(format!(
                "Transaction with id {} already exists",
                txn.id
            )));
        }

        tracing::info!(id = %txn.id, kind = %txn.kind(), amount = %txn.amount, "adding transaction");
        self.storage.transactions.insert(txn)
    }

    /// Build a transaction from text input and add it
    pub fn create(&self, input: CreateTransactionInput) -> PocketResult<Transaction> {
        let amount = parse_amount(&input.amount)?;
        let category = parse_category(input.kind, &input.category)?;
        let now = Local::now().naive_local();
        let date = match input.date {
            Some(s) => parse_date_input(&s)?,
            None => now.date(),
        };
        let time = match input.time {
            Some(s) => parse_time_input(&s)?,
            None => truncate_to_minute(now.time()),
        };

        let mut txn = Transaction::new(category, amount, date, time)
            .map_err(|e| PocketError::Validation(e.to_string()))?;
        if let Some(note) = input.note {
            txn = txn.with_note(note);
        }

        self.add(txn.clone())?;
        Ok(txn)
    }

    /// Replace the stored entry that has the same id
    ///
    /// Unknown ids fail with `NotFound` and leave the ledger untouched.
    pub fn update(&self, txn: Transaction) -> PocketResult<()> {
        txn.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        let id = txn.id.clone();
        if !self.storage.transactions.replace(txn)? {
            return Err(PocketError::transaction_not_found(id.to_string()));
        }

        tracing::info!(id = %id, "updated transaction");
        Ok(())
    }

    /// Apply `changes` to the transaction `id` and store the result
    pub fn edit(&self, id: &TransactionId, changes: TransactionChanges) -> PocketResult<Transaction> {
        let current = self
            .get(id)?
            .ok_or_else(|| PocketError::transaction_not_found(id.to_string()))?;

        let kind = changes.kind.unwrap_or_else(|| current.kind());
        let category_name = changes
            .category
            .unwrap_or_else(|| current.category.name().to_string());
        let category = parse_category(kind, &category_name)?;

        let amount = match changes.amount {
            Some(s) => parse_amount(&s)?,
            None => current.amount,
        };
        let date = match changes.date {
            Some(s) => parse_date_input(&s)?,
            None => current.date,
        };
        let time = match changes.time {
            Some(s) => parse_time_input(&s)?,
            None => current.time,
        };

        let mut updated = Transaction::new(category, amount, date, time)
            .map_err(|e| PocketError::Validation(e.to_string()))?
            .with_id(current.id.clone());
        updated.note = current.note;
        if let Some(note) = changes.note {
            updated = updated.with_note(note);
        }

        self.update(updated.clone())?;
        Ok(updated)
    }

    /// Remove every entry with `id`, returning how many were removed
    pub fn delete(&self, id: &TransactionId) -> PocketResult<usize> {
        let removed = self.storage.transactions.delete(id)?;
        tracing::info!(id = %id, removed, "deleted transaction");
        Ok(removed)
    }

    /// Snapshot of all transactions in insertion order
    pub fn list(&self) -> PocketResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions matching `filter`, still in insertion order
    pub fn list_filtered(&self, filter: &TransactionFilter) -> PocketResult<Vec<Transaction>> {
        let mut matching: Vec<Transaction> = self
            .list()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        if let Some(limit) = filter.limit {
            let skip = matching.len().saturating_sub(limit);
            matching.drain(..skip);
        }
        Ok(matching)
    }

    pub fn get(&self, id: &TransactionId) -> PocketResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Resolve a full id or a unique id prefix
    pub fn find(&self, identifier: &str) -> PocketResult<Transaction> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(PocketError::Validation("Transaction id is required".into()));
        }

        let transactions = self.list()?;
        if let Some(exact) = transactions.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(exact.clone());
        }

        let mut matches = transactions
            .into_iter()
            .filter(|t| t.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only),
            (Some(_), Some(_)) => Err(PocketError::Validation(format!(
                "Id prefix '{}' matches more than one transaction",
                identifier
            ))),
            (None, _) => Err(PocketError::transaction_not_found(identifier)),
        }
    }

    /// Remove all transactions
    pub fn clear(&self) -> PocketResult<()> {
        tracing::info!("clearing all transactions");
        self.storage.transactions.clear()
    }

    /// Overwrite the whole collection, as restore/import does
    ///
    /// Ids are not checked for uniqueness.
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> PocketResult<()> {
        let mut seen = HashSet::new();
        let duplicates = transactions
            .iter()
            .filter(|t| !seen.insert(t.id.clone()))
            .count();
        if duplicates > 0 {
            tracing::warn!(duplicates, "replacing ledger with a collection that repeats ids");
        }

        tracing::info!(count = transactions.len(), "replacing all transactions");
        self.storage.transactions.save_all(&transactions)
    }

    // --- settings ---------------------------------------------------------

    /// Stored budget limit (0 when unset)
    pub fn budget(&self) -> PocketResult<f64> {
        self.storage.settings.budget()
    }

    pub fn set_budget(&self, value: f64) -> PocketResult<()> {
        if !value.is_finite() {
            return Err(PocketError::Validation(
                "Please enter a valid budget".into(),
            ));
        }
        self.storage.settings.set_budget(value)
    }

    pub fn currency(&self) -> PocketResult<String> {
        self.storage.settings.currency()
    }

    pub fn set_currency(&self, symbol: &str) -> PocketResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PocketError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }
        self.storage.settings.set_currency(symbol)
    }

    pub fn is_onboarding_completed(&self) -> PocketResult<bool> {
        self.storage.settings.onboarding_completed()
    }

    pub fn set_onboarding_completed(&self, completed: bool) -> PocketResult<()> {
        self.storage.settings.set_onboarding_completed(completed)
    }

    /// Finish onboarding with an initial budget and currency
    pub fn complete_onboarding(&self, budget: Option<f64>, currency: Option<&str>) -> PocketResult<()> {
        self.set_budget(budget.unwrap_or(ONBOARDING_DEFAULT_BUDGET))?;
        self.set_currency(currency.unwrap_or(crate::storage::DEFAULT_CURRENCY))?;
        self.set_onboarding_completed(true)
    }

    // --- session ----------------------------------------------------------

    pub fn logged_in_user(&self) -> PocketResult<Option<Session>> {
        Ok(self.storage.settings.logged_in_user()?.map(Session::new))
    }

    pub fn set_logged_in_user(&self, session: Option<&Session>) -> PocketResult<()> {
        self.storage
            .settings
            .set_logged_in_user(session.map(|s| s.username.as_str()))
    }

    pub fn is_logged_in(&self) -> PocketResult<bool> {
        Ok(self.logged_in_user()?.is_some())
    }

    pub fn logout(&self) -> PocketResult<()> {
        self.set_logged_in_user(None)
    }

    /// The current session, or `NotLoggedIn`
    pub fn require_session(&self) -> PocketResult<Session> {
        self.logged_in_user()?.ok_or(PocketError::NotLoggedIn)
    }

    /// Onboarding first, then login, then the home view
    pub fn launch_route(&self) -> PocketResult<LaunchRoute> {
        if !self.is_onboarding_completed()? {
            return Ok(LaunchRoute::Onboarding);
        }
        Ok(match self.logged_in_user()? {
            Some(session) => LaunchRoute::Home(session),
            None => LaunchRoute::Login,
        })
    }

    // --- aggregation ------------------------------------------------------

    pub fn total_by_kind(&self, kind: TransactionKind) -> PocketResult<Money> {
        Ok(reports::total_by_kind(&self.list()?, kind))
    }

    pub fn balance(&self) -> PocketResult<Money> {
        Ok(reports::balance(&self.list()?))
    }

    pub fn totals(&self) -> PocketResult<LedgerTotals> {
        Ok(LedgerTotals::compute(&self.list()?))
    }

    pub fn group_by_category(&self, kind: TransactionKind) -> PocketResult<CategoryTotals> {
        Ok(reports::group_by_category(&self.list()?, kind))
    }

    pub fn largest_category(&self, kind: TransactionKind) -> PocketResult<Option<Category>> {
        Ok(reports::largest_category(&self.list()?, kind).map(|c| c.category))
    }

    pub fn breakdown(&self, kind: TransactionKind) -> PocketResult<CategoryBreakdown> {
        Ok(CategoryBreakdown::compute(&self.list()?, kind))
    }

    pub fn history(&self) -> PocketResult<Vec<DateGroup>> {
        Ok(reports::group_by_date(&self.list()?))
    }

    /// Expense as a percentage of the effective budget
    pub fn budget_usage_percent(&self) -> PocketResult<f64> {
        let expense = self.total_by_kind(TransactionKind::Expense)?;
        Ok(super::budget::usage_percent(expense, self.budget()?))
    }
}

fn parse_amount(s: &str) -> PocketResult<Money> {
    let amount = Money::parse(s).map_err(|e| PocketError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(PocketError::Validation(
            "Amount cannot be negative; choose Expense or Income instead".into(),
        ));
    }
    Ok(amount)
}

fn parse_category(kind: TransactionKind, name: &str) -> PocketResult<Category> {
    Category::parse(kind, name).map_err(|e| PocketError::Validation(e.to_string()))
}

fn parse_date_input(s: &str) -> PocketResult<NaiveDate> {
    parse_date(s).ok_or_else(|| {
        PocketError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s.trim()))
    })
}

fn parse_time_input(s: &str) -> PocketResult<NaiveTime> {
    parse_time(s).ok_or_else(|| {
        PocketError::Validation(format!("Invalid time '{}'. Use HH:MM", s.trim()))
    })
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
