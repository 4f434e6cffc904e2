//! Budget service
//!
//! Compares spending against the stored budget limit and decides whether
//! the user should be warned.

use crate::error::PocketResult;
use crate::models::{Money, TransactionKind};
use crate::reports;
use crate::storage::Storage;

/// Budget assumed when none (or a non-positive one) is stored
pub const FALLBACK_BUDGET: f64 = 1000.0;

/// Usage at which the warning alert starts
pub const WARNING_THRESHOLD: f64 = 90.0;

/// Usage at which the budget counts as exceeded
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// The budget actually used for percentages
pub fn effective_budget(stored: f64) -> f64 {
    if stored > 0.0 {
        stored
    } else {
        FALLBACK_BUDGET
    }
}

/// `100 * expense / effective_budget(stored)`
pub fn usage_percent(expense: Money, stored_budget: f64) -> f64 {
    expense.to_f64() * 100.0 / effective_budget(stored_budget)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Warning,
    Exceeded,
}

impl AlertLevel {
    /// Stable notification id for this level
    pub fn severity_id(&self) -> u8 {
        match self {
            AlertLevel::Warning => 1,
            AlertLevel::Exceeded => 2,
        }
    }
}

/// Notification content for a budget threshold crossing
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl BudgetAlert {
    /// Notification id, taken from the level
    pub fn severity_id(&self) -> u8 {
        self.level.severity_id()
    }

    /// Alert for `usage` percent, if it has reached a threshold
    pub fn for_usage(usage: f64) -> Option<Self> {
        let level = if usage >= EXCEEDED_THRESHOLD {
            AlertLevel::Exceeded
        } else if usage >= WARNING_THRESHOLD {
            AlertLevel::Warning
        } else {
            return None;
        };

        // Whole percent, truncated
        let shown = usage.trunc() as i64;
        let (title, message) = match level {
            AlertLevel::Warning => (
                "Budget Warning",
                format!("You're approaching your budget limit! ({}% used)", shown),
            ),
            AlertLevel::Exceeded => (
                "Budget Exceeded",
                format!("You've exceeded your budget! ({}% used)", shown),
            ),
        };

        Some(Self {
            level,
            title: title.to_string(),
            message,
        })
    }
}

/// Dashboard view of spending against the budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Budget as stored, possibly 0
    pub budget_limit: f64,
    pub effective_budget: f64,
    pub spent: Money,
    /// May go negative once the budget is exceeded
    pub remaining: Money,
    pub usage_percent: f64,
    pub alert: Option<BudgetAlert>,
}

/// Service for budget checks
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn effective_budget(&self) -> PocketResult<f64> {
        Ok(effective_budget(self.storage.settings.budget()?))
    }

    /// Percentage of the effective budget spent on expenses
    pub fn usage_percent(&self) -> PocketResult<f64> {
        let spent = self.spent()?;
        Ok(usage_percent(spent, self.storage.settings.budget()?))
    }

    /// Effective budget minus total expense
    pub fn remaining(&self) -> PocketResult<Money> {
        Ok(Money::from_f64(self.effective_budget()?) - self.spent()?)
    }

    /// Alert to raise for the current usage, if any
    pub fn alert(&self) -> PocketResult<Option<BudgetAlert>> {
        let alert = BudgetAlert::for_usage(self.usage_percent()?);
        if let Some(alert) = &alert {
            tracing::debug!(title = %alert.title, "budget threshold reached");
        }
        Ok(alert)
    }

    pub fn status(&self) -> PocketResult<BudgetStatus> {
        let budget_limit = self.storage.settings.budget()?;
        let effective = effective_budget(budget_limit);
        let spent = self.spent()?;
        let usage = usage_percent(spent, budget_limit);

        Ok(BudgetStatus {
            budget_limit,
            effective_budget: effective,
            spent,
            remaining: Money::from_f64(effective) - spent,
            usage_percent: usage,
            alert: BudgetAlert::for_usage(usage),
        })
    }

    fn spent(&self) -> PocketResult<Money> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(reports::total_by_kind(&transactions, TransactionKind::Expense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketPaths;
    use crate::services::{CreateTransactionInput, LedgerService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn spend(storage: &Storage, amount: &str) {
        LedgerService::new(storage)
            .create(CreateTransactionInput {
                kind: TransactionKind::Expense,
                amount: amount.into(),
                category: "Food".into(),
                date: Some("2024-01-01".into()),
                time: Some("12:00".into()),
                note: None,
            })
            .unwrap();
    }

    #[test]
    fn test_effective_budget_fallback() {
        assert_eq!(effective_budget(0.0), FALLBACK_BUDGET);
        assert_eq!(effective_budget(-5.0), FALLBACK_BUDGET);
        assert_eq!(effective_budget(250.0), 250.0);
    }

    #[test]
    fn test_usage_with_unset_budget_uses_fallback() {
        let (_temp_dir, storage) = create_test_storage();
        spend(&storage, "300");

        let service = BudgetService::new(&storage);
        assert!((service.usage_percent().unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(service.remaining().unwrap(), Money::from_cents(70000));
        assert!(service.alert().unwrap().is_none());
    }

    #[test]
    fn test_alert_thresholds() {
        assert!(BudgetAlert::for_usage(89.9).is_none());

        let warning = BudgetAlert::for_usage(92.4).unwrap();
        assert_eq!(warning.level, AlertLevel::Warning);
        assert_eq!(warning.title, "Budget Warning");
        assert_eq!(warning.severity_id(), 1);
        assert_eq!(
            warning.message,
            "You're approaching your budget limit! (92% used)"
        );

        let exceeded = BudgetAlert::for_usage(100.0).unwrap();
        assert_eq!(exceeded.title, "Budget Exceeded");
        assert_eq!(exceeded.severity_id(), 2);
        assert_eq!(exceeded.message, "You've exceeded your budget! (100% used)");
    }

    #[test]
    fn test_severity_follows_level() {
        let mut alert = BudgetAlert::for_usage(95.0).unwrap();
        assert_eq!(alert.severity_id(), AlertLevel::Warning.severity_id());

        alert.level = AlertLevel::Exceeded;
        assert_eq!(alert.severity_id(), 2);
    }

    #[test]
    fn test_huge_spending_does_not_overflow() {
        let (_temp_dir, storage) = create_test_storage();
        let max = (crate::models::money::MAX_CENTS / 100).to_string();
        spend(&storage, &max);
        spend(&storage, &max);

        let status = BudgetService::new(&storage).status().unwrap();
        assert!(status.spent.cents() > 0);
        assert!(status.remaining.is_negative());
        assert_eq!(status.alert.map(|a| a.level), Some(AlertLevel::Exceeded));
    }

    #[test]
    fn test_status_over_budget() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.set_budget(100.0).unwrap();
        spend(&storage, "95");
        spend(&storage, "30");

        let status = BudgetService::new(&storage).status().unwrap();
        assert_eq!(status.budget_limit, 100.0);
        assert_eq!(status.spent, Money::from_cents(12500));
        assert_eq!(status.remaining, Money::from_cents(-2500));
        assert!((status.usage_percent - 125.0).abs() < 1e-9);
        assert_eq!(status.alert.map(|a| a.level), Some(AlertLevel::Exceeded));
    }
}
