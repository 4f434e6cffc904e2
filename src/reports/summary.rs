//! Income, expense and balance totals

use crate::models::{Money, Transaction, TransactionKind};

/// Sum of amounts over transactions of `kind`
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expense
pub fn balance(transactions: &[Transaction]) -> Money {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Headline totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    pub transaction_count: usize,
}

impl LedgerTotals {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let income = total_by_kind(transactions, TransactionKind::Income);
        let expense = total_by_kind(transactions, TransactionKind::Expense);
        Self {
            income,
            expense,
            balance: income - expense,
            transaction_count: transactions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{expense, income};

    #[test]
    fn test_empty_balance_is_zero() {
        assert_eq!(balance(&[]), Money::zero());
        assert_eq!(total_by_kind(&[], TransactionKind::Income), Money::zero());
    }

    #[test]
    fn test_balance_identity() {
        let txns = vec![
            expense("Food", 5000, "2024-01-01"),
            income("Salary", 200000, "2024-01-01"),
            expense("Bills", 12345, "2024-01-02"),
            income("Others", 99, "2024-01-03"),
        ];

        let income_total = total_by_kind(&txns, TransactionKind::Income);
        let expense_total = total_by_kind(&txns, TransactionKind::Expense);
        assert_eq!(income_total.cents(), 200099);
        assert_eq!(expense_total.cents(), 17345);
        assert_eq!(balance(&txns), income_total - expense_total);
    }

    #[test]
    fn test_ledger_totals() {
        let txns = vec![
            expense("Food", 5000, "2024-01-01"),
            income("Salary", 200000, "2024-01-01"),
        ];
        let totals = LedgerTotals::compute(&txns);
        assert_eq!(totals.balance.to_f64(), 1950.0);
        assert_eq!(totals.transaction_count, 2);
    }
}
