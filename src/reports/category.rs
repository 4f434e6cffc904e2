//! Category breakdown
//!
//! Per-category totals for one kind, kept in the order each category first
//! appears in the ledger. That order is what breaks ties in
//! [`CategoryTotals::largest`].

use crate::models::{Category, Money, Transaction, TransactionKind};

/// Total and entry count for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub count: usize,
}

/// Ordered category → total mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Category with the highest total; the earliest one wins a tie
    pub fn largest(&self) -> Option<&CategoryTotal> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if current.total >= entry.total => Some(current),
            _ => Some(entry),
        })
    }
}

/// Sum amounts per category for transactions of `kind`
pub fn group_by_category(transactions: &[Transaction], kind: TransactionKind) -> CategoryTotals {
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.kind() == kind) {
        match entries.iter_mut().find(|e| e.category == txn.category) {
            Some(entry) => {
                entry.total += txn.amount;
                entry.count += 1;
            }
            None => entries.push(CategoryTotal {
                category: txn.category,
                total: txn.amount,
                count: 1,
            }),
        }
    }

    CategoryTotals { entries }
}

/// Category with the highest total for `kind`
pub fn largest_category(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Option<CategoryTotal> {
    group_by_category(transactions, kind).largest().copied()
}

/// One slice of the breakdown chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Share of the kind's total, 0-100
    pub percentage: f64,
}

/// Shares per category, largest first, plus the highlighted category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub kind: TransactionKind,
    pub total: Money,
    pub shares: Vec<CategoryShare>,
    pub largest: Option<CategoryTotal>,
}

impl CategoryBreakdown {
    pub fn compute(transactions: &[Transaction], kind: TransactionKind) -> Self {
        let totals = group_by_category(transactions, kind);
        let total = totals.total();

        let mut shares: Vec<CategoryShare> = totals
            .iter()
            .map(|e| CategoryShare {
                category: e.category,
                total: e.total,
                count: e.count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    e.total.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();
        // Stable: equal totals keep first-appearance order
        shares.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            kind,
            total,
            shares,
            largest: totals.largest().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};
    use crate::reports::summary::total_by_kind;
    use crate::reports::test_support::{expense, income};

    fn sample() -> Vec<Transaction> {
        vec![
            expense("Transport", 1500, "2024-01-01"),
            expense("Food", 2000, "2024-01-01"),
            income("Salary", 300000, "2024-01-02"),
            expense("Food", 1000, "2024-01-03"),
            expense("Bills", 3000, "2024-01-03"),
        ]
    }

    #[test]
    fn test_group_by_category_restricted_to_kind() {
        let totals = group_by_category(&sample(), TransactionKind::Expense);

        let order: Vec<_> = totals.iter().map(|e| e.category.name()).collect();
        assert_eq!(order, vec!["Transport", "Food", "Bills"]);
        assert_eq!(
            totals.get(Category::Expense(ExpenseCategory::Food)),
            Some(Money::from_cents(3000))
        );
        assert_eq!(totals.get(Category::Income(IncomeCategory::Salary)), None);
    }

    #[test]
    fn test_category_totals_sum_to_kind_total() {
        let txns = sample();
        for kind in TransactionKind::ALL {
            assert_eq!(
                group_by_category(&txns, kind).total(),
                total_by_kind(&txns, kind)
            );
        }
    }

    #[test]
    fn test_largest_tie_goes_to_first_seen() {
        // Food and Bills both reach 3000; Food appeared first
        let largest = largest_category(&sample(), TransactionKind::Expense).unwrap();
        assert_eq!(largest.category, Category::Expense(ExpenseCategory::Food));
        assert_eq!(largest.total, Money::from_cents(3000));
    }

    #[test]
    fn test_largest_of_empty_is_none() {
        assert!(largest_category(&[], TransactionKind::Income).is_none());
    }

    #[test]
    fn test_breakdown_shares() {
        let breakdown = CategoryBreakdown::compute(&sample(), TransactionKind::Expense);

        let order: Vec<_> = breakdown.shares.iter().map(|s| s.category.name()).collect();
        assert_eq!(order, vec!["Food", "Bills", "Transport"]);

        let sum: f64 = breakdown.shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((breakdown.shares[2].percentage - 20.0).abs() < 1e-9);
        assert_eq!(
            breakdown.largest.map(|l| l.category),
            Some(Category::Expense(ExpenseCategory::Food))
        );
    }
}
