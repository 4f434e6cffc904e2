//! Read-only aggregation over transaction snapshots
//!
//! Everything here is a pure function of a `&[Transaction]` slice, usually
//! the result of `LedgerService::list`. Nothing is persisted.

pub mod category;
pub mod history;
pub mod summary;

pub use category::{
    group_by_category, largest_category, CategoryBreakdown, CategoryShare, CategoryTotal,
    CategoryTotals,
};
pub use history::{group_by_date, DateGroup};
pub use summary::{balance, total_by_kind, LedgerTotals};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveTime};

    use crate::models::{Category, Money, Transaction, TransactionKind};

    fn build(kind: TransactionKind, category: &str, cents: i64, date: &str) -> Transaction {
        Transaction::new(
            Category::parse(kind, category).unwrap(),
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap()
    }

    pub fn expense(category: &str, cents: i64, date: &str) -> Transaction {
        build(TransactionKind::Expense, category, cents, date)
    }

    pub fn income(category: &str, cents: i64, date: &str) -> Transaction {
        build(TransactionKind::Income, category, cents, date)
    }
}
