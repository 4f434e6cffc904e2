//! Transaction history grouped by day

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// All transactions of one date with the day's net total
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    /// Income counted positive, expenses negative
    pub total: Money,
    pub transactions: Vec<Transaction>,
}

/// Partition transactions by date
///
/// Groups appear in the order their date is first seen; transactions keep
/// their relative order inside each group.
pub fn group_by_date(transactions: &[Transaction]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for txn in transactions {
        match groups.iter_mut().find(|g| g.date == txn.date) {
            Some(group) => {
                group.total += txn.signed_amount();
                group.transactions.push(txn.clone());
            }
            None => groups.push(DateGroup {
                date: txn.date,
                total: txn.signed_amount(),
                transactions: vec![txn.clone()],
            }),
        }
    }

    groups
}
