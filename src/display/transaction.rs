//! Transaction display formatting
//!
//! Register rows, detail views and the day-grouped history. Amounts carry
//! the user's currency symbol and a sign: `-` for expenses, `+` for income.

use crate::models::{Money, Transaction, TransactionKind, DATE_FORMAT, TIME_FORMAT};
use crate::reports::DateGroup;

/// Day header format used by the history view
pub const HISTORY_DATE_FORMAT: &str = "%B %d, %Y";

/// Format an amount with a leading sign for non-zero values
pub fn format_signed_money(amount: Money, symbol: &str) -> String {
    if amount.is_negative() || amount.is_zero() {
        amount.format_with_symbol(symbol)
    } else {
        format!("+{}", amount.format_with_symbol(symbol))
    }
}

/// `-$50.00` for an expense, `+$2000.00` for income
pub fn format_transaction_amount(txn: &Transaction, symbol: &str) -> String {
    match txn.kind() {
        TransactionKind::Expense => format!("-{}", txn.amount.format_with_symbol(symbol)),
        TransactionKind::Income => format!("+{}", txn.amount.format_with_symbol(symbol)),
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:8} {} {} {:7} {:14} {:>14}",
        txn.id.short(),
        txn.date.format(DATE_FORMAT),
        txn.time.format(TIME_FORMAT),
        txn.kind().as_str(),
        truncate(txn.category.name(), 14),
        format_transaction_amount(txn, symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:5} {:7} {:14} {:>14}\n",
        "ID", "Date", "Time", "Type", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(63));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_transaction_amount(txn, symbol)
    ));
    output.push_str(&format!("Date:        {}\n", txn.date.format(DATE_FORMAT)));
    output.push_str(&format!("Time:        {}\n", txn.time.format(TIME_FORMAT)));
    output.push_str(&format!("Icon:        {}\n", txn.icon()));

    if let Some(note) = &txn.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

/// History view: one header per day with the day's signed total
pub fn format_history(groups: &[DateGroup], symbol: &str) -> String {
    if groups.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{:40} {:>14}\n",
            group.date.format(HISTORY_DATE_FORMAT).to_string(),
            format_signed_money(group.total, symbol)
        ));
        for txn in &group.transactions {
            let label = match &txn.note {
                Some(note) => format!("{} ({})", txn.category.name(), note),
                None => txn.category.name().to_string(),
            };
            output.push_str(&format!(
                "  {} {:32} {:>14}\n",
                txn.time.format(TIME_FORMAT),
                truncate(&label, 32),
                format_transaction_amount(txn, symbol)
            ));
        }
    }

    output
}

/// Pad or cut a string to `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::group_by_date;
    use crate::reports::test_support::{expense, income};

    #[test]
    fn test_signed_transaction_amounts() {
        assert_eq!(
            format_transaction_amount(&expense("Food", 5000, "2024-01-01"), "$"),
            "-$50.00"
        );
        assert_eq!(
            format_transaction_amount(&income("Salary", 200000, "2024-01-01"), "$"),
            "+$2000.00"
        );
        assert_eq!(
            format_transaction_amount(&income("Salary", 1234, "2024-01-01"), "Rs"),
            "+Rs12.34"
        );
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(format_signed_money(Money::from_cents(195000), "$"), "+$1950.00");
        assert_eq!(format_signed_money(Money::from_cents(-5), "€"), "-€0.05");
        assert_eq!(format_signed_money(Money::zero(), "$"), "$0.00");
    }

    #[test]
    fn test_history_headers() {
        let txns = vec![
            expense("Food", 5000, "2024-01-01"),
            income("Salary", 200000, "2024-01-01").with_note("January"),
        ];
        let text = format_history(&group_by_date(&txns), "$");

        let first = text.lines().next().unwrap();
        assert!(first.starts_with("January 01, 2024"));
        assert!(first.ends_with("+$1950.00"));
        assert!(text.contains("Salary (January)"));
        assert!(text.contains("-$50.00"));
    }

    #[test]
    fn test_register_and_details() {
        assert_eq!(format_transaction_register(&[], "$"), "No transactions found.\n");

        let txn = expense("Entertainment", 1999, "2024-03-04");
        let register = format_transaction_register(std::slice::from_ref(&txn), "$");
        assert!(register.contains("Entertainment"));
        assert!(register.contains(txn.id.short()));

        let details = format_transaction_details(&txn, "$");
        assert!(details.contains("Amount:      -$19.99"));
        assert!(details.contains("Icon:        ic_entertainment"));
    }
}
