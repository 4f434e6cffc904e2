//! Dashboard, statistics and settings views

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{CategoryBreakdown, LedgerTotals};
use crate::services::BudgetStatus;
use crate::storage::Settings;

use super::transaction::format_signed_money;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Entries")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Home dashboard: totals plus budget usage
pub fn format_summary(totals: &LedgerTotals, budget: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance:   {}\n",
        format_signed_money(totals.balance, symbol)
    ));
    output.push_str(&format!(
        "Income:    {}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses:  {}\n",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push('\n');

    let budget_label = if budget.budget_limit > 0.0 {
        format!("{}{:.2}", symbol, budget.effective_budget)
    } else {
        format!("{}{:.2} (default)", symbol, budget.effective_budget)
    };
    output.push_str(&format!("Budget:    {}\n", budget_label));
    output.push_str(&format!(
        "Remaining: {}\n",
        budget.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Used:      {:.1}%\n", budget.usage_percent));

    if let Some(alert) = &budget.alert {
        output.push_str(&format!("\n{}: {}\n", alert.title, alert.message));
    }

    output
}

/// Category breakdown for one kind, largest first
pub fn format_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return format!("No {} data yet.\n", breakdown.kind.as_str().to_lowercase());
    }

    let rows: Vec<BreakdownRow> = breakdown
        .shares
        .iter()
        .map(|s| BreakdownRow {
            category: s.category.name().to_string(),
            count: s.count,
            total: s.total.format_with_symbol(symbol),
            share: format!("{:.1}%", s.percentage),
        })
        .collect();

    let mut output = format!(
        "{} by category (total {})\n",
        breakdown.kind,
        breakdown.total.format_with_symbol(symbol)
    );
    output.push_str(&Table::new(rows).with(Style::sharp()).to_string());
    output.push('\n');

    if let Some(largest) = &breakdown.largest {
        output.push_str(&format!(
            "Top category: {} ({})\n",
            largest.category,
            largest.total.format_with_symbol(symbol)
        ));
    }

    output
}

/// Stored settings and session
pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();

    let budget = if settings.budget_limit > 0.0 {
        format!("{}{:.2}", settings.currency_symbol, settings.budget_limit)
    } else {
        "not set".to_string()
    };
    output.push_str(&format!("Monthly budget: {}\n", budget));
    output.push_str(&format!("Currency:       {}\n", settings.currency_symbol));
    output.push_str(&format!(
        "Onboarding:     {}\n",
        if settings.onboarding_completed {
            "completed"
        } else {
            "pending"
        }
    ));
    output.push_str(&format!(
        "Logged in as:   {}\n",
        settings.logged_in_user.as_deref().unwrap_or("(nobody)")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::reports::test_support::{expense, income};
    use crate::services::BudgetAlert;

    #[test]
    fn test_summary_with_alert() {
        let txns = vec![
            expense("Food", 95000, "2024-01-01"),
            income("Salary", 200000, "2024-01-01"),
        ];
        let totals = LedgerTotals::compute(&txns);
        let status = BudgetStatus {
            budget_limit: 0.0,
            effective_budget: 1000.0,
            spent: totals.expense,
            remaining: Money::from_cents(5000),
            usage_percent: 95.0,
            alert: BudgetAlert::for_usage(95.0),
        };

        let text = format_summary(&totals, &status, "$");
        assert!(text.contains("Balance:   +$1050.00"));
        assert!(text.contains("Budget:    $1000.00 (default)"));
        assert!(text.contains("Used:      95.0%"));
        assert!(text.contains("Budget Warning: You're approaching your budget limit! (95% used)"));
    }

    #[test]
    fn test_breakdown_table() {
        let txns = vec![
            expense("Food", 3000, "2024-01-01"),
            expense("Bills", 1000, "2024-01-02"),
        ];
        let breakdown = CategoryBreakdown::compute(&txns, TransactionKind::Expense);

        let text = format_breakdown(&breakdown, "£");
        assert!(text.starts_with("Expense by category (total £40.00)"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Top category: Food (£30.00)"));

        let empty = CategoryBreakdown::compute(&txns, TransactionKind::Income);
        assert_eq!(format_breakdown(&empty, "£"), "No income data yet.\n");
    }

    #[test]
    fn test_settings_view() {
        let text = format_settings(&Settings::default());
        assert!(text.contains("Monthly budget: not set"));
        assert!(text.contains("Logged in as:   (nobody)"));
    }
}
