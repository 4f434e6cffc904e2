//! Transaction kinds and their closed category sets
//!
//! Each kind owns a fixed list of categories. A [`Category`] carries its kind
//! in the variant, so an expense can never be filed under "Salary".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expense or income classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Expense, TransactionKind::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Categories a transaction of this kind may use, in display order
    pub fn categories(&self) -> Vec<Category> {
        match self {
            Self::Expense => ExpenseCategory::ALL
                .iter()
                .copied()
                .map(Category::Expense)
                .collect(),
            Self::Income => IncomeCategory::ALL
                .iter()
                .copied()
                .map(Category::Income)
                .collect(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(CategoryError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Others,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Entertainment,
        Self::Others,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    Salary,
    Business,
    Investment,
    Others,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 4] =
        [Self::Salary, Self::Business, Self::Investment, Self::Others];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Business => "Business",
            Self::Investment => "Investment",
            Self::Others => "Others",
        }
    }
}

/// A category tagged with the kind it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Expense(ExpenseCategory),
    Income(IncomeCategory),
}

impl Category {
    /// Look up `name` in the category set of `kind` (case-insensitive)
    pub fn parse(kind: TransactionKind, name: &str) -> Result<Self, CategoryError> {
        let wanted = name.trim();
        kind.categories()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError::NotInKind {
                kind,
                category: name.to_string(),
            })
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Expense(_) => TransactionKind::Expense,
            Self::Income(_) => TransactionKind::Income,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Expense(c) => c.name(),
            Self::Income(c) => c.name(),
        }
    }

    /// Opaque icon reference for this kind + category
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Expense(ExpenseCategory::Food) => "ic_food",
            Self::Expense(ExpenseCategory::Transport) => "ic_transport",
            Self::Expense(ExpenseCategory::Bills) => "ic_bills",
            Self::Expense(ExpenseCategory::Entertainment) => "ic_entertainment",
            Self::Expense(ExpenseCategory::Others) => "ic_other_expense",
            Self::Income(IncomeCategory::Salary) => "ic_salary",
            Self::Income(IncomeCategory::Business) => "ic_business",
            Self::Income(IncomeCategory::Investment) => "ic_investment",
            Self::Income(IncomeCategory::Others) => "ic_other_income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while resolving kinds and categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    UnknownKind(String),
    NotInKind {
        kind: TransactionKind,
        category: String,
    },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(s) => {
                write!(f, "Unknown transaction type '{}' (expected Expense or Income)", s)
            }
            Self::NotInKind { kind, category } => {
                let allowed: Vec<&str> = kind.categories().iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "'{}' is not a valid {} category (expected one of: {})",
                    category,
                    kind,
                    allowed.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CategoryError {}
