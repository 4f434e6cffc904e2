//! Transaction repository
//!
//! The whole collection is kept as one serialized JSON array under the
//! `transactions` key of the preference store. Every mutation decodes the
//! list, changes it and writes the full list back (last write wins).

use std::sync::Arc;

use crate::error::PocketError;
use crate::models::{Transaction, TransactionId};

use super::prefs::PreferenceStore;

/// Preference key holding the serialized transaction list
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Repository for transaction persistence
pub struct TransactionRepository {
    prefs: Arc<PreferenceStore>,
}

impl TransactionRepository {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    /// All transactions in insertion order
    ///
    /// A missing or unreadable blob yields an empty list rather than an error.
    pub fn get_all(&self) -> Result<Vec<Transaction>, PocketError> {
        let Some(blob) = self.prefs.get_string(TRANSACTIONS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Transaction>>(&blob) {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::warn!(error = %e, "stored transactions are unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, PocketError> {
        Ok(self.get_all()?.into_iter().find(|t| &t.id == id))
    }

    pub fn count(&self) -> Result<usize, PocketError> {
        Ok(self.get_all()?.len())
    }

    /// Append a transaction
    pub fn insert(&self, txn: Transaction) -> Result<(), PocketError> {
        let mut transactions = self.get_all()?;
        transactions.push(txn);
        self.save_all(&transactions)
    }

    /// Replace the entry with the same id; returns false (and writes nothing)
    /// when no entry matches
    pub fn replace(&self, txn: Transaction) -> Result<bool, PocketError> {
        let mut transactions = self.get_all()?;
        match transactions.iter().position(|t| t.id == txn.id) {
            Some(index) => {
                transactions[index] = txn;
                self.save_all(&transactions)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every entry with `id`; persists even if nothing matched
    pub fn delete(&self, id: &TransactionId) -> Result<usize, PocketError> {
        let mut transactions = self.get_all()?;
        let before = transactions.len();
        transactions.retain(|t| &t.id != id);
        let removed = before - transactions.len();
        self.save_all(&transactions)?;
        Ok(removed)
    }

    /// Drop the stored collection entirely
    pub fn clear(&self) -> Result<(), PocketError> {
        self.prefs.remove(TRANSACTIONS_KEY)
    }

    /// Overwrite the stored collection
    pub fn save_all(&self, transactions: &[Transaction]) -> Result<(), PocketError> {
        let blob = serde_json::to_string(transactions)
            .map_err(|e| PocketError::Storage(format!("Failed to serialize transactions: {}", e)))?;
        self.prefs.put_string(TRANSACTIONS_KEY, blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseCategory, Money};
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Arc<PreferenceStore>, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let prefs = Arc::new(PreferenceStore::open(temp_dir.path().join("prefs.json")).unwrap());
        let repo = TransactionRepository::new(Arc::clone(&prefs));
        (temp_dir, prefs, repo)
    }

    fn food(cents: i64) -> Transaction {
        Transaction::new(
            Category::Expense(ExpenseCategory::Food),
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, _prefs, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_preserves_order() {
        let (_temp_dir, _prefs, repo) = create_test_repo();
        let first = food(100);
        let second = food(200);

        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();

        assert_eq!(repo.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, _prefs, repo) = create_test_repo();
        let txn = food(5000);
        let id = txn.id.clone();
        repo.insert(txn).unwrap();

        let prefs = Arc::new(PreferenceStore::open(temp_dir.path().join("prefs.json")).unwrap());
        let reopened = TransactionRepository::new(prefs);
        let retrieved = reopened.get(&id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 5000);
    }

    #[test]
    fn test_replace_unknown_id_writes_nothing() {
        let (_temp_dir, _prefs, repo) = create_test_repo();
        repo.insert(food(100)).unwrap();

        assert!(!repo.replace(food(999)).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let (_temp_dir, _prefs, repo) = create_test_repo();
        let txn = food(100);
        repo.save_all(&[txn.clone(), txn.clone(), food(300)]).unwrap();

        assert_eq!(repo.delete(&txn.id).unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.delete(&txn.id).unwrap(), 0);
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let (_temp_dir, prefs, repo) = create_test_repo();
        prefs.put_string(TRANSACTIONS_KEY, "[{not valid").unwrap();

        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let (_temp_dir, prefs, repo) = create_test_repo();
        repo.insert(food(100)).unwrap();
        repo.clear().unwrap();

        assert!(!prefs.contains(TRANSACTIONS_KEY).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
