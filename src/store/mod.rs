use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Direction, Transaction};

/// The one key the application persists under.
const TRANSACTIONS_KEY: &str = "transactions";

/// Wire shape of a persisted transaction: signed amount plus the expense
/// flag, exactly as the store contract spells it. The tagged in-memory model
/// only exists on this side of the conversions below.
#[derive(Debug, Serialize, Deserialize)]
struct TransactionRecord {
    category: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    date: String,
    #[serde(rename = "isExpense")]
    is_expense: bool,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            category: txn.category().to_string(),
            amount: txn.signed_amount(),
            date: txn.date().format("%Y-%m-%d").to_string(),
            is_expense: txn.is_expense(),
        }
    }
}

impl TransactionRecord {
    /// `isExpense` is the classification authority; the magnitude comes from
    /// `|amount|`. Returns `None` when the record cannot satisfy the model
    /// invariants (unparseable date, empty category, zero amount) — such
    /// records are dropped from the load, not surfaced as errors.
    fn into_transaction(self) -> Option<Transaction> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let direction = if self.is_expense {
            Direction::Expense
        } else {
            Direction::Income
        };
        Transaction::new(self.category, self.amount, date, direction).ok()
    }
}

/// Durable key-value store backed by one JSON file per key under the data
/// directory. The only thing that survives a restart.
pub(crate) struct Store {
    dir: PathBuf,
}

impl Store {
    pub(crate) fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the full transaction list. An absent file or a value that fails
    /// to parse as an array of records is treated as no data, never an error.
    pub(crate) fn load(&self) -> Result<Vec<Transaction>> {
        let raw = match fs::read_to_string(self.key_path(TRANSACTIONS_KEY)) {
            Ok(raw) => raw,
            Err(_) => return Ok(Vec::new()),
        };
        let records: Vec<TransactionRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(records
            .into_iter()
            .filter_map(TransactionRecord::into_transaction)
            .collect())
    }

    /// Write the complete list through, replacing prior contents. Writes to a
    /// sibling temp file first so a crash mid-write leaves the old data
    /// intact.
    pub(crate) fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let records: Vec<TransactionRecord> =
            transactions.iter().map(TransactionRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;

        let path = self.key_path(TRANSACTIONS_KEY);
        let tmp = self.dir.join(format!("{TRANSACTIONS_KEY}.json.tmp"));
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write store file: {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace store file: {}", path.display()))?;
        Ok(())
    }
}
