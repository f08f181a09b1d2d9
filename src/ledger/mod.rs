use anyhow::Result;

use crate::models::Transaction;
use crate::store::Store;

/// The application root state: the one owner of the in-memory transaction
/// list.
///
/// Lifecycle: `open` reads the store exactly once; `add` appends and writes
/// the whole list back through before returning. Everything else gets
/// read-only snapshots, so the store copy can never be a second source of
/// truth. Entries are append-only — there is no edit or delete.
pub(crate) struct Ledger {
    store: Store,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn open(store: Store) -> Result<Self> {
        let transactions = store.load()?;
        Ok(Self {
            store,
            transactions,
        })
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Append in entry order and persist the new full list.
    pub(crate) fn add(&mut self, txn: Transaction) -> Result<()> {
        self.transactions.push(txn);
        self.store.save(&self.transactions)?;
        Ok(())
    }
}
