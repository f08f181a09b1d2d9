use rust_decimal::Decimal;

use crate::models::{Direction, Transaction};

/// Income/expense/balance totals over a transaction set.
///
/// Always computed from whatever set the caller is currently showing — the
/// filtered set, not the full ledger — so the numbers follow the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    pub(crate) expenses: Decimal,
    pub(crate) balance: Decimal,
}

impl Totals {
    pub(crate) fn of<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for txn in transactions {
            match txn.direction() {
                Direction::Income => income += txn.amount(),
                Direction::Expense => expenses += txn.amount(),
            }
        }
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Distinct month keys present in the ledger, most recent first.
/// Lexicographic descending order is chronological because the keys are
/// fixed-width "YYYY-MM".
pub(crate) fn available_months(transactions: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = transactions.iter().map(Transaction::month_key).collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

/// The transactions in the selected month; `None` selects everything.
pub(crate) fn filter_by_month<'a>(
    transactions: &'a [Transaction],
    month: Option<&str>,
) -> Vec<&'a Transaction> {
    match month {
        None => transactions.iter().collect(),
        Some(key) => transactions
            .iter()
            .filter(|txn| txn.month_key() == key)
            .collect(),
    }
}
