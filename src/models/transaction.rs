use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use super::Direction;

/// Reasons a transaction cannot be constructed from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTransaction {
    #[error("Category is required")]
    EmptyCategory,
    #[error("Amount must not be zero")]
    ZeroAmount,
}

/// One recorded ledger entry.
///
/// The amount is an unsigned magnitude; `direction` carries what a signed
/// amount would encode in its sign. Fields are private so the invariants
/// (non-empty category, magnitude > 0) hold for every value in the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    category: String,
    amount: Decimal,
    date: NaiveDate,
    direction: Direction,
}

impl Transaction {
    /// The only construction point. `raw_amount` may carry a sign; the stored
    /// magnitude is its absolute value and `direction` is the tag.
    pub fn new(
        category: impl Into<String>,
        raw_amount: Decimal,
        date: NaiveDate,
        direction: Direction,
    ) -> Result<Self, InvalidTransaction> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(InvalidTransaction::EmptyCategory);
        }
        if raw_amount.is_zero() {
            return Err(InvalidTransaction::ZeroAmount);
        }
        Ok(Self {
            category,
            amount: raw_amount.abs(),
            date,
            direction,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unsigned magnitude, always positive.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    /// The amount with the direction folded back into its sign.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Expense => -self.amount,
            Direction::Income => self.amount,
        }
    }

    /// "YYYY-MM" grouping key. Fixed width and zero padded, so lexicographic
    /// order is chronological order.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}
