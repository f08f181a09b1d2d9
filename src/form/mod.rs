use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Direction, InvalidTransaction, Transaction};

/// Why a submit was rejected. Each variant doubles as the message shown to
/// the user; nothing is mutated when one of these comes back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FormError {
    #[error("Category is required")]
    MissingCategory,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must not be zero")]
    ZeroAmount,
    #[error("Date is required")]
    MissingDate,
    #[error("Invalid date: {0} (use YYYY-MM-DD)")]
    InvalidDate(String),
}

impl From<InvalidTransaction> for FormError {
    fn from(err: InvalidTransaction) -> Self {
        match err {
            InvalidTransaction::EmptyCategory => Self::MissingCategory,
            InvalidTransaction::ZeroAmount => Self::ZeroAmount,
        }
    }
}

/// Draft state for one ledger entry: the four fields the user fills in
/// before a submit. Text fields stay raw strings until validation so the
/// form can hold whatever the user typed.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) category: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) direction: Direction,
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self {
            category: String::new(),
            amount: String::new(),
            date: String::new(),
            direction: Direction::Expense,
        }
    }

    /// Validate the draft and construct the transaction. The draft itself is
    /// untouched — callers `clear()` only after the add went through, so a
    /// rejected submit leaves everything as typed.
    pub(crate) fn submit(&self) -> Result<Transaction, FormError> {
        let raw_amount = self.amount.trim();
        if raw_amount.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount = Decimal::from_str(raw_amount)
            .map_err(|_| FormError::InvalidAmount(raw_amount.to_string()))?;

        let raw_date = self.date.trim();
        if raw_date.is_empty() {
            return Err(FormError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(raw_date.to_string()))?;

        // Category presence and the zero-amount check live in the
        // constructor; the sign of a typed amount is discarded there too, so
        // "-1200" with direction Income still comes out as income.
        Ok(Transaction::new(
            self.category.as_str(),
            amount,
            date,
            self.direction,
        )?)
    }

    /// Reset every field to its default so the form is ready for the next
    /// entry. Nothing is remembered across submits.
    pub(crate) fn clear(&mut self) {
        self.category.clear();
        self.amount.clear();
        self.date.clear();
        self.direction = Direction::Expense;
    }
}

#[cfg(test)]
mod tests;
