#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_expense_magnitude_and_sign() {
    let txn =
        Transaction::new("食費", dec!(1200), date("2024-05-10"), Direction::Expense).unwrap();
    assert!(txn.is_expense());
    assert!(!txn.is_income());
    assert_eq!(txn.amount(), dec!(1200));
    assert_eq!(txn.signed_amount(), dec!(-1200));
}

#[test]
fn test_income_magnitude_and_sign() {
    let txn =
        Transaction::new("給料", dec!(300000), date("2024-05-25"), Direction::Income).unwrap();
    assert!(txn.is_income());
    assert_eq!(txn.signed_amount(), dec!(300000));
}

#[test]
fn test_negative_raw_amount_normalized() {
    // Sign on the raw amount never leaks into the magnitude.
    let txn = Transaction::new("Coffee", dec!(-4.50), date("2024-01-15"), Direction::Expense)
        .unwrap();
    assert_eq!(txn.amount(), dec!(4.50));
    assert_eq!(txn.signed_amount(), dec!(-4.50));

    let txn =
        Transaction::new("Refund", dec!(-20), date("2024-01-15"), Direction::Income).unwrap();
    assert_eq!(txn.signed_amount(), dec!(20));
}

#[test]
fn test_sign_always_matches_direction() {
    for direction in [Direction::Expense, Direction::Income] {
        let txn = Transaction::new("Test", dec!(10), date("2024-03-01"), direction).unwrap();
        assert_eq!(txn.is_expense(), txn.signed_amount() < Decimal::ZERO);
    }
}

#[test]
fn test_empty_category_rejected() {
    let err = Transaction::new("", dec!(10), date("2024-01-01"), Direction::Expense);
    assert_eq!(err, Err(InvalidTransaction::EmptyCategory));

    // Whitespace-only counts as empty.
    let err = Transaction::new("   ", dec!(10), date("2024-01-01"), Direction::Expense);
    assert_eq!(err, Err(InvalidTransaction::EmptyCategory));
}

#[test]
fn test_zero_amount_rejected() {
    let err = Transaction::new("食費", Decimal::ZERO, date("2024-01-01"), Direction::Expense);
    assert_eq!(err, Err(InvalidTransaction::ZeroAmount));
}

#[test]
fn test_category_trimmed() {
    let txn =
        Transaction::new("  食費  ", dec!(100), date("2024-01-01"), Direction::Expense).unwrap();
    assert_eq!(txn.category(), "食費");
}

#[test]
fn test_month_key_zero_padded() {
    let txn = Transaction::new("Test", dec!(1), date("2024-03-05"), Direction::Expense).unwrap();
    assert_eq!(txn.month_key(), "2024-03");

    let txn = Transaction::new("Test", dec!(1), date("2024-12-31"), Direction::Income).unwrap();
    assert_eq!(txn.month_key(), "2024-12");
}

// ── Direction ─────────────────────────────────────────────────

#[test]
fn test_direction_from_signed() {
    assert_eq!(Direction::from_signed(dec!(-1)), Direction::Expense);
    assert_eq!(Direction::from_signed(dec!(1)), Direction::Income);
    // Zero never reaches a constructed transaction; treat it as income here.
    assert_eq!(Direction::from_signed(Decimal::ZERO), Direction::Income);
}

#[test]
fn test_direction_toggled() {
    assert_eq!(Direction::Expense.toggled(), Direction::Income);
    assert_eq!(Direction::Income.toggled(), Direction::Expense);
}

#[test]
fn test_direction_display() {
    assert_eq!(format!("{}", Direction::Expense), "Expense");
    assert_eq!(format!("{}", Direction::Income), "Income");
}
