#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::Direction;

fn filled() -> EntryForm {
    EntryForm {
        category: "食費".into(),
        amount: "1200".into(),
        date: "2024-05-10".into(),
        direction: Direction::Expense,
    }
}

// ── Valid submits ─────────────────────────────────────────────

#[test]
fn test_submit_expense() {
    let txn = filled().submit().unwrap();
    assert_eq!(txn.category(), "食費");
    assert_eq!(txn.amount(), dec!(1200));
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-1200));
    assert_eq!(txn.month_key(), "2024-05");
}

#[test]
fn test_submit_income() {
    let mut form = filled();
    form.category = "給料".into();
    form.amount = "300000".into();
    form.direction = Direction::Income;

    let txn = form.submit().unwrap();
    assert!(txn.is_income());
    assert_eq!(txn.signed_amount(), dec!(300000));
}

#[test]
fn test_submit_direction_wins_over_typed_sign() {
    let mut form = filled();
    form.amount = "-1200".into();
    form.direction = Direction::Income;

    let txn = form.submit().unwrap();
    assert!(txn.is_income());
    assert_eq!(txn.amount(), dec!(1200));
}

#[test]
fn test_submit_decimal_amount() {
    let mut form = filled();
    form.amount = "4.50".into();
    let txn = form.submit().unwrap();
    assert_eq!(txn.amount(), dec!(4.50));
}

#[test]
fn test_submit_trims_whitespace() {
    let mut form = filled();
    form.category = "  食費 ".into();
    form.amount = " 1200 ".into();
    form.date = " 2024-05-10 ".into();
    let txn = form.submit().unwrap();
    assert_eq!(txn.category(), "食費");
    assert_eq!(txn.amount(), dec!(1200));
}

// ── Rejections ────────────────────────────────────────────────

#[test]
fn test_missing_category_rejected() {
    let mut form = filled();
    form.category = String::new();
    assert_eq!(form.submit(), Err(FormError::MissingCategory));
}

#[test]
fn test_missing_amount_rejected() {
    let mut form = filled();
    form.amount = String::new();
    assert_eq!(form.submit(), Err(FormError::MissingAmount));
}

#[test]
fn test_zero_amount_rejected() {
    let mut form = filled();
    form.amount = "0".into();
    assert_eq!(form.submit(), Err(FormError::ZeroAmount));

    form.amount = "0.00".into();
    assert_eq!(form.submit(), Err(FormError::ZeroAmount));
}

#[test]
fn test_unparseable_amount_rejected() {
    let mut form = filled();
    form.amount = "12oo".into();
    assert_eq!(
        form.submit(),
        Err(FormError::InvalidAmount("12oo".into()))
    );
}

#[test]
fn test_missing_date_rejected() {
    let mut form = filled();
    form.date = String::new();
    assert_eq!(form.submit(), Err(FormError::MissingDate));
}

#[test]
fn test_unparseable_date_rejected() {
    let mut form = filled();
    form.date = "05/10/2024".into();
    assert_eq!(
        form.submit(),
        Err(FormError::InvalidDate("05/10/2024".into()))
    );
}

#[test]
fn test_rejected_submit_leaves_draft_as_typed() {
    let mut form = filled();
    form.amount = "0".into();
    let _ = form.submit();
    assert_eq!(form.category, "食費");
    assert_eq!(form.amount, "0");
    assert_eq!(form.date, "2024-05-10");
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn test_clear_resets_all_fields() {
    let mut form = filled();
    form.direction = Direction::Income;
    form.clear();
    assert!(form.category.is_empty());
    assert!(form.amount.is_empty());
    assert!(form.date.is_empty());
    assert_eq!(form.direction, Direction::Expense);
}

#[test]
fn test_error_messages_name_the_field() {
    assert_eq!(FormError::MissingCategory.to_string(), "Category is required");
    assert_eq!(
        FormError::InvalidDate("x".into()).to_string(),
        "Invalid date: x (use YYYY-MM-DD)"
    );
}
