#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, FormField};
use crate::ledger::Ledger;
use crate::models::Direction;
use crate::store::Store;

fn open_ledger(dir: &tempfile::TempDir) -> Ledger {
    Ledger::open(Store::open(dir.path()).unwrap()).unwrap()
}

fn fill_form(app: &mut App) {
    app.form.category = "食費".into();
    app.form.amount = "1200".into();
    app.form.date = "2024-05-10".into();
    app.form.direction = Direction::Expense;
}

#[test]
fn test_submit_appends_persists_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = open_ledger(&dir);
    let mut app = App::new();
    fill_form(&mut app);
    app.form_focus = FormField::Submit;

    app.submit_form(&mut ledger).unwrap();

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].signed_amount(), dec!(-1200));
    assert_eq!(app.totals.expenses, dec!(1200));
    assert_eq!(app.totals.balance, dec!(-1200));

    // Draft fields all reset, focus back on the first field.
    assert!(app.form.category.is_empty());
    assert!(app.form.amount.is_empty());
    assert!(app.form.date.is_empty());
    assert_eq!(app.form.direction, Direction::Expense);
    assert_eq!(app.form_focus, FormField::Category);

    // Written through: a fresh ledger over the same store sees the entry.
    assert_eq!(open_ledger(&dir).len(), 1);
}

#[test]
fn test_invalid_submit_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = open_ledger(&dir);
    let mut app = App::new();
    fill_form(&mut app);
    app.form.category = String::new();

    app.submit_form(&mut ledger).unwrap();

    assert_eq!(ledger.len(), 0);
    // Save was never invoked — nothing was written under the store key.
    assert!(!dir.path().join("transactions.json").exists());
    // The draft survives for correction.
    assert_eq!(app.form.amount, "1200");
    assert!(app.status_message.contains("Category"));
}

#[test]
fn test_zero_amount_submit_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = open_ledger(&dir);
    let mut app = App::new();
    fill_form(&mut app);
    app.form.amount = "0".into();

    app.submit_form(&mut ledger).unwrap();

    assert_eq!(ledger.len(), 0);
    assert!(!dir.path().join("transactions.json").exists());
}

#[test]
fn test_month_filter_drives_rows_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = open_ledger(&dir);
    let mut app = App::new();

    fill_form(&mut app);
    app.submit_form(&mut ledger).unwrap();

    app.form.category = "給料".into();
    app.form.amount = "300000".into();
    app.form.date = "2024-06-25".into();
    app.form.direction = Direction::Income;
    app.submit_form(&mut ledger).unwrap();

    assert_eq!(app.months, ["2024-06", "2024-05"]);

    app.set_month(&ledger, Some("2024-05".into()));
    assert_eq!(app.rows.len(), 1);
    assert_eq!(app.totals.balance, dec!(-1200));

    app.set_month(&ledger, Some("2024-06".into()));
    assert_eq!(app.rows.len(), 1);
    assert_eq!(app.totals.balance, dec!(300000));

    app.set_month(&ledger, None);
    assert_eq!(app.rows.len(), 2);
    assert_eq!(app.totals.balance, dec!(298800));
}

#[test]
fn test_cycle_month_steps_through_all_stops() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = open_ledger(&dir);
    let mut app = App::new();

    fill_form(&mut app);
    app.submit_form(&mut ledger).unwrap();

    app.form.category = "給料".into();
    app.form.amount = "300000".into();
    app.form.date = "2024-06-25".into();
    app.form.direction = Direction::Income;
    app.submit_form(&mut ledger).unwrap();

    // all time -> newest -> older -> wraps back to all time
    assert_eq!(app.month_filter, None);
    app.cycle_month(&ledger, 1);
    assert_eq!(app.month_filter.as_deref(), Some("2024-06"));
    app.cycle_month(&ledger, 1);
    assert_eq!(app.month_filter.as_deref(), Some("2024-05"));
    app.cycle_month(&ledger, 1);
    assert_eq!(app.month_filter, None);

    // And back the other way.
    app.cycle_month(&ledger, -1);
    assert_eq!(app.month_filter.as_deref(), Some("2024-05"));
}
