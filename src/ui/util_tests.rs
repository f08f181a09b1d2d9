use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── Amount formatting ─────────────────────────────────────────

#[test]
fn test_group_digits() {
    assert_eq!(group_digits(dec!(0)), "0");
    assert_eq!(group_digits(dec!(999)), "999");
    assert_eq!(group_digits(dec!(1200)), "1,200");
    assert_eq!(group_digits(dec!(300000)), "300,000");
    assert_eq!(group_digits(dec!(1234567)), "1,234,567");
}

#[test]
fn test_group_digits_ignores_sign() {
    assert_eq!(group_digits(dec!(-1200)), "1,200");
}

#[test]
fn test_group_digits_keeps_fraction_only_when_present() {
    assert_eq!(group_digits(dec!(4.50)), "4.5");
    assert_eq!(group_digits(dec!(1234.25)), "1,234.25");
    assert_eq!(group_digits(dec!(1200.00)), "1,200");
}

#[test]
fn test_format_signed_yen() {
    assert_eq!(format_signed_yen(dec!(-1200)), "-1,200円");
    assert_eq!(format_signed_yen(dec!(300000)), "+300,000円");
    assert_eq!(format_signed_yen(Decimal::ZERO), "0円");
}

// ── Truncation ────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("食費", 10), "食費");
    assert_eq!(truncate("abc", 3), "abc");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("abcdefgh", 5), "abcd…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("食費と交通費とその他", 5), "食費と交…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate("abc", 0), "");
}

// ── Cursor movement ───────────────────────────────────────────

#[test]
fn test_move_cursor_bounds() {
    let mut index = 0;
    move_cursor(&mut index, -1, 5);
    assert_eq!(index, 0);

    move_cursor(&mut index, 1, 5);
    assert_eq!(index, 1);

    move_cursor(&mut index, 10, 5);
    assert_eq!(index, 4);
}

#[test]
fn test_move_cursor_empty_list() {
    let mut index = 3;
    move_cursor(&mut index, 1, 0);
    assert_eq!(index, 0);
}

#[test]
fn test_clamp_scroll_follows_cursor() {
    let mut scroll = 0;
    // Cursor below the page pulls the scroll down.
    clamp_scroll(12, &mut scroll, 10);
    assert_eq!(scroll, 3);

    // Cursor above the page pulls the scroll up.
    clamp_scroll(1, &mut scroll, 10);
    assert_eq!(scroll, 1);

    // Cursor inside the page leaves the scroll alone.
    clamp_scroll(5, &mut scroll, 10);
    assert_eq!(scroll, 1);
}
