use super::*;

#[test]
fn test_marker_food() {
    assert_eq!(marker("食費"), "🍔");
    assert_eq!(marker("Food & Dining"), "🍔");
    assert_eq!(marker("groceries"), "🍔");
}

#[test]
fn test_marker_transport() {
    assert_eq!(marker("交通費"), "🚃");
    assert_eq!(marker("Train pass"), "🚃");
    assert_eq!(marker("Public Transport"), "🚃");
}

#[test]
fn test_marker_salary() {
    assert_eq!(marker("給料"), "💰");
    assert_eq!(marker("Monthly salary"), "💰");
    assert_eq!(marker("PAYROLL"), "💰");
}

#[test]
fn test_marker_default() {
    assert_eq!(marker("その他"), DEFAULT_MARKER);
    assert_eq!(marker("Hobbies"), DEFAULT_MARKER);
    assert_eq!(marker(""), DEFAULT_MARKER);
}

#[test]
fn test_marker_substring_match() {
    // The keyword can appear anywhere inside the label.
    assert_eq!(marker("5月の食費（外食）"), "🍔");
    assert_eq!(marker("commute card top-up"), "🚃");
}

#[test]
fn test_marker_case_insensitive() {
    assert_eq!(marker("FOOD"), "🍔");
    assert_eq!(marker("Salary"), "💰");
}

#[test]
fn test_marker_first_table_wins() {
    // A label matching two tables resolves to the earlier one.
    assert_eq!(marker("food for train trip"), "🍔");
}
