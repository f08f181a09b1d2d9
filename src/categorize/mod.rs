/// Marker shown for categories no keyword table claims.
pub(crate) const DEFAULT_MARKER: &str = "📝";

/// Keyword tables, first match wins. Patterns are lowercase; matching is a
/// case-insensitive substring test, so "Food & Dining" and "食費（外食）"
/// both resolve.
const MARKERS: &[(&str, &[&str])] = &[
    (
        "🍔",
        &["食費", "食事", "food", "groc", "meal", "lunch", "dinner"],
    ),
    (
        "🚃",
        &["交通費", "交通", "transport", "train", "bus", "taxi", "commute"],
    ),
    (
        "💰",
        &["給料", "給与", "salary", "payroll", "wage", "income"],
    ),
];

/// Decoration marker for a category label.
pub(crate) fn marker(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    for (marker, keywords) in MARKERS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return marker;
        }
    }
    DEFAULT_MARKER
}

#[cfg(test)]
mod tests;
