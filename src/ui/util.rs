use rust_decimal::Decimal;

/// Comma-group a magnitude: `1234567` → `"1,234,567"`. Fractional digits are
/// kept only when the value has any.
pub(crate) fn group_digits(val: Decimal) -> String {
    let s = val.abs().normalize().to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Render a signed amount as yen: `-1200` → `"-1,200円"`, `300000` →
/// `"+300,000円"`. Zero renders without a sign.
pub(crate) fn format_signed_yen(val: Decimal) -> String {
    if val < Decimal::ZERO {
        format!("-{}円", group_digits(val))
    } else if val > Decimal::ZERO {
        format!("+{}円", group_digits(val))
    } else {
        "0円".to_string()
    }
}

/// Truncate to `max` characters, appending "…" when something was cut.
/// Counts chars, not bytes, so multi-byte labels are safe.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Move a list cursor by `delta`, clamped to `[0, len)`.
pub(crate) fn move_cursor(index: &mut usize, delta: i32, len: usize) {
    if len == 0 {
        *index = 0;
        return;
    }
    let moved = if delta < 0 {
        index.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        index.saturating_add(delta as usize)
    };
    *index = moved.min(len - 1);
}

/// Keep `scroll` positioned so `index` stays inside the visible page.
pub(crate) fn clamp_scroll(index: usize, scroll: &mut usize, page: usize) {
    if index < *scroll {
        *scroll = index;
    } else if page > 0 && index >= *scroll + page {
        *scroll = index + 1 - page;
    }
}
