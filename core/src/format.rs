//! Number formatting shared by the page tables and the chart axes.
//!
//! RULE: nothing here ever fails. Non-finite input renders as zero —
//! the report must stay printable for any parameter set.

/// Thousands-separated integer rendering, no scientific notation.
///
/// `1234567.89` renders as `"1,234,568"`; non-finite values render as `"0"`.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Currency rendering: `$` prefix, thousands separator, zero decimals.
///
/// The sign sits between the `$` and the digits, and anything
/// unformattable falls back to `"$0"`.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    format!("${}", thousands(value))
}

/// Percentage with one decimal, from a 0..1 ratio.
pub fn percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", ratio * 100.0)
}
