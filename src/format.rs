//! Number, currency and percent formatting shared by every calculator.
//!
//! None of these functions fail: non-finite input renders as zero.

/// Suffix for the 10k-yen currency unit.
pub const MANEN_SUFFIX: &str = "万円";

/// Round to the nearest integer and group thousands with `,`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }

    #[allow(clippy::cast_possible_truncation)] // saturating cast is the intended clamp
    let rounded = n.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    group_thousands(&digits, rounded < 0)
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Like [`format_number`] but keeps `digits` decimals,
/// e.g. `format_decimal(1234.5, 1)` → `"1,234.5"`.
#[must_use]
pub fn format_decimal(n: f64, digits: usize) -> String {
    if digits == 0 || !n.is_finite() {
        return format_number(n);
    }

    let fixed = format!("{:.digits$}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    // -0.04 at one decimal prints as 0.0, not -0.0
    let negative = n < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!("{}.{frac_part}", group_thousands(int_part, negative))
}

/// Round to the nearest integer and append the `万円` suffix.
#[must_use]
pub fn format_manen(n: f64) -> String {
    format!("{}{MANEN_SUFFIX}", format_number(n))
}

/// [`format_decimal`] with the `万円` suffix.
#[must_use]
pub fn format_manen_decimal(n: f64, digits: usize) -> String {
    format!("{}{MANEN_SUFFIX}", format_decimal(n, digits))
}

/// Fixed-point percentage, e.g. `format_percent(5.598, 1)` → `"5.6%"`.
#[must_use]
pub fn format_percent(n: f64, digits: usize) -> String {
    let value = if n.is_finite() { n } else { 0.0 };
    format!("{value:.digits$}%")
}

/// Escape text for HTML and SVG output.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
