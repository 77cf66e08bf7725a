/// Shown wherever a metric is undefined.
pub const NOT_AVAILABLE: &str = "N/A";

/// How a number is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Fraction as a percentage with two decimals: `0.1` -> `10.00%`.
    Percent,
    /// Amount with thousands separators and two decimals.
    Money,
    /// Plain number with four decimals, for discount factors.
    Factor,
}

/// Format an optional metric; `None` and non-finite values become `N/A`.
///
/// ```
/// use dcf_valuation::report::{Style, format_metric};
///
/// assert_eq!(format_metric(Some(0.1), Style::Percent), "10.00%");
/// assert_eq!(format_metric(Some(-1234567.891), Style::Money), "-1,234,567.89");
/// assert_eq!(format_metric(None, Style::Money), "N/A");
/// ```
#[must_use]
pub fn format_metric(value: Option<f64>, style: Style) -> String {
    match value.filter(|v| v.is_finite()) {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => match style {
            Style::Percent => format!("{:.2}%", v * 100.0),
            Style::Money => group_thousands(&format!("{v:.2}")),
            Style::Factor => format!("{v:.4}"),
        },
    }
}

// Input is a plain `-?\d+(\.\d+)?` string.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = plain
        .strip_prefix('-')
        .map_or(("", plain), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
