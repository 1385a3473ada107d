// Parsing and formatting helpers.
//
// All the forgiving CSV cell handling lives here so the pipeline stages can
// work with clean, typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Parse an optional CSV cell into `f64`, tolerating the usual export noise.
///
/// - Accepts `Option<&str>` so callers can pass optional fields through.
/// - Trims whitespace and strips `","` thousands separators.
/// - Rejects anything containing alphabetic characters: Rust's float parser
///   would accept text like `NaN` or `inf`, which has to fall back to the
///   caller's null-fill default instead of poisoning sums.
/// - Returns `None` for empty or unparseable values.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() || s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    s.replace(',', "").parse().ok()
}

/// Parse an optional CSV cell as a `YYYY-MM-DD` calendar date.
pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Arithmetic mean; 0 for an empty slice so callers never see NaN.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Format a float with a fixed number of decimal places and locale-aware
/// thousands separators (e.g. `1,234,567.89`).
pub fn format_number(n: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut out = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    if n.is_sign_negative() && n != 0.0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Thousands-separated rendering for integer counts in console messages
/// (e.g. `429,435 rows loaded`).
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
