use crate::types::{CaseRecord, RawRow};
use crate::util::{parse_date_safe, parse_f64_safe};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("row {line}: `{value}` is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { line: usize, value: String },
}

/// Derive the cleaned per-day records for one country.
///
/// Returns a fresh collection; the loaded rows are never modified. Dates are
/// validated for every row, not just the target country's, so a malformed
/// date anywhere in the file is reported. Metric cells that are missing,
/// empty, or non-numeric become `0.0`.
pub fn clean_and_filter(
    rows: &[RawRow],
    country: &str,
) -> Result<Vec<CaseRecord>, PreprocessError> {
    let mut records = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let date = match parse_date_safe(row.date.as_deref()) {
            Some(d) => d,
            None => {
                return Err(PreprocessError::InvalidDate {
                    // +2: one for the header row, one for 1-based numbering.
                    line: idx + 2,
                    value: row.date.clone().unwrap_or_default(),
                });
            }
        };

        // Exact match only: no trimming, no case-folding.
        if row.location.as_deref() != Some(country) {
            continue;
        }

        records.push(CaseRecord {
            date,
            total_cases: parse_f64_safe(row.total_cases.as_deref()).unwrap_or(0.0),
            total_deaths: parse_f64_safe(row.total_deaths.as_deref()).unwrap_or(0.0),
            new_cases: parse_f64_safe(row.new_cases.as_deref()).unwrap_or(0.0),
            new_deaths: parse_f64_safe(row.new_deaths.as_deref()).unwrap_or(0.0),
        });
    }
    Ok(records)
}
