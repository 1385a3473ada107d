use crate::types::{CaseRecord, CountrySummary, YearMonth};
use crate::util::average;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no data for requested country `{0}`")]
    NoData(String),
}

/// Compute every headline figure and grouped series for one country.
///
/// `records` must already be cleaned and filtered; an empty slice means the
/// country never appeared in the dataset and is reported as [`ReportError::NoData`].
pub fn generate_summary(
    records: &[CaseRecord],
    country: &str,
) -> Result<CountrySummary, ReportError> {
    if records.is_empty() {
        return Err(ReportError::NoData(country.to_string()));
    }

    // Cumulative columns: the running total peaks at the last reported value,
    // so the column maximum is the country total.
    let total_cases = records.iter().map(|r| r.total_cases).fold(0.0, f64::max);
    let total_deaths = records.iter().map(|r| r.total_deaths).fold(0.0, f64::max);

    let daily_cases = sum_by_date(records, |r| r.new_cases);
    let daily_deaths = sum_by_date(records, |r| r.new_deaths);

    let average_daily_cases = average(&daily_cases.values().copied().collect::<Vec<_>>());
    let average_daily_deaths = average(&daily_deaths.values().copied().collect::<Vec<_>>());

    let peak_cases_day =
        peak_day(&daily_cases).ok_or_else(|| ReportError::NoData(country.to_string()))?;
    let peak_deaths_day =
        peak_day(&daily_deaths).ok_or_else(|| ReportError::NoData(country.to_string()))?;

    let monthly_cases = sum_by_month(records, |r| r.new_cases);
    let monthly_deaths = sum_by_month(records, |r| r.new_deaths);

    Ok(CountrySummary {
        country: country.to_string(),
        total_cases,
        total_deaths,
        daily_cases,
        daily_deaths,
        average_daily_cases,
        average_daily_deaths,
        peak_cases_day,
        peak_deaths_day,
        monthly_cases,
        monthly_deaths,
    })
}

fn sum_by_date<F>(records: &[CaseRecord], metric: F) -> BTreeMap<NaiveDate, f64>
where
    F: Fn(&CaseRecord) -> f64,
{
    let mut map: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in records {
        *map.entry(r.date).or_insert(0.0) += metric(r);
    }
    map
}

fn sum_by_month<F>(records: &[CaseRecord], metric: F) -> BTreeMap<YearMonth, f64>
where
    F: Fn(&CaseRecord) -> f64,
{
    let mut map: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for r in records {
        *map.entry(YearMonth::from(r.date)).or_insert(0.0) += metric(r);
    }
    map
}

/// Date whose value is the series maximum. Strict `>` on an ascending walk,
/// so ties keep the earliest date.
fn peak_day(series: &BTreeMap<NaiveDate, f64>) -> Option<NaiveDate> {
    let mut best: Option<(NaiveDate, f64)> = None;
    for (&date, &value) in series {
        match best {
            Some((_, top)) if value > top => best = Some((date, value)),
            None => best = Some((date, value)),
            _ => {}
        }
    }
    best.map(|(date, _)| date)
}
