use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub location: Option<String>,
    pub date: Option<String>,
    pub total_cases: Option<String>,
    pub total_deaths: Option<String>,
    pub new_cases: Option<String>,
    pub new_deaths: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub date: NaiveDate,
    pub total_cases: f64,
    pub total_deaths: f64,
    pub new_cases: f64,
    pub new_deaths: f64,
}

/// Calendar month key. `Ord` is derived on (year, month), so a
/// `BTreeMap<YearMonth, _>` iterates chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub total_cases: f64,
    pub total_deaths: f64,
    pub daily_cases: BTreeMap<NaiveDate, f64>,
    pub daily_deaths: BTreeMap<NaiveDate, f64>,
    pub average_daily_cases: f64,
    pub average_daily_deaths: f64,
    pub peak_cases_day: NaiveDate,
    pub peak_deaths_day: NaiveDate,
    pub monthly_cases: BTreeMap<YearMonth, f64>,
    pub monthly_deaths: BTreeMap<YearMonth, f64>,
}

#[derive(Debug, Clone, Tabled)]
pub struct MonthlyRow {
    #[tabled(rename = "Month")]
    pub month: YearMonth,
    #[tabled(rename = "Total")]
    pub total: String,
}
