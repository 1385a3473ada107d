use crate::types::{CountrySummary, MonthlyRow, YearMonth};
use crate::util::format_number;
use std::collections::BTreeMap;
use std::fmt::Write;
use tabled::{settings::Style, Table};

/// Render the console report. Figures appear in the order they are
/// computed: totals, averages, peak days, then the monthly tables.
pub fn render_summary(summary: &CountrySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "COVID-19 summary for {}", summary.country);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<22}{}",
        "Total Cases:",
        format_number(summary.total_cases, 0)
    );
    let _ = writeln!(
        out,
        "{:<22}{}",
        "Total Deaths:",
        format_number(summary.total_deaths, 0)
    );
    let _ = writeln!(
        out,
        "{:<22}{}",
        "Average Daily Cases:",
        format_number(summary.average_daily_cases, 2)
    );
    let _ = writeln!(
        out,
        "{:<22}{}",
        "Average Daily Deaths:",
        format_number(summary.average_daily_deaths, 2)
    );
    let _ = writeln!(out, "{:<22}{}", "Day with Most Cases:", summary.peak_cases_day);
    let _ = writeln!(out, "{:<22}{}", "Day with Most Deaths:", summary.peak_deaths_day);
    let _ = writeln!(out);
    let _ = writeln!(out, "Monthly Cases");
    let _ = writeln!(out, "{}", monthly_table(&summary.monthly_cases));
    let _ = writeln!(out);
    let _ = writeln!(out, "Monthly Deaths");
    let _ = writeln!(out, "{}", monthly_table(&summary.monthly_deaths));
    out
}

fn monthly_table(series: &BTreeMap<YearMonth, f64>) -> String {
    let rows: Vec<MonthlyRow> = series
        .iter()
        .map(|(month, total)| MonthlyRow {
            month: *month,
            total: format_number(*total, 0),
        })
        .collect();
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows).with(Style::markdown()).to_string()
}

pub fn print_summary(summary: &CountrySummary) {
    print!("{}", render_summary(summary));
}

pub fn print_json(summary: &CountrySummary) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_summary() -> CountrySummary {
        let mut daily_cases = BTreeMap::new();
        daily_cases.insert(d(2020, 3, 1), 1.0);
        daily_cases.insert(d(2020, 3, 2), 3.0);
        let mut daily_deaths = BTreeMap::new();
        daily_deaths.insert(d(2020, 3, 1), 0.0);
        daily_deaths.insert(d(2020, 3, 2), 1.0);
        let mut monthly_cases = BTreeMap::new();
        monthly_cases.insert(YearMonth { year: 2020, month: 3 }, 4.0);
        let mut monthly_deaths = BTreeMap::new();
        monthly_deaths.insert(YearMonth { year: 2020, month: 3 }, 1.0);
        CountrySummary {
            country: "Argentina".to_string(),
            total_cases: 4.0,
            total_deaths: 1.0,
            daily_cases,
            daily_deaths,
            average_daily_cases: 2.0,
            average_daily_deaths: 0.5,
            peak_cases_day: d(2020, 3, 2),
            peak_deaths_day: d(2020, 3, 2),
            monthly_cases,
            monthly_deaths,
        }
    }

    #[test]
    fn figures_are_printed_in_computation_order() {
        let text = render_summary(&sample_summary());
        let labels = [
            "Total Cases:",
            "Total Deaths:",
            "Average Daily Cases:",
            "Average Daily Deaths:",
            "Day with Most Cases:",
            "Day with Most Deaths:",
            "Monthly Cases",
            "Monthly Deaths",
        ];
        let mut last = 0;
        for label in labels {
            match text[last..].find(label) {
                Some(i) => last = last + i + label.len(),
                None => panic!("label `{label}` missing or out of order"),
            }
        }
    }

    #[test]
    fn report_carries_formatted_figures() {
        let text = render_summary(&sample_summary());
        assert!(text.contains("COVID-19 summary for Argentina"));

        let totals = text.lines().find(|l| l.starts_with("Total Cases:")).unwrap();
        assert!(totals.ends_with('4'));
        let avg = text
            .lines()
            .find(|l| l.starts_with("Average Daily Cases:"))
            .unwrap();
        assert!(avg.ends_with("2.00"));
        let peak = text
            .lines()
            .find(|l| l.starts_with("Day with Most Cases:"))
            .unwrap();
        assert!(peak.ends_with("2020-03-02"));

        assert!(text.contains("| Month"));
        assert!(text.contains("2020-03"));
    }

    #[test]
    fn empty_series_renders_a_placeholder() {
        let mut summary = sample_summary();
        summary.monthly_cases = BTreeMap::new();
        let text = render_summary(&summary);
        assert!(text.contains("(no rows)"));
    }

    #[test]
    fn json_view_keys_series_by_date_strings() {
        let value = serde_json::to_value(sample_summary()).unwrap();
        assert_eq!(value["country"], "Argentina");
        assert_eq!(value["total_cases"], 4.0);
        assert_eq!(value["daily_cases"]["2020-03-01"], 1.0);
        assert_eq!(value["monthly_cases"]["2020-03"], 4.0);
        assert_eq!(value["peak_cases_day"], "2020-03-02");
    }
}
