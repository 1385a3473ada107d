// Entry point and high-level CLI flow.
//
// Single linear pass:
// - load the CSV dataset,
// - clean the rows and filter them to one country,
// - compute the summary figures,
// - print the console report (or a JSON dump of the same summary).
mod loader;
mod output;
mod preprocess;
mod reports;
mod types;
mod util;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "covid-report",
    about = "Summarize COVID-19 case and death figures for one country"
)]
struct Args {
    /// Path to the COVID-19 CSV dataset.
    #[arg(short, long, default_value = "owid-covid-data.csv")]
    data: PathBuf,

    /// Country to report on, matched exactly against the `location` column.
    #[arg(short, long, default_value = "Argentina")]
    country: String,

    /// Print the full summary as pretty JSON instead of the console report.
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let rows = loader::load_dataset(&args.data)?;
    let records = preprocess::clean_and_filter(&rows, &args.country)?;

    if !args.json {
        println!(
            "Processing {}... ({} rows loaded, {} for {})",
            args.data.display(),
            util::format_int(rows.len()),
            util::format_int(records.len()),
            args.country
        );
        println!();
    }

    let summary = reports::generate_summary(&records, &args.country)?;
    if args.json {
        output::print_json(&summary)?;
    } else {
        output::print_summary(&summary);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
