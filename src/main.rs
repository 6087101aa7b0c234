use clap::{error::ErrorKind, CommandFactory, Parser};
use serde::Serialize;
use std::error::Error;
use tracing_subscriber::EnvFilter;

use pacer::dispatch;
use pacer::report::{self, Summary, Totals};

/// workout statistics from raw sensor packages
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Computes distance, average speed and calories burned from raw sensor packages, with per-sport calorie models and optional batch totals."
)]
struct Cli {
    /// sensor packages as CODE:v1,v2,... where CODE is RUN, WLK or SWM (demo batch when omitted)
    packages: Vec<String>,

    /// emit summaries as json instead of text lines
    #[clap(long)]
    json: bool,

    /// append an aggregate totals report for the whole batch
    #[clap(long)]
    totals: bool,
}

/// Document shape for --json output.
#[derive(Debug, Serialize)]
struct JsonReport {
    summaries: Vec<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<Totals>,
}

/// The reference sensor feed, used when no packages are given.
fn demo_packages() -> Vec<(String, Vec<f64>)> {
    vec![
        ("SWM".to_string(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN".to_string(), vec![15000.0, 1.0, 75.0]),
        ("WLK".to_string(), vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Splits a raw `CODE:v1,v2,...` argument into a sensor package.
fn parse_package(raw: &str) -> Result<(String, Vec<f64>), String> {
    let (code, values) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected CODE:v1,v2,... got '{}'", raw))?;

    let mut args = Vec::new();
    for part in values.split(',') {
        let value = part
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a number in '{}'", part, raw))?;
        args.push(value);
    }

    Ok((code.to_string(), args))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout stays clean for report output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let packages = if cli.packages.is_empty() {
        demo_packages()
    } else {
        let mut parsed = Vec::with_capacity(cli.packages.len());
        for raw in &cli.packages {
            match parse_package(raw) {
                Ok(package) => parsed.push(package),
                Err(msg) => {
                    let mut cmd = Cli::command();
                    cmd.error(ErrorKind::ValueValidation, msg).exit();
                }
            }
        }
        parsed
    };

    let mut summaries = Vec::with_capacity(packages.len());
    for (code, args) in &packages {
        let workout = dispatch::resolve(code, args)?;
        summaries.push(workout.summary());
    }

    let totals = if cli.totals {
        report::totals(&summaries)
    } else {
        None
    };

    if cli.json {
        let doc = JsonReport { summaries, totals };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for summary in &summaries {
            println!("{}", summary.render());
        }
        if let Some(totals) = totals {
            println!("{}", totals.render());
        }
    }

    Ok(())
}
