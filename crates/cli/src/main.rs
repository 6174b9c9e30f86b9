//! `lostfound` -- run the Lost & Found page logic from the command line.
//!
//! Results go to stdout as JSON; logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                                 |
//! |------------------------|----------|---------|---------------------------------------------|
//! | `LOSTFOUND_STUDENT_ID` | no       | --      | Logged-in student id; unset means a guest    |
//! | `LOSTFOUND_TODAY`      | no       | --      | Pin "today" as `YYYY-MM-DD`                  |
//! | `RUST_LOG`             | no       | `lostfound=info` | Log filter                         |

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lostfound_cli::commands::{self, CriteriaOverrides};
use lostfound_cli::config::CliConfig;
use lostfound_core::{FilterCriteria, FormKind, FormValues, ItemRecord, TimePeriod};

#[derive(Parser)]
#[command(name = "lostfound")]
#[command(about = "Campus Lost & Found page logic")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter a JSON array of item records.
    Filter {
        /// JSON array of `{title, category, location, postedDate}`.
        #[arg(long)]
        items: PathBuf,
        /// JSON object of filter criteria; flags below override it.
        #[arg(long)]
        criteria: Option<PathBuf>,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "from")]
        date_from: Option<String>,
        #[arg(long = "to")]
        date_to: Option<String>,
        /// today, week, month (or lastWeek, lastMonth).
        #[arg(long)]
        period: Option<TimePeriod>,
    },
    /// Validate a lost or found report. Exits 1 when the report is rejected.
    Validate {
        kind: FormKind,
        /// JSON object of field name to raw value.
        #[arg(long)]
        values: Option<PathBuf>,
        /// `name=value`, repeatable; overrides the values file.
        #[arg(long = "field")]
        fields: Vec<String>,
    },
    /// What the claim / contact button does for the current session.
    Contact,
    /// Header label for the current session.
    Whoami,
    /// Summarize a submitted report from its query string.
    Report { query: String },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lostfound=info,lostfound_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Filter {
            items,
            criteria,
            keyword,
            category,
            location,
            date_from,
            date_to,
            period,
        } => {
            let records: Vec<ItemRecord> =
                commands::load_json(&items).context("loading item records")?;
            let base: FilterCriteria = match criteria {
                Some(path) => commands::load_json(&path).context("loading filter criteria")?,
                None => FilterCriteria::default(),
            };
            let criteria = CriteriaOverrides {
                keyword,
                category,
                location,
                date_from,
                date_to,
                time_period: period,
            }
            .apply(base);
            print_json(&commands::run_filter(&records, &criteria, config.today()))?;
        }
        Command::Validate {
            kind,
            values,
            fields,
        } => {
            let mut form: FormValues = match values {
                Some(path) => commands::load_json(&path).context("loading form values")?,
                None => FormValues::new(),
            };
            for raw in &fields {
                let (name, value) = commands::parse_field_assignment(raw)?;
                form.insert(name, value);
            }
            let result = commands::run_validate(kind, &form, config.today());
            print_json(&result)?;
            if !result.ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Contact => print_json(&commands::run_contact(&config))?,
        Command::Whoami => print_json(&commands::run_whoami(&config))?,
        Command::Report { query } => print_json(&commands::run_report(&query))?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("rendering output")?;
    println!("{rendered}");
    Ok(())
}
