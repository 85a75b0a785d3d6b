//! Shopfront CLI - Database migrations and analytics reports.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! sf-cli migrate
//!
//! # Store-wide counters
//! sf-cli analytics summary
//!
//! # Gap-filled daily sales between two UTC dates (inclusive)
//! sf-cli analytics daily --start 2024-01-30 --end 2024-02-02
//!
//! # Same payload as GET /api/analytics, over the last 30 days
//! sf-cli analytics report --days 30
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(author, version, about = "Shopfront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Print dashboard analytics as JSON
    Analytics {
        #[command(subcommand)]
        report: AnalyticsReport,
    },
}

#[derive(Subcommand)]
enum AnalyticsReport {
    /// Users, products, order count and revenue
    Summary,
    /// Daily order counts and revenue, one entry per day
    Daily {
        /// First day (UTC, YYYY-MM-DD); defaults to six days before today
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day (UTC, YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Summary plus the trailing daily series
    Report {
        /// Number of days in the series
        #[arg(long, default_value_t = shopfront_admin::services::DEFAULT_WINDOW_DAYS,
              value_parser = clap::value_parser!(u32).range(1..=366))]
        days: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Analytics { report } => match report {
            AnalyticsReport::Summary => commands::analytics::summary().await?,
            AnalyticsReport::Daily { start, end } => {
                commands::analytics::daily(start, end).await?;
            }
            AnalyticsReport::Report { days } => commands::analytics::report(days).await?,
        },
    }
    Ok(())
}
