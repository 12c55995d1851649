mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use dalryeok_core::ViewMode;
use dalryeok_core::config::DalryeokConfig;
use dalryeok_core::grid::parse_calendar_date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dalryeok")]
#[command(about = "Month and week views, search, conflict checks and reminders for your events")]
struct Cli {
    /// Events file to read instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid around a date
    Month {
        /// Any day in the month (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the week around a date
    Week {
        /// Any day in the week (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List events in the current view, optionally filtered by a search term
    List {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// "week" or "month", defaults to the configured view
        #[arg(long)]
        view: Option<ViewMode>,

        /// Match against title, description and location
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Check whether a new or edited event would double-book
    Check {
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        start: String,

        /// End time (HH:MM)
        #[arg(long)]
        end: String,

        /// Id of the event being edited, if any
        #[arg(long)]
        id: Option<String>,
    },
    /// Watch the events file and print reminders as they come due
    Notify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DalryeokConfig::load()?;
    let events_path = cli.events.unwrap_or_else(|| config.events_path());

    match cli.command {
        Commands::Month { date } => {
            let events = store::load_events(&events_path)?;
            commands::month::run(&events, resolve_date(date.as_deref())?)
        }
        Commands::Week { date } => {
            let events = store::load_events(&events_path)?;
            commands::week::run(&events, resolve_date(date.as_deref())?)
        }
        Commands::List { date, view, search } => {
            let events = store::load_events(&events_path)?;
            let view = view.unwrap_or(config.default_view);
            commands::list::run(&events, &search, resolve_date(date.as_deref())?, view)
        }
        Commands::Check {
            date,
            start,
            end,
            id,
        } => {
            let events = store::load_events(&events_path)?;
            commands::check::run(&events, date, start, end, id)
        }
        Commands::Notify => {
            let poll_interval = config.poll_interval()?;
            commands::notify::run(events_path, poll_interval).await
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => parse_calendar_date(s).ok_or_else(|| {
            anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)
        }),
        None => Ok(Local::now().date_naive()),
    }
}
