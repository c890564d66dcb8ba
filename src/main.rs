mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Edit, Session};
use workweek::config::{Config, LoggingConfig};
use workweek::schedule::{Break, DayOfWeek, WorkInterval};
use workweek::store::ScheduleStore;
use workweek::utils::parse_interval_list;

#[derive(Parser)]
#[command(
    name = "workweek",
    version,
    about = "Edit and validate a weekly availability schedule",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Schedule JSON file (overrides configuration)
    #[arg(short, long, global = true)]
    schedule: Option<PathBuf>,

    /// TOML configuration file (defaults to WORKWEEK_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the edited schedule instead of saving it
    #[arg(long, global = true)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DayState {
    On,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weekly schedule
    Show,

    /// Check the schedule and report the first problem
    Validate,

    /// Copy the template intervals to Monday-Friday
    Weekdays,

    /// Copy the template intervals to every day
    AllDays,

    /// Remove all working days
    Clear,

    /// Apply intervals from the weekday of a date through Saturday
    FromDate {
        /// Date whose weekday starts the range (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Intervals such as "09:00-13:00,14:00-18:00" (defaults to the first day's intervals)
        #[arg(long)]
        template: Option<String>,
    },

    /// Remove every weekday touched by a date range
    BlockOut {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Switch a day on or off
    Toggle {
        /// Day of week (0 = Sunday .. 6 = Saturday)
        #[arg(long)]
        day: u8,

        #[arg(value_enum)]
        state: DayState,
    },

    /// Add a working interval to a day
    AddInterval {
        /// Day of week (0 = Sunday .. 6 = Saturday)
        #[arg(long)]
        day: u8,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },

    /// Remove a working interval from a day
    RemoveInterval {
        /// Day of week (0 = Sunday .. 6 = Saturday)
        #[arg(long)]
        day: u8,

        /// Interval position, starting at 0
        #[arg(long)]
        index: usize,
    },

    /// Add a break applied to every working day that contains it
    AddBreak {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        reason: Option<String>,
    },

    /// Remove a break
    RemoveBreak {
        /// Break position, starting at 0
        #[arg(long)]
        index: usize,
    },

    /// Set the buffer between appointments
    SetBuffer {
        /// Minutes (10-30)
        #[arg(required_unless_present = "clear")]
        minutes: Option<i64>,

        /// Unset the buffer
        #[arg(long, conflicts_with = "minutes")]
        clear: bool,
    },

    /// Set the slot step
    SetStep {
        /// Minutes (5, 10 or 15)
        #[arg(required_unless_present = "clear")]
        minutes: Option<i64>,

        /// Unset the slot step
        #[arg(long, conflicts_with = "minutes")]
        clear: bool,
    },
}

impl Commands {
    fn into_edit(self) -> Result<Edit> {
        let edit = match self {
            Self::Weekdays => Edit::Weekdays,
            Self::AllDays => Edit::AllDays,
            Self::Clear => Edit::Clear,
            Self::FromDate { date, template } => Edit::FromDate {
                date,
                template: template
                    .as_deref()
                    .map(parse_interval_list)
                    .transpose()?
                    .unwrap_or_default(),
            },
            Self::BlockOut { start, end } => Edit::BlockOut { start, end },
            Self::Toggle { day, state } => Edit::Toggle {
                day: DayOfWeek::new(day)?,
                on: matches!(state, DayState::On),
            },
            Self::AddInterval { day, from, to } => Edit::AddInterval {
                day: DayOfWeek::new(day)?,
                interval: WorkInterval::parse(&from, &to)?,
            },
            Self::RemoveInterval { day, index } => Edit::RemoveInterval {
                day: DayOfWeek::new(day)?,
                index,
            },
            Self::AddBreak { from, to, reason } => {
                let brk = Break::new(from, to);
                Edit::AddBreak(match reason {
                    Some(reason) => brk.with_reason(reason),
                    None => brk,
                })
            }
            Self::RemoveBreak { index } => Edit::RemoveBreak { index },
            Self::SetBuffer { minutes, .. } => Edit::SetBuffer(minutes),
            Self::SetStep { minutes, .. } => Edit::SetStep(minutes),
            Self::Show | Self::Validate => anyhow::bail!("not an editing command"),
        };
        Ok(edit)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(path) = cli.schedule.clone() {
        config.store.path = path;
    }
    if let Some(format) = cli.log_format.clone() {
        config.logging.format = format;
    }
    config.validate()?;

    // Initialize tracing/logging
    setup_tracing(&config.logging, cli.verbose)?;

    tracing::info!(path = %config.store.path.display(), "workweek starting");

    let session = Session::new(
        ScheduleStore::new(config.store.path.clone()),
        config.editor.validate_on_save,
        cli.dry_run,
    );

    match cli.command {
        Commands::Show => {
            commands::show(&session).await?;
        }

        Commands::Validate => {
            if !commands::validate(&session).await? {
                std::process::exit(1);
            }
        }

        command => {
            let edit = command.into_edit()?;
            tracing::info!(edit = ?edit, dry_run = cli.dry_run, "Applying edit");
            commands::edit(&session, edit).await?;
        }
    }

    Ok(())
}

fn setup_tracing(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("workweek=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new(format!("workweek={},warn", logging.level))
    };

    // Logs go to stderr so dry-run output on stdout stays clean JSON
    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
