// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod config;
mod error;
mod session;

use clap::{Parser, Subcommand};
use config::{load_optional_centers, resolve_allotment};
use error::CliError;
use gymdesk::Scope;
use gymdesk_domain::{Center, parse_date_key};
use gymdesk_store::RecordStore;
use serde::Serialize;
use session::with_store;
use std::path::PathBuf;
use time::Date;
use tracing::info;

/// gymdesk - holiday and vacation calendars for gym centers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Generate the holidays of a fiscal year as a date key to name map
    Holidays {
        /// Fiscal year (runs February 1 to January 31)
        #[arg(long)]
        fiscal_year: i32,
        /// JSON file with the centers whose local holidays are included
        #[arg(long)]
        centers: Option<PathBuf>,
        /// Snapshot file to store the result in
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Show the fiscal year and work year window of a date
    FiscalYear {
        /// Date key (YYYY-MM-DD)
        date: String,
    },
    /// Show Good Friday, Easter Sunday and Easter Monday of a year
    Easter {
        /// Calendar year
        year: i32,
    },
    /// Manage a member's vacation days
    Vacation {
        #[command(subcommand)]
        action: VacationAction,
    },
}

#[derive(Subcommand, Debug)]
enum VacationAction {
    /// Book a vacation day
    Add {
        #[command(flatten)]
        target: VacationTarget,
        /// Date key (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        date: Date,
        /// Reason shown in the calendar
        #[arg(long, default_value = "Vacances")]
        reason: String,
    },
    /// Remove a booked vacation day
    Remove {
        #[command(flatten)]
        target: VacationTarget,
        /// Date key (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        date: Date,
    },
    /// List booked vacation days
    List {
        #[command(flatten)]
        target: VacationTarget,
    },
    /// Show used and remaining vacation days
    Balance {
        #[command(flatten)]
        target: VacationTarget,
    },
}

impl VacationAction {
    const fn target(&self) -> &VacationTarget {
        match self {
            Self::Add { target, .. }
            | Self::Remove { target, .. }
            | Self::List { target }
            | Self::Balance { target } => target,
        }
    }
}

/// Which vacation calendar a command works on.
#[derive(clap::Args, Debug)]
struct VacationTarget {
    /// Snapshot file holding the calendars
    #[arg(long)]
    store: PathBuf,
    /// Member identifier
    #[arg(long)]
    member: String,
    /// Fiscal year (runs February 1 to January 31)
    #[arg(long)]
    fiscal_year: i32,
    /// JSON file with centers, used to look up the vacation allotment
    #[arg(long, requires = "center")]
    centers: Option<PathBuf>,
    /// Center whose vacation allotment applies
    #[arg(long, requires = "centers")]
    center: Option<String>,
}

fn parse_date_arg(raw: &str) -> Result<Date, String> {
    parse_date_key(raw).map_err(|e| e.to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json: String = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

async fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        CliCommand::Holidays {
            fiscal_year,
            centers,
            store,
        } => {
            let centers: Vec<Center> = load_optional_centers(centers.as_deref())?;
            let holidays = match store {
                Some(path) => {
                    with_store(&path, true, |store| {
                        commands::holidays(fiscal_year, &centers, Some(store as &dyn RecordStore))
                    })
                    .await?
                }
                None => commands::holidays(fiscal_year, &centers, None)?,
            };
            info!(fiscal_year, holidays = holidays.len(), "Generated holidays");
            print_json(&holidays)
        }
        CliCommand::FiscalYear { date } => print_json(&commands::fiscal_year(&date)?),
        CliCommand::Easter { year } => print_json(&commands::easter(year)?),
        CliCommand::Vacation { action } => run_vacation(action).await,
    }
}

async fn run_vacation(action: VacationAction) -> Result<(), CliError> {
    let target: &VacationTarget = action.target();
    let scope: Scope = Scope::Vacations {
        fiscal_year: target.fiscal_year,
        member: target.member.clone(),
    };
    let centers: Vec<Center> = load_optional_centers(target.centers.as_deref())?;
    let allotted_days: Option<u16> = resolve_allotment(&centers, target.center.as_deref())?;
    let path: PathBuf = target.store.clone();

    match action {
        VacationAction::Add { date, reason, .. } => {
            let change = with_store(&path, true, |store| {
                commands::vacation_add(store, scope, allotted_days, date, reason)
            })
            .await?;
            print_json(&change)
        }
        VacationAction::Remove { date, .. } => {
            let change = with_store(&path, true, |store| {
                commands::vacation_remove(store, scope, date)
            })
            .await?;
            print_json(&change)
        }
        VacationAction::List { .. } => {
            let days = with_store(&path, false, |store| commands::vacation_list(store, scope))
                .await?;
            print_json(&days)
        }
        VacationAction::Balance { .. } => {
            let balance = with_store(&path, false, |store| {
                commands::vacation_balance(store, scope, allotted_days)
            })
            .await?;
            print_json(&balance)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(args).await?;
    Ok(())
}
