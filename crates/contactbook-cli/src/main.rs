mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use crate::util::{local_today, parse_reference_date};
use contactbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "contactbook assistant")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    /// Reference date for the birthday report (YYYY-MM-DD)
    #[arg(long, hide = true, value_name = "DATE")]
    today: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        today,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(
                        path = %path.display(),
                        "no config file, using built-in prompt and 7-day window"
                    );
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = match today {
        Some(raw) => parse_reference_date(&raw).with_context(|| "parse --today")?,
        None => local_today(),
    };
    debug!(
        %today,
        window_days = app_config.birthday_window_days,
        custom_repl_text = !app_config.uses_default_repl_text(),
        json,
        "session starting"
    );

    let ctx = Context {
        json,
        today,
        birthday_window_days: app_config.birthday_window_days,
    };

    repl::run(io::stdin().lock(), io::stdout().lock(), &ctx, &app_config.repl)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}
