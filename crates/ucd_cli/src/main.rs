//! ucd CLI - `cd` with a history and a stash.
//!
//! Stdout carries exactly one thing: the directory for the calling shell to
//! `cd` into, or `.` to stay put. Everything else goes to stderr.

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use ucd_core::{Maintenance, NavRequest};

mod commands;

use commands::Outcome;

/// Written to stdout when the shell should stay where it is.
const SENTINEL: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "ucd")]
#[command(about = "cd with a memory: recency-ranked history and an aliased stash", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to cd into (default: home). With -d, the replacement
    /// directory name; with --ma, the new alias
    target: Option<String>,

    /// Alias for the stashed path, used in conjunction with -s
    #[arg(short = 'a', long = "alias", value_name = "ALIAS", requires = "stash")]
    alias: Option<String>,

    /// Clear history list
    #[arg(short = 'c', long = "clear")]
    clear: bool,

    /// Clear history list till MaxMRUDisplay limit
    #[arg(long = "clear-limit", visible_alias = "cl")]
    clear_limit: bool,

    /// Clear stash list
    #[arg(long = "clear-stash", visible_alias = "cs")]
    clear_stash: bool,

    /// Swap out the directory N parent directories up for TARGET
    #[arg(
        short = 'd',
        long = "swap",
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        requires = "target"
    )]
    swap: Option<usize>,

    /// Display Most Recently Used (MRU) list of paths cd-ed into
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Display list of stashed paths
    #[arg(long = "list-stash", visible_alias = "ls")]
    list_stash: bool,

    /// Modify alias of the indicated # from the stash list
    #[arg(
        long = "modify-alias",
        visible_alias = "ma",
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        requires = "target"
    )]
    modify_alias: Option<usize>,

    /// Number of times to repeat TARGET (e.g. `-n 3 ..`)
    #[arg(short = 'n', long = "repeat", value_name = "COUNT", default_value_t = 1)]
    repeat: usize,

    /// cd to the indicated # from the MRU list
    #[arg(
        short = 'p',
        long = "history",
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    history: Option<usize>,

    /// cd to the indicated # from the stash list
    #[arg(
        long = "stash-index",
        visible_alias = "ps",
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    stash_index: Option<usize>,

    /// cd to the stashed path with matching alias
    #[arg(long = "alias-target", visible_alias = "pa", value_name = "ALIAS")]
    alias_target: Option<String>,

    /// Stash the resolved path into a separate list
    #[arg(short = 's', long = "stash")]
    stash: bool,
}

impl Cli {
    /// The maintenance command requested, in precedence order.
    fn maintenance(&self) -> Option<Maintenance> {
        if self.clear {
            Some(Maintenance::ClearHistory)
        } else if self.clear_limit {
            Some(Maintenance::ClearToLimit)
        } else if self.clear_stash {
            Some(Maintenance::ClearStash)
        } else {
            self.modify_alias.map(|rank| Maintenance::Realias {
                rank,
                alias: self.target.clone().unwrap_or_default(),
            })
        }
    }

    fn nav_request(&self) -> NavRequest {
        NavRequest {
            target: self.target.clone(),
            repeat: self.repeat,
            swap_up: self.swap,
            alias: self.alias_target.clone(),
            history_index: self.history,
            stash_index: self.stash_index,
            stash_as: self
                .stash
                .then(|| self.alias.clone().unwrap_or_default()),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version included: stdout is reserved for the shell.
            eprint!("{}", err.render().ansi());
            emit(SENTINEL);
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match dispatch(&cli) {
        Ok(Outcome::Cd(path)) => {
            emit(&path.to_string_lossy());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Stay) => {
            emit(SENTINEL);
            ExitCode::SUCCESS
        }
        Err(err) => {
            commands::report_error(&err);
            emit(SENTINEL);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<Outcome> {
    let (locations, config) = commands::load_environment()?;

    if let Some(action) = cli.maintenance() {
        commands::maintain::run(&locations, config, action)?;
        return Ok(Outcome::Stay);
    }
    if cli.list {
        commands::list::history(&locations, &config);
        return Ok(Outcome::Stay);
    }
    if cli.list_stash {
        commands::list::stash(&locations, &config);
        return Ok(Outcome::Stay);
    }

    commands::navigate::run(&locations, config, &cli.nav_request())
}

/// Writes the shell-facing result with no trailing newline.
fn emit(text: &str) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "{}", text);
    let _ = stdout.flush();
}
