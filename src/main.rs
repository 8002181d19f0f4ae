//! Gridpad - A spreadsheet widget for the terminal

mod batch;
mod config;
mod error;
mod tui;

use anyhow::Context;
use gridpad_core::{CellRef, DEFAULT_CONTAINER, startup_with};
use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use batch::{Assignment, apply_assignments, parse_cell, print_cells};
use error::ArgError;

fn print_usage() {
    eprintln!("Usage: gridpad [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>       Load configuration from FILE");
    eprintln!("      --no-config           Ignore the user configuration file");
    eprintln!("  -e, --enter <CELL=TEXT>   Enter TEXT into CELL and commit it (can be repeated)");
    eprintln!("  -p, --print <CELL>        Print CELL's displayed value (non-interactive)");
    eprintln!("      --dump                Print every non-blank cell (non-interactive)");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    help: bool,
    config_file: Option<PathBuf>,
    no_config: bool,
    entries: Vec<Assignment>,
    prints: Vec<CellRef>,
    dump: bool,
}

impl Args {
    fn is_batch(&self) -> bool {
        self.dump || !self.prints.is_empty()
    }
}

fn parse_args(args: &[String]) -> Result<Args, ArgError> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| ArgError::MissingValue(name.to_string()))
        };
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-c" | "--config" => parsed.config_file = Some(PathBuf::from(value("--config")?)),
            "--no-config" => parsed.no_config = true,
            "-e" | "--enter" => parsed.entries.push(Assignment::parse(value("--enter")?)?),
            "-p" | "--print" => parsed.prints.push(parse_cell(value("--print")?)?),
            "--dump" => parsed.dump = true,
            other if other.starts_with('-') => {
                return Err(ArgError::UnknownOption(other.to_string()));
            }
            other => return Err(ArgError::Unexpected(other.to_string())),
        }
    }
    Ok(parsed)
}

/// Set up env_logger. In the terminal UI logging is off unless `RUST_LOG`
/// or a log file asks for it, since stderr shares the screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Vec<String> {
    let mut warnings = Vec::new();
    let default_filter = if interactive && log_file.is_none() {
        "off"
    } else {
        "warn"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => warnings.push(format!("Failed to open log file {}: {}", path.display(), e)),
        }
    }

    if let Err(e) = builder.try_init() {
        warnings.push(format!("Failed to initialise logging: {}", e));
    }
    warnings
}

fn run(args: Args) -> anyhow::Result<i32> {
    let (config, mut warnings) = if args.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(args.config_file.as_deref())
    };
    warnings.extend(init_logging(config.log_file.as_deref(), !args.is_batch()));
    for warning in &warnings {
        log::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let mut page = startup_with(&config.settings);
    let sheet = page
        .sheet_mut(DEFAULT_CONTAINER)
        .context("startup did not render a sheet")?;
    apply_assignments(sheet, &args.entries)?;

    if args.is_batch() {
        let mut stdout = std::io::stdout().lock();
        let saw_error = print_cells(sheet, &args.prints, args.dump, &mut stdout)?;
        return Ok(if saw_error { 1 } else { 0 });
    }

    let mut app = tui::App::new(page, config.column_width);
    tui::run(&mut app).context("terminal UI failed")?;
    Ok(0)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if args.help {
        print_usage();
        return;
    }

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
