mod check;
mod compare;
mod config;
mod output;
mod parse;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Settings;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for usage, parse and configuration errors
const ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(about = "Parse and compare Semantic Versioning 2.0.0 versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of searching for verso.toml
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the precedence relation between two versions (<, = or >)
    Compare(compare::CompareArgs),

    /// Test a relation between two versions, exit 0 if it holds and 1 if not
    Check(check::CheckArgs),

    /// Validate a version and print its components
    Parse(parse::ParseArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    builder.init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = config::load(args.config.as_ref())?;
    if config.is_none() {
        log::debug!("No {} found, using defaults", config::CONFIG_FILE);
    }

    let settings = Settings::resolve(config.as_ref(), args.json, args.no_color);
    log::trace!("Effective settings: {:?}", settings);

    if !settings.color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Compare(args) => compare::execute(args, &settings),
        Commands::Check(args) => check::execute(args, &settings),
        Commands::Parse(args) => parse::execute(args, &settings),
        Commands::Sort(args) => sort::execute(args, &settings),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
