//! Sort command - orders versions by precedence.

use anyhow::Result;
use clap::Args;
use serde_json::json;
use verso_semver::Semver;

use crate::config::{OutputFormat, Settings};
use crate::output;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest precedence
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs, settings: &Settings) -> Result<i32> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let descending = args.reverse || settings.descending;

    let sorted = if descending {
        Semver::rsort(&versions)?
    } else {
        Semver::sort(&versions)?
    };
    log::debug!("Sorted {} version(s), descending: {}", sorted.len(), descending);

    match settings.format {
        OutputFormat::Json => output::print_json(&json!(sorted))?,
        OutputFormat::Text => {
            for version in &sorted {
                println!("{}", version);
            }
        }
    }

    Ok(0)
}
