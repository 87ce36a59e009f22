//! Check command - tests a single relation between two versions.
//!
//! Exits with 0 when the relation holds and 1 when it does not, so it can be
//! used directly in shell conditionals.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use verso_semver::{Comparator, Operator, Version};

use crate::config::{OutputFormat, Settings};
use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Left-hand version
    #[arg(value_name = "VERSION")]
    pub left: String,

    /// One of =, ==, !=, <>, <, <=, >, >=
    #[arg(value_name = "OPERATOR")]
    pub operator: Operator,

    /// Right-hand version
    #[arg(value_name = "VERSION")]
    pub right: String,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: CheckArgs, settings: &Settings) -> Result<i32> {
    let left = Version::parse(&args.left)
        .with_context(|| format!("Failed to parse version \"{}\"", args.left))?;
    let right = Version::parse(&args.right)
        .with_context(|| format!("Failed to parse version \"{}\"", args.right))?;

    let result = Comparator::satisfies(&left, args.operator, &right);
    log::debug!("{} {} {}: {}", left, args.operator, right, result);

    if !args.quiet {
        match settings.format {
            OutputFormat::Json => output::print_json(&json!({
                "left": args.left,
                "operator": args.operator.as_str(),
                "right": args.right,
                "result": result,
            }))?,
            OutputFormat::Text => println!("{}", output::verdict(settings, result)),
        }
    }

    Ok(if result { 0 } else { 1 })
}
