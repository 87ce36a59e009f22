//! Compare command - prints the precedence relation between two versions.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use verso_semver::{Comparator, Version};

use crate::config::{OutputFormat, Settings};
use crate::output;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "VERSION")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "VERSION")]
    pub right: String,
}

pub fn execute(args: CompareArgs, settings: &Settings) -> Result<i32> {
    let left = Version::parse(&args.left)
        .with_context(|| format!("Failed to parse version \"{}\"", args.left))?;
    let right = Version::parse(&args.right)
        .with_context(|| format!("Failed to parse version \"{}\"", args.right))?;

    let ordering = Comparator::compare(&left, &right);
    log::debug!("{} vs {}: {:?}", left, right, ordering);

    match settings.format {
        OutputFormat::Json => output::print_json(&json!({
            "left": args.left,
            "right": args.right,
            "ordering": output::ordering_name(ordering),
        }))?,
        OutputFormat::Text => println!(
            "{} {} {}",
            args.left,
            output::highlight(settings, output::ordering_symbol(ordering)),
            args.right
        ),
    }

    Ok(0)
}
