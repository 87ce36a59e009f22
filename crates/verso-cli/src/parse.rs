//! Parse command - validates a version and shows its components.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};
use verso_semver::{Identifier, Version};

use crate::config::{OutputFormat, Settings};
use crate::output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse
    #[arg(value_name = "VERSION")]
    pub version: String,
}

pub fn execute(args: ParseArgs, settings: &Settings) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Failed to parse version \"{}\"", args.version))?;
    log::trace!("Parsed {:?}", version);

    match settings.format {
        OutputFormat::Json => output::print_json(&to_json(&version))?,
        OutputFormat::Text => print_text(&version, settings),
    }

    Ok(0)
}

fn to_json(version: &Version) -> Value {
    let prerelease: Vec<Value> = version
        .prerelease()
        .iter()
        .map(|id| match id {
            Identifier::Numeric(n) => json!({ "kind": id.kind(), "value": n }),
            Identifier::AlphaNumeric(s) => json!({ "kind": id.kind(), "value": s }),
        })
        .collect();

    json!({
        "version": version,
        "major": version.major(),
        "minor": version.minor(),
        "patch": version.patch(),
        "prerelease": prerelease,
        "build": version.build_metadata(),
    })
}

fn print_text(version: &Version, settings: &Settings) {
    println!("version:     {}", output::highlight(settings, &version.to_string()));
    println!("major:       {}", version.major());
    println!("minor:       {}", version.minor());
    println!("patch:       {}", version.patch());

    if version.is_prerelease() {
        let ids: Vec<String> = version
            .prerelease()
            .iter()
            .map(|id| format!("{} ({})", id, id.kind()))
            .collect();
        println!("pre-release: {}", ids.join(", "));
    }

    if !version.build_metadata().is_empty() {
        println!("build:       {}", version.build_metadata().join("."));
    }
}
