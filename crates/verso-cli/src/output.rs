//! Shared printing helpers for the subcommands.

use colored::Colorize;
use serde_json::Value;
use std::cmp::Ordering;

use crate::config::Settings;

/// Symbol printed between two compared versions
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Name of an ordering in JSON output
pub fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Highlight a fragment of text output when color is enabled
pub fn highlight(settings: &Settings, text: &str) -> String {
    if settings.color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Render a boolean result, green for true and red for false
pub fn verdict(settings: &Settings, result: bool) -> String {
    let text = if result { "true" } else { "false" };
    if !settings.color {
        return text.to_string();
    }
    if result {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn plain() -> Settings {
        Settings {
            format: OutputFormat::Text,
            color: false,
            descending: false,
        }
    }

    #[test]
    fn test_ordering_symbols() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
        assert_eq!(ordering_name(Ordering::Greater), "greater");
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        assert_eq!(highlight(&plain(), "<"), "<");
        assert_eq!(verdict(&plain(), true), "true");
        assert_eq!(verdict(&plain(), false), "false");
    }
}
