use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "verso.toml";

/// Output format of every subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The verso configuration file structure (verso.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersoConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Sort subcommand configuration
    pub sort: SortConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub format: Option<OutputFormat>,

    /// Colorize text output when writing to a terminal
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Sort from highest to lowest precedence
    pub descending: bool,
}

impl VersoConfig {
    /// Load configuration from verso.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            // Move to parent directory
            if !current.pop() {
                // Reached filesystem root, no config found
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: VersoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// Effective settings after merging the config file with command line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: bool,
    pub descending: bool,
}

impl Settings {
    /// Command line flags take precedence over config file settings
    pub fn resolve(config: Option<&VersoConfig>, json: bool, no_color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            config.and_then(|c| c.output.format).unwrap_or_default()
        };

        let color = !no_color
            && config.and_then(|c| c.output.color).unwrap_or(true)
            && std::io::stdout().is_terminal();

        Settings {
            format,
            color,
            descending: config.map(|c| c.sort.descending).unwrap_or(false),
        }
    }
}

/// Find the configuration to use: an explicit path, or discovery from the working directory
pub fn load(explicit: Option<&PathBuf>) -> Result<Option<VersoConfig>> {
    match explicit {
        Some(path) => VersoConfig::load_file(path).map(Some),
        None => VersoConfig::load_from_cwd(),
    }
}
