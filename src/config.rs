use std::path::PathBuf;

use clap::Parser;
use serde_derive::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "sales-tracker", about = "Record sales and report totals")]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "sales-tracker.toml")]
    pub config: PathBuf,

    /// Sales CSV file (overrides config file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_storage")]
    pub storage: StorageConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_storage() -> StorageConfig {
    StorageConfig {
        file: default_file(),
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("sales.csv")
}

// Info-level logs would interleave with the interactive prompts.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: default_storage(),
            logging: default_logging(),
        }
    }
}

impl Config {
    /// Reads the config file named by `cli` (defaults when absent or
    /// unparsable), then applies CLI overrides.
    pub fn load(cli: &CliArgs) -> Self {
        let mut config = match std::fs::read_to_string(&cli.config) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse config file: {}", e);
                Config::default()
            }),
            Err(_) => Config::default(),
        };

        // CLI overrides
        if let Some(ref file) = cli.file {
            config.storage.file = file.clone();
        }
        if let Some(ref level) = cli.log_level {
            config.logging.level = level.clone();
        }

        config
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
