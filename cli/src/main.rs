//! shorthand: encode counters as short ids and describe elapsed time.

mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use shorthand_humanize::RelativeTimeFormatter;
use shorthand_shortid::ShortIdEncoder;
use shorthand_utils::LogFormat;

use crate::commands::Line;
use crate::config::ShorthandConfig;

#[derive(Parser)]
#[command(
    name = "shorthand",
    about = "Encode counters as short ids and describe elapsed time"
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "SHORTHAND_CONFIG")]
    config: Option<PathBuf>,

    /// Short-id alphabet, comma-separated symbols in digit order ("a,e,i,o,u").
    #[arg(long, env = "SHORTHAND_ALPHABET", value_delimiter = ',')]
    alphabet: Vec<String>,

    /// Thousands delimiter for large year counts.
    #[arg(long, env = "SHORTHAND_DELIMITER")]
    delimiter: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SHORTHAND_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "SHORTHAND_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Print results as a JSON array instead of one per line.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Encode counters as short-id tokens.
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i128>,
    },
    /// Decode short-id tokens back into counters.
    Decode {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Describe elapsed seconds as "N units ago".
    Ago {
        #[arg(required = true, allow_negative_numbers = true)]
        seconds: Vec<i128>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ShorthandConfig::from_toml_file(path)?,
        None => ShorthandConfig::default(),
    };
    config.override_alphabet(cli.alphabet)?;
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    shorthand_utils::init_logging(config.log_format, &config.log_level)?;
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    match config.to_toml_string() {
        Ok(effective) => tracing::debug!("Effective config:\n{effective}"),
        Err(e) => tracing::warn!("Cannot render effective config: {e}"),
    }
    if !config.alphabet.is_decodable() {
        tracing::warn!(
            "alphabet {} has duplicate or overlapping symbols, tokens will not decode",
            config.alphabet
        );
    }

    let encoder = ShortIdEncoder::new(config.alphabet.clone());
    let formatter = RelativeTimeFormatter::with_delimiter(config.delimiter.clone());

    match cli.command {
        Command::Encode { values } => {
            let records = commands::encode(&encoder, &values).context("cannot encode")?;
            emit(&records, cli.json)
        }
        Command::Decode { tokens } => {
            let records = commands::decode(&encoder, &tokens)
                .map_err(|(token, e)| anyhow::anyhow!("cannot decode {token:?}: {e}"))?;
            emit(&records, cli.json)
        }
        Command::Ago { seconds } => {
            let records = commands::ago(&formatter, &seconds).context("cannot describe")?;
            emit(&records, cli.json)
        }
    }
}

fn emit<T: Serialize + Line>(records: &[T], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for record in records {
            println!("{}", record.line());
        }
    }
    Ok(())
}
